use std::collections::{BTreeSet, HashMap};

use log::debug;

/// Group the skill tags live in. Tags can be picked from anywhere in the form.
pub const SKILLS_GROUP: &str = "skills";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    /// One option at most, like a radio group.
    Exclusive,
    /// Any number of options.
    Multi,
}

/// Result of a single select/toggle call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionChange {
    pub selected: Option<String>,
    pub deselected: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SelectionTracker {
    kinds: HashMap<String, GroupKind>,
    exclusive: HashMap<String, String>,
    multi: HashMap<String, BTreeSet<String>>,
}

impl Default for SelectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionTracker {
    pub fn new() -> Self {
        let mut tracker = Self {
            kinds: HashMap::new(),
            exclusive: HashMap::new(),
            multi: HashMap::new(),
        };
        tracker.register(SKILLS_GROUP, GroupKind::Multi);
        tracker
    }

    pub fn register(&mut self, panel: &str, kind: GroupKind) {
        self.kinds.insert(panel.to_string(), kind);
    }

    /// Panels that were never registered behave like option-card panels.
    pub fn kind(&self, panel: &str) -> GroupKind {
        self.kinds.get(panel).copied().unwrap_or(GroupKind::Exclusive)
    }

    pub fn select(&mut self, panel: &str, option: &str) -> SelectionChange {
        let change = match self.kind(panel) {
            GroupKind::Exclusive => self.select_exclusive(panel, option),
            GroupKind::Multi => self.toggle_in(panel, option),
        };
        debug!("selection in {}: {:?}", panel, change);
        change
    }

    #[cfg(test)]
    pub fn toggle(&mut self, tag: &str) -> SelectionChange {
        self.select(SKILLS_GROUP, tag)
    }

    pub fn is_selected(&self, panel: &str, option: &str) -> bool {
        match self.kind(panel) {
            GroupKind::Exclusive => self.exclusive.get(panel).map_or(false, |o| o == option),
            GroupKind::Multi => self.multi.get(panel).map_or(false, |set| set.contains(option)),
        }
    }

    pub fn selected(&self, panel: &str) -> Vec<String> {
        match self.kind(panel) {
            GroupKind::Exclusive => self.exclusive.get(panel).cloned().into_iter().collect(),
            GroupKind::Multi => self
                .multi
                .get(panel)
                .map(|set| set.iter().cloned().collect())
                .unwrap_or_default(),
        }
    }

    pub fn count(&self, panel: &str) -> usize {
        match self.kind(panel) {
            GroupKind::Exclusive => usize::from(self.exclusive.contains_key(panel)),
            GroupKind::Multi => self.multi.get(panel).map_or(0, BTreeSet::len),
        }
    }

    /// Every step is accepted. Selections are optional on this form.
    pub fn validate_step(&self, _panel: &str) -> bool {
        true
    }

    fn select_exclusive(&mut self, panel: &str, option: &str) -> SelectionChange {
        match self.exclusive.get(panel) {
            // clicking the chosen card again clears it
            Some(current) if current == option => SelectionChange {
                selected: None,
                deselected: self.exclusive.remove(panel),
            },
            _ => SelectionChange {
                selected: Some(option.to_string()),
                deselected: self.exclusive.insert(panel.to_string(), option.to_string()),
            },
        }
    }

    fn toggle_in(&mut self, panel: &str, option: &str) -> SelectionChange {
        let set = self.multi.entry(panel.to_string()).or_default();
        if set.remove(option) {
            SelectionChange {
                selected: None,
                deselected: Some(option.to_string()),
            }
        } else {
            set.insert(option.to_string());
            SelectionChange {
                selected: Some(option.to_string()),
                deselected: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive_selection_replaces_prior_option() {
        let mut tracker = SelectionTracker::new();
        tracker.select("q1", "a");
        let change = tracker.select("q1", "b");

        assert_eq!(change.selected.as_deref(), Some("b"));
        assert_eq!(change.deselected.as_deref(), Some("a"));
        assert!(!tracker.is_selected("q1", "a"));
        assert!(tracker.is_selected("q1", "b"));
        assert_eq!(tracker.count("q1"), 1);
        assert_eq!(tracker.selected("q1"), vec!["b".to_string()]);
    }

    #[test]
    fn exclusive_panels_are_independent() {
        let mut tracker = SelectionTracker::new();
        tracker.select("q1", "a");
        tracker.select("q2", "c");
        assert_eq!(tracker.count("q1"), 1);
        assert_eq!(tracker.count("q2"), 1);
        assert!(tracker.is_selected("q1", "a"));
    }

    #[test]
    fn reselecting_the_chosen_card_clears_it() {
        let mut tracker = SelectionTracker::new();
        tracker.select("q1", "a");
        let change = tracker.select("q1", "a");
        assert_eq!(change.selected, None);
        assert_eq!(change.deselected.as_deref(), Some("a"));
        assert_eq!(tracker.count("q1"), 0);
    }

    #[test]
    fn toggling_a_tag_twice_restores_the_set() {
        let mut tracker = SelectionTracker::new();
        tracker.toggle("rust");
        tracker.toggle("design");
        let before = tracker.selected(SKILLS_GROUP);

        tracker.toggle("writing");
        tracker.toggle("writing");
        assert_eq!(tracker.selected(SKILLS_GROUP), before);

        tracker.toggle("rust");
        tracker.toggle("rust");
        assert_eq!(tracker.selected(SKILLS_GROUP), before);
        assert_eq!(tracker.count(SKILLS_GROUP), 2);
    }

    #[test]
    fn registered_multi_panels_toggle_through_select() {
        let mut tracker = SelectionTracker::new();
        tracker.register("values", GroupKind::Multi);
        tracker.select("values", "autonomy");
        tracker.select("values", "impact");
        assert_eq!(tracker.count("values"), 2);
        let change = tracker.select("values", "autonomy");
        assert_eq!(change.deselected.as_deref(), Some("autonomy"));
        assert_eq!(tracker.selected("values"), vec!["impact".to_string()]);
    }

    #[test]
    fn validation_never_blocks() {
        let tracker = SelectionTracker::new();
        assert!(tracker.validate_step("q1"));
        assert_eq!(tracker.count("q1"), 0);
    }
}
