use log::debug;
use yew::prelude::*;

use crate::effects;
use crate::motion::{self, Target, Tween};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingPeriod {
    Monthly,
    Annual,
}

impl BillingPeriod {
    pub fn from_checked(annual: bool) -> Self {
        if annual {
            BillingPeriod::Annual
        } else {
            BillingPeriod::Monthly
        }
    }
}

pub struct Plan {
    pub name: &'static str,
    pub monthly: &'static str,
    pub annual: &'static str,
    pub perks: &'static [&'static str],
    pub featured: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Explorer",
        monthly: "$0",
        annual: "$0",
        perks: &["Career assessment", "Top 3 career matches", "Community access"],
        featured: false,
    },
    Plan {
        name: "Navigator",
        monthly: "$19",
        annual: "$15",
        perks: &["Full match report", "Skill gap analysis", "Personal learning plan"],
        featured: true,
    },
    Plan {
        name: "Pathfinder",
        monthly: "$49",
        annual: "$39",
        perks: &["Everything in Navigator", "Monthly coaching call", "Resume review"],
        featured: false,
    },
];

/// Annual plans are still quoted per month.
pub fn price_for(plan: &Plan, period: BillingPeriod) -> &'static str {
    match period {
        BillingPeriod::Monthly => plan.monthly,
        BillingPeriod::Annual => plan.annual,
    }
}

/// Tracks the price fade. The period shown after a fade is whatever was asked
/// for last, not whatever was asked for when the fade began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceSwap {
    requested: BillingPeriod,
    shown: BillingPeriod,
    fading: bool,
}

impl Default for PriceSwap {
    fn default() -> Self {
        Self {
            requested: BillingPeriod::Monthly,
            shown: BillingPeriod::Monthly,
            fading: false,
        }
    }
}

impl PriceSwap {
    /// Records the toggle. Returns true when a new fade-out should start.
    pub fn request(&mut self, period: BillingPeriod) -> bool {
        self.requested = period;
        if self.fading || self.requested == self.shown {
            return false;
        }
        self.fading = true;
        true
    }

    /// Fade-out finished: show the latest requested period.
    pub fn settle(&mut self) -> BillingPeriod {
        self.fading = false;
        self.shown = self.requested;
        self.shown
    }

    #[cfg(test)]
    pub fn shown(&self) -> BillingPeriod {
        self.shown
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let period = use_state(|| BillingPeriod::Monthly);
    let shown = use_state(|| BillingPeriod::Monthly);
    let swap = use_mut_ref(PriceSwap::default);

    let onchange = {
        let period = period.clone();
        let shown = shown.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() else {
                return;
            };
            let requested = BillingPeriod::from_checked(input.checked());
            period.set(requested);
            if !swap.borrow_mut().request(requested) {
                return;
            }
            debug!("billing period switched to {:?}", requested);
            let swap = swap.clone();
            let shown = shown.clone();
            motion::to_then(
                Target::Selector(".pricing-card .price"),
                &Tween::new(0.3).opacity(0.0).y(-20),
                move || {
                    shown.set(swap.borrow_mut().settle());
                    motion::to(Target::Selector(".pricing-card .price"), &Tween::new(0.3).opacity(1.0).y(0));
                },
            );
        })
    };

    html! {
        <section class="pricing-section" id="pricing">
            <div class="section-header">
                <h2 class="section-title">{"Simple, honest pricing"}</h2>
            </div>
            <div class="billing-toggle">
                <span>{"Monthly"}</span>
                <label class="switch">
                    <input type="checkbox" id="billing-toggle"
                        checked={*period == BillingPeriod::Annual} {onchange} />
                    <span class="slider round"></span>
                </label>
                <span>{"Annual"}<em class="save-badge">{"Save 20%"}</em></span>
            </div>
            <div class="pricing-cards">
                { for PLANS.iter().map(|plan| html! {
                    <div class={classes!("pricing-card", plan.featured.then(|| "featured"))}
                        onmousemove={Callback::from(|e: MouseEvent| effects::on_card_pointer(&e, false))}
                        onmouseleave={Callback::from(|e: MouseEvent| effects::on_card_leave(&e))}>
                        <h3>{ plan.name }</h3>
                        <div class="price" data-monthly={plan.monthly} data-annual={plan.annual}>
                            { price_for(plan, *shown) }<span>{"/month"}</span>
                        </div>
                        <ul>
                            { for plan.perks.iter().map(|perk| html! { <li>{ *perk }</li> }) }
                        </ul>
                        <button class="btn-primary" onclick={Callback::from(|e: MouseEvent| effects::ripple(&e))}>
                            {"Get started"}
                        </button>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_state_picks_the_period() {
        assert_eq!(BillingPeriod::from_checked(true), BillingPeriod::Annual);
        assert_eq!(BillingPeriod::from_checked(false), BillingPeriod::Monthly);
    }

    #[test]
    fn annual_price_is_never_above_monthly() {
        for plan in PLANS {
            let monthly: u32 = price_for(plan, BillingPeriod::Monthly)[1..].parse().unwrap();
            let annual: u32 = price_for(plan, BillingPeriod::Annual)[1..].parse().unwrap();
            assert!(annual <= monthly, "{}", plan.name);
        }
    }

    #[test]
    fn toggling_back_mid_fade_settles_on_the_latest_choice() {
        let mut swap = PriceSwap::default();
        assert!(swap.request(BillingPeriod::Annual));
        assert!(!swap.request(BillingPeriod::Monthly));
        assert_eq!(swap.settle(), BillingPeriod::Monthly);
        assert_eq!(swap.shown(), BillingPeriod::Monthly);
    }

    #[test]
    fn a_finished_fade_allows_the_next_one() {
        let mut swap = PriceSwap::default();
        assert!(!swap.request(BillingPeriod::Monthly));
        assert!(swap.request(BillingPeriod::Annual));
        assert!(!swap.request(BillingPeriod::Annual));
        assert_eq!(swap.settle(), BillingPeriod::Annual);
        assert!(swap.request(BillingPeriod::Monthly));
        assert_eq!(swap.settle(), BillingPeriod::Monthly);
    }

    #[test]
    fn period_selects_the_matching_amount() {
        assert_eq!(price_for(&PLANS[1], BillingPeriod::Monthly), "$19");
        assert_eq!(price_for(&PLANS[1], BillingPeriod::Annual), "$15");
    }
}
