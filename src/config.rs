use log::Level;

pub const CAROUSEL_INTERVAL_MS: u32 = 6_000;
pub const RESULTS_DELAY_MS: u32 = 3_000;
pub const LOADING_SCREEN_MS: u32 = 2_200;
pub const STAT_COUNT_MS: f64 = 3_000.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose transitions while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT
}
