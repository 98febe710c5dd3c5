use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// localStorage key holding the JSON-encoded dark mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

// Loading screen
pub const LOADER_TICK_MS: u32 = 50;
pub const LOADER_STEP: u8 = 2;
pub const LOADER_SETTLE_MS: u32 = 500;

// Testimonials carousel
pub const CAROUSEL_INTERVAL_MS: u32 = 5000;

// Contact form confirmation panel
pub const CONTACT_RESET_MS: u32 = 3000;

// Hero background
pub const PARTICLE_COUNT: usize = 50;
pub const PARTICLE_MAX_SPEED: f64 = 0.25;
pub const PARTICLE_RADIUS: (f64, f64) = (1.0, 3.0);
pub const PARTICLE_OPACITY: (f64, f64) = (0.2, 0.7);

pub const RIPPLE_MS: u32 = 600;
pub const CURSOR_GLOW_SIZE: f64 = 200.0;

// Scroll thresholds in px
pub const NAV_SCROLLED_AT: f64 = 50.0;
pub const SCROLL_TOP_VISIBLE_AT: f64 = 400.0;
