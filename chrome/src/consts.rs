//! Shared constants for the chrome crate.

// ── Anchors ─────────────────────────────────────────────────────

pub const STICKY_HEADER_ID: &str = "sticky-header";
pub const MAIN_HEADER_SELECTOR: &str = ".main-header";
pub const BACKGROUND_ID: &str = "animated-background";
pub const FLOATING_SHAPE_SELECTOR: &str = ".floating-shape";
pub const LOGO_LINK_SELECTOR: &str = ".logo-link";
pub const LOGO_SELECTOR: &str = ".main-header .logo";
pub const HEADING_SELECTOR: &str = ".manual-content h1, .manual-content h2, .manual-content h3";
pub const TABLE_ROW_SELECTOR: &str = ".manual-content table tr";
pub const WEBRING_BUTTON_SELECTOR: &str = ".webring-button";
pub const SPARKLE_SELECTOR: &str = ".sparkle";
pub const REVEAL_SELECTOR: &str = ".manual-content h2, .manual-content h3, .manual-content table";
pub const YEAR_ID: &str = "current-year";

/// Attribute on `<body>` holding JSON configuration.
pub const CONFIG_ATTRIBUTE: &str = "data-chrome";

/// Class toggled on the sticky header while it is shown.
pub const VISIBLE_CLASS: &str = "visible";

// ── Background ──────────────────────────────────────────────────

pub const SHAPE_COUNT: usize = 15;
pub const PULSE_COUNT: usize = 5;

pub const SHAPE_SIZE_PX: (f64, f64) = (8.0, 25.0);
pub const PULSE_SIZE_PX: (f64, f64) = (50.0, 150.0);
pub const SHAPE_DURATION_S: (f64, f64) = (10.0, 20.0);
pub const SHAPE_DELAY_S: (f64, f64) = (0.0, 5.0);
pub const PULSE_DELAY_S: (f64, f64) = (0.0, 8.0);
pub const POSITION_PCT: (f64, f64) = (0.0, 100.0);

/// Every Nth floating shape follows the pointer when parallax is on.
pub const PARALLAX_STRIDE: usize = 3;

/// Maximum parallax travel in pixels, edge to edge.
pub const PARALLAX_RANGE_PX: f64 = 20.0;

// ── Timing ──────────────────────────────────────────────────────

/// Length of the logo glitch animation; the inline animation is cleared after it.
pub const GLITCH_MS: u32 = 300;

/// Trailing-edge delay before a scroll is considered settled (~one frame at 60fps).
pub const SCROLL_SETTLE_MS: u32 = 16;

// ── Reveal ──────────────────────────────────────────────────────

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
