//! Shared constants for the portfolio pages.

// ── Layout ──────────────────────────────────────────────────────

/// Viewport width in CSS pixels below which navigation collapses into a menu.
pub const MOBILE_BREAKPOINT_PX: f64 = 680.0;

/// Inline `display` value that shows an expanded mobile menu.
pub const NAV_OPEN_DISPLAY: &str = "flex";

// ── Timing ──────────────────────────────────────────────────────

/// Artificial latency of the demo contact form, in milliseconds.
pub const FORM_DELAY_MS: u32 = 900;

/// Animation-delay step between consecutive fade-up elements, in milliseconds.
pub const FADE_STAGGER_MS: u32 = 80;

// ── Storage ─────────────────────────────────────────────────────

/// Local storage key for the theme preference.
pub const THEME_STORAGE_KEY: &str = "portfolio_theme";

// ── Markup ──────────────────────────────────────────────────────

pub const NAV_TOGGLE_PREFIX: &str = "navToggle";
pub const THEME_TOGGLE_PREFIX: &str = "themeToggle";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FORM_STATUS_ID: &str = "formStatus";
pub const CONFIG_SCRIPT_ID: &str = "siteConfig";

pub const SITE_WRAPPER_SELECTOR: &str = ".site";
pub const LIGHT_CLASS: &str = "light";
pub const OPEN_CLASS: &str = "open";
pub const THEME_TOGGLE_CLASS: &str = "theme-toggle";
pub const NAV_LINKS_CLASS: &str = "nav-links";
pub const NAV_LINK_CLASS: &str = "nav-link";
pub const FADE_UP_CLASS: &str = "fade-up";

// ── Copy ────────────────────────────────────────────────────────

pub const SUN_ICON: &str = "☀️";
pub const MOON_ICON: &str = "🌙";
pub const FORM_SENDING_TEXT: &str = "Sending...";
pub const FORM_SENT_TEXT: &str = "Thanks! Your message has been sent (demo). I will reply soon.";
