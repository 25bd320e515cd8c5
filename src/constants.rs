/// Page helper constants.
///
/// Selectors, class names, palette and timing values shared by the page,
/// navigation and form helpers. Keeping them here keeps the DOM glue free of
/// magic strings.
// Store locale and time zone
pub const STORE_TIME_ZONE: &str = "America/New_York";
pub const STORE_LOCALE: &str = "en-US";
pub const STORE_CURRENCY: &str = "USD";

// Console logger verbosity
pub const LOG_LEVEL: log::Level = log::Level::Info;

// Notifications
pub const NOTIFICATION_CLASS: &str = "notification";
pub const NOTIFICATION_DEFAULT_DURATION_MS: u32 = 3000;
pub const NOTIFICATION_FADE_OUT_MS: u32 = 300; // matches the slideOut animation length
pub const NOTIFICATION_STYLES_ID: &str = "notification-styles";
pub const NOTIFICATION_BASE_STYLE: &str = "position: fixed; top: 20px; right: 20px; \
    padding: 1rem 1.5rem; border-radius: 5px; color: white; font-weight: bold; \
    z-index: 1000; animation: slideIn 0.3s ease;";
pub const NOTIFICATION_SLIDE_OUT: &str = "slideOut 0.3s ease";

pub const NOTIFICATION_CSS: &str = r#"
@keyframes slideIn {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
.animate-in {
    opacity: 1 !important;
    transform: translateY(0) !important;
}
"#;

// Scroll reveal
pub const ANIMATE_ON_SCROLL_CLASS: &str = "animate-on-scroll";
pub const ANIMATE_IN_CLASS: &str = "animate-in";
pub const REVEAL_THRESHOLD: f64 = 0.1; // fraction of the element that must be visible
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_HIDDEN_OPACITY: &str = "0";
pub const REVEAL_HIDDEN_TRANSFORM: &str = "translateY(20px)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// Smooth scrolling
pub const SAME_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Navigation
pub const NAV_SELECTOR: &str = "nav";
pub const NAV_LINK_SELECTOR: &str = "nav a";
pub const ACTIVE_CLASS: &str = "active";
pub const MOBILE_MENU_BTN_CLASS: &str = "mobile-menu-btn";
pub const MOBILE_MENU_GLYPH: &str = "\u{2630}";
pub const MOBILE_MENU_LABEL: &str = "Toggle navigation";
pub const MOBILE_MENU_SHOW_CLASS: &str = "show";
pub const MOBILE_BREAKPOINT_PX: u32 = 768;
pub const MOBILE_MENU_BTN_STYLE: &str = "display: none; background: none; border: none; \
    font-size: 1.5rem; color: white; cursor: pointer; padding: 0.5rem;";

pub const MOBILE_NAV_CSS: &str = r#"
@media (max-width: 768px) {
    .mobile-menu-btn {
        display: block !important;
    }
    nav ul {
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        background-color: #FFA07A;
        display: none;
        box-shadow: 0 2px 5px rgba(0,0,0,0.2);
    }
    nav ul.show {
        display: flex !important;
    }
    nav ul li {
        width: 100%;
        text-align: center;
    }
}
"#;

// Forms
pub const FORM_FIELD_SELECTOR: &str = "input, select, textarea";
pub const FIELD_ERROR_CLASS: &str = "field-error";
pub const FIELD_ERROR_COLOR: &str = "#dc3545";
pub const FIELD_ERROR_STYLE: &str = "color: #dc3545; font-size: 0.875rem; margin-top: 0.25rem;";

// Buttons
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";
