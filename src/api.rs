//! JS-facing namespaces: `OceanMarket`, `Navigation`, `FormUtils`.
//!
//! Page scripts call these as static methods, e.g.
//! `OceanMarket.showNotification("Added to cart", "success")`.

use crate::constants::NOTIFICATION_DEFAULT_DURATION_MS;
use crate::severity::Severity;
use crate::{clock, currency, dom, forms, nav, notify, page, validation};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
pub struct OceanMarket {
    _private: (),
}

#[wasm_bindgen]
impl OceanMarket {
    pub fn init() {
        if let Some(document) = dom::window_document() {
            page::init(&document);
        }
    }

    #[wasm_bindgen(js_name = initSmoothScrolling)]
    pub fn init_smooth_scrolling() {
        if let Some(document) = dom::window_document() {
            if let Err(e) = page::init_smooth_scrolling(&document) {
                log::warn!("[page] smooth scrolling: {:?}", e);
            }
        }
    }

    #[wasm_bindgen(js_name = addScrollAnimations)]
    pub fn add_scroll_animations() {
        if let Some(document) = dom::window_document() {
            if let Err(e) = page::add_scroll_animations(&document) {
                log::warn!("[page] scroll animations: {:?}", e);
            }
        }
    }

    #[wasm_bindgen(js_name = addNotificationStyles)]
    pub fn add_notification_styles() {
        if let Some(document) = dom::window_document() {
            if let Err(e) = page::add_notification_styles(&document) {
                log::warn!("[page] notification styles: {:?}", e);
            }
        }
    }

    /// `type` defaults to `"info"`, `duration` to 3000 ms.
    #[wasm_bindgen(js_name = showNotification)]
    pub fn show_notification(message: &str, kind: Option<String>, duration: Option<u32>) {
        let severity = kind.as_deref().map(Severity::parse).unwrap_or_default();
        let duration = duration.unwrap_or(NOTIFICATION_DEFAULT_DURATION_MS);
        if let Some(document) = dom::window_document() {
            if let Err(e) = notify::show(&document, message, severity, duration) {
                log::warn!("[notify] {:?}", e);
            }
        }
    }

    #[wasm_bindgen(js_name = addLoadingState)]
    pub fn add_loading_state(button: web::HtmlElement, text: Option<String>) -> LoadingState {
        LoadingState {
            inner: page::ButtonLoading::start(button, text.as_deref()),
        }
    }

    #[wasm_bindgen(js_name = formatCurrency)]
    pub fn format_currency(amount: f64) -> String {
        currency::format_currency(amount)
    }

    #[wasm_bindgen(js_name = isValidEmail)]
    pub fn is_valid_email(email: &str) -> bool {
        validation::is_valid_email(email)
    }

    #[wasm_bindgen(js_name = isValidPhone)]
    pub fn is_valid_phone(phone: &str) -> bool {
        validation::is_valid_phone(phone)
    }

    #[wasm_bindgen(js_name = isStoreOpen)]
    pub fn is_store_open() -> bool {
        clock::is_store_open()
    }
}

/// Returned by `OceanMarket.addLoadingState`; call `restore()` when done.
#[wasm_bindgen]
pub struct LoadingState {
    inner: page::ButtonLoading,
}

#[wasm_bindgen]
impl LoadingState {
    pub fn restore(&self) {
        self.inner.restore();
    }
}

#[wasm_bindgen]
pub struct Navigation {
    _private: (),
}

#[wasm_bindgen]
impl Navigation {
    pub fn init() {
        if let Some(document) = dom::window_document() {
            nav::init(&document);
        }
    }

    #[wasm_bindgen(js_name = setActivePage)]
    pub fn set_active_page() {
        if let Some(document) = dom::window_document() {
            nav::set_active_page(&document);
        }
    }

    #[wasm_bindgen(js_name = addMobileMenu)]
    pub fn add_mobile_menu() {
        if let Some(document) = dom::window_document() {
            if let Err(e) = nav::add_mobile_menu(&document) {
                log::warn!("[nav] mobile menu: {:?}", e);
            }
        }
    }
}

#[wasm_bindgen]
pub struct FormUtils {
    _private: (),
}

#[wasm_bindgen]
impl FormUtils {
    #[wasm_bindgen(js_name = addRealTimeValidation)]
    pub fn add_real_time_validation(form: &web::Element) {
        if let Some(document) = dom::window_document() {
            if let Err(e) = forms::add_real_time_validation(&document, form) {
                log::warn!("[forms] live validation: {:?}", e);
            }
        }
    }

    #[wasm_bindgen(js_name = validateField)]
    pub fn validate_field(field: &web::Element) -> bool {
        match dom::window_document() {
            Some(document) => forms::validate_field(&document, field),
            None => false,
        }
    }

    #[wasm_bindgen(js_name = showFieldError)]
    pub fn show_field_error(field: &web::Element, message: &str) {
        if let Some(document) = dom::window_document() {
            if let Err(e) = forms::show_field_error(&document, field, message) {
                log::warn!("[forms] {:?}", e);
            }
        }
    }

    #[wasm_bindgen(js_name = clearFieldError)]
    pub fn clear_field_error(field: &web::Element) {
        forms::clear_field_error(field);
    }
}
