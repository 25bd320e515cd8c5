//! Page-wide enhancements run on every storefront page.

use crate::constants::{
    ANIMATE_IN_CLASS, ANIMATE_ON_SCROLL_CLASS, DEFAULT_LOADING_TEXT, NOTIFICATION_CSS,
    NOTIFICATION_STYLES_ID, REVEAL_HIDDEN_OPACITY, REVEAL_HIDDEN_TRANSFORM, REVEAL_ROOT_MARGIN,
    REVEAL_THRESHOLD, REVEAL_TRANSITION, SAME_PAGE_ANCHOR_SELECTOR,
};
use crate::dom::{self, js_error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Smooth-scroll the element an anchor's `#fragment` selects. Fragments that
/// match nothing, or are not valid selectors, scroll nowhere.
pub fn scroll_to_fragment(document: &web::Document, fragment: &str) -> bool {
    let Ok(Some(target)) = document.query_selector(fragment) else {
        return false;
    };
    let options = web::ScrollIntoViewOptions::new();
    options.set_behavior(web::ScrollBehavior::Smooth);
    options.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

pub fn init_smooth_scrolling(document: &web::Document) -> anyhow::Result<()> {
    let anchors = dom::query_all(document, SAME_PAGE_ANCHOR_SELECTOR);
    for anchor in &anchors {
        let doc = document.clone();
        let href_source = anchor.clone();
        dom::add_listener(anchor, "click", move |ev: web::Event| {
            ev.prevent_default();
            if let Some(href) = href_source.get_attribute("href") {
                scroll_to_fragment(&doc, &href);
            }
        })?;
    }
    log::debug!("[page] smooth scrolling on {} anchors", anchors.len());
    Ok(())
}

fn reveal_entries(entries: js_sys::Array, observer: web::IntersectionObserver) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
            continue;
        };
        if entry.is_intersecting() {
            let target = entry.target();
            _ = target.class_list().add_1(ANIMATE_IN_CLASS);
            observer.unobserve(&target);
        }
    }
}

pub fn add_scroll_animations(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, &format!(".{}", ANIMATE_ON_SCROLL_CLASS));
    if targets.is_empty() {
        return Ok(());
    }

    let callback = Closure::wrap(
        Box::new(reveal_entries) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
    );
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_error)?;
    callback.forget();

    for el in &targets {
        dom::set_style_property(el, "opacity", REVEAL_HIDDEN_OPACITY);
        dom::set_style_property(el, "transform", REVEAL_HIDDEN_TRANSFORM);
        dom::set_style_property(el, "transition", REVEAL_TRANSITION);
        observer.observe(el);
    }
    log::debug!("[page] observing {} reveal targets", targets.len());
    Ok(())
}

#[inline]
pub fn add_notification_styles(document: &web::Document) -> anyhow::Result<()> {
    dom::inject_style(document, Some(NOTIFICATION_STYLES_ID), NOTIFICATION_CSS)
}

/// A button showing substitute text while work is in flight.
pub struct ButtonLoading {
    button: web::HtmlElement,
    original_text: Option<String>,
}

impl ButtonLoading {
    pub fn start(button: web::HtmlElement, text: Option<&str>) -> Self {
        let original_text = button.text_content();
        button.set_text_content(Some(text.unwrap_or(DEFAULT_LOADING_TEXT)));
        set_disabled(&button, true);
        Self {
            button,
            original_text,
        }
    }

    pub fn restore(&self) {
        self.button.set_text_content(self.original_text.as_deref());
        set_disabled(&self.button, false);
    }
}

fn set_disabled(button: &web::HtmlElement, disabled: bool) {
    if let Some(btn) = button.dyn_ref::<web::HtmlButtonElement>() {
        btn.set_disabled(disabled);
    } else if let Some(input) = button.dyn_ref::<web::HtmlInputElement>() {
        input.set_disabled(disabled);
    } else if disabled {
        _ = button.set_attribute("disabled", "");
    } else {
        _ = button.remove_attribute("disabled");
    }
}

pub fn init(document: &web::Document) {
    if let Err(e) = init_smooth_scrolling(document) {
        log::warn!("[page] smooth scrolling: {:?}", e);
    }
    if let Err(e) = add_scroll_animations(document) {
        log::warn!("[page] scroll animations: {:?}", e);
    }
    if let Err(e) = add_notification_styles(document) {
        log::warn!("[page] notification styles: {:?}", e);
    }
}
