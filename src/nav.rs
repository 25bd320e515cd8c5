use crate::constants::{
    ACTIVE_CLASS, MOBILE_MENU_BTN_CLASS, MOBILE_MENU_BTN_STYLE, MOBILE_MENU_GLYPH,
    MOBILE_MENU_LABEL, MOBILE_MENU_SHOW_CLASS, MOBILE_NAV_CSS, NAV_LINK_SELECTOR, NAV_SELECTOR,
};
use crate::dom::{self, js_error};
use crate::routes;
use web_sys as web;

/// Mark every nav link matching `page`; returns how many were marked.
pub fn mark_active_links(document: &web::Document, page: &str) -> usize {
    let mut marked = 0;
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if routes::link_is_active(&href, page) && link.class_list().add_1(ACTIVE_CLASS).is_ok() {
            marked += 1;
        }
    }
    marked
}

pub fn set_active_page(document: &web::Document) {
    let Some(pathname) = web::window().and_then(|w| w.location().pathname().ok()) else {
        return;
    };
    let page = routes::current_page(&pathname);
    let marked = mark_active_links(document, page);
    log::debug!("[nav] page={:?} active_links={}", page, marked);
}

/// Toggle the `show` class on the nav's list, if it has one.
pub fn toggle_menu(nav: &web::Element) {
    if let Ok(Some(list)) = nav.query_selector("ul") {
        _ = list.class_list().toggle(MOBILE_MENU_SHOW_CLASS);
    }
}

/// Inject the hamburger button and responsive styles, once per page.
pub fn add_mobile_menu(document: &web::Document) -> anyhow::Result<()> {
    let Ok(Some(nav)) = document.query_selector(NAV_SELECTOR) else {
        return Ok(());
    };
    if let Ok(Some(_)) = document.query_selector(&format!(".{}", MOBILE_MENU_BTN_CLASS)) {
        return Ok(());
    }

    let button = document.create_element("button").map_err(js_error)?;
    button.set_class_name(MOBILE_MENU_BTN_CLASS);
    button.set_text_content(Some(MOBILE_MENU_GLYPH));
    button.set_attribute("type", "button").map_err(js_error)?;
    button.set_attribute("aria-label", MOBILE_MENU_LABEL).map_err(js_error)?;
    button.set_attribute("style", MOBILE_MENU_BTN_STYLE).map_err(js_error)?;

    dom::inject_style(document, None, MOBILE_NAV_CSS)?;
    nav.prepend_with_node_1(&button).map_err(js_error)?;

    let nav_for_click = nav.clone();
    dom::add_listener(&button, "click", move |_ev: web::Event| {
        toggle_menu(&nav_for_click);
    })
}

pub fn init(document: &web::Document) {
    set_active_page(document);
    if let Err(e) = add_mobile_menu(document) {
        log::warn!("[nav] mobile menu: {:?}", e);
    }
}
