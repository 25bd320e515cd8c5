// Browser tests for the DOM helpers; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use oceans_market_web::severity::Severity;
use oceans_market_web::{clock, currency, dom, forms, nav, notify, page};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web::Document {
    dom::window_document().expect("document")
}

/// Replace the body with `html` and return the document.
fn fixture(html: &str) -> web::Document {
    let doc = document();
    doc.body().expect("body").set_inner_html(html);
    doc
}

fn query(doc: &web::Document, selector: &str) -> web::Element {
    doc.query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("{selector} exists"))
}

fn count(doc: &web::Document, selector: &str) -> u32 {
    doc.query_selector_all(selector).expect("query").length()
}

fn border_color(field: &web::HtmlInputElement) -> String {
    field
        .style()
        .get_property_value("border-color")
        .expect("border-color")
}

fn input(doc: &web::Document, selector: &str) -> web::HtmlInputElement {
    doc.query_selector(selector)
        .expect("query")
        .expect("input exists")
        .dyn_into::<web::HtmlInputElement>()
        .expect("is input")
}

#[wasm_bindgen_test]
fn second_notification_replaces_first() {
    let doc = fixture("");
    notify::show(&doc, "first", Severity::Info, 3000).expect("show first");
    notify::show(&doc, "second", Severity::Success, 3000).expect("show second");

    let toasts = doc.query_selector_all(".notification").expect("query");
    assert_eq!(toasts.length(), 1);
    let toast = dom::elements(&toasts).remove(0);
    assert_eq!(toast.text_content().as_deref(), Some("second"));
    assert!(toast.class_list().contains("notification-success"));
}

#[wasm_bindgen_test]
fn empty_name_shows_error_then_valid_input_clears_it() {
    let doc = fixture(r#"<form><div><input name="name" value="  "></div></form>"#);
    let field = input(&doc, "input[name=name]");

    assert!(!forms::validate_field(&doc, &field));
    let error = field.next_element_sibling().expect("error after field");
    assert!(error.class_list().contains("field-error"));
    assert_eq!(error.text_content().as_deref(), Some("Please enter your name"));
    assert!(!border_color(&field).is_empty());

    field.set_value("Marina");
    assert!(forms::validate_field(&doc, &field));
    assert_eq!(count(&doc, ".field-error"), 0);
    assert!(border_color(&field).is_empty());
}

#[wasm_bindgen_test]
fn blur_validates_and_typing_clears() {
    let doc = fixture(
        r#"<form id="contact">
            <input name="name" value="">
            <input name="email" value="a@b.co">
        </form>"#,
    );
    forms::add_real_time_validation(&doc, &query(&doc, "#contact")).expect("wire form");
    let name = input(&doc, "input[name=name]");
    let email = input(&doc, "input[name=email]");

    let blur = web::Event::new("blur").expect("blur event");
    name.dispatch_event(&blur).expect("dispatch blur");
    let error = name.next_element_sibling().expect("error after name");
    assert!(error.class_list().contains("field-error"));
    assert_eq!(error.text_content().as_deref(), Some("Please enter your name"));
    assert!(!border_color(&name).is_empty());

    let blur = web::Event::new("blur").expect("blur event");
    email.dispatch_event(&blur).expect("dispatch blur");
    assert_eq!(count(&doc, ".field-error"), 1);

    // typing into another field leaves the name error alone
    let typing = web::Event::new("input").expect("input event");
    email.dispatch_event(&typing).expect("dispatch input");
    assert_eq!(count(&doc, ".field-error"), 1);

    let typing = web::Event::new("input").expect("input event");
    name.dispatch_event(&typing).expect("dispatch input");
    assert_eq!(count(&doc, ".field-error"), 0);
    assert!(border_color(&name).is_empty());
}

#[wasm_bindgen_test]
fn repeated_failures_keep_a_single_error() {
    let doc = fixture(r#"<input name="email" value="not-an-email">"#);
    let field = input(&doc, "input[name=email]");

    assert!(!forms::validate_field(&doc, &field));
    assert!(!forms::validate_field(&doc, &field));
    assert_eq!(count(&doc, ".field-error"), 1);
}

#[wasm_bindgen_test]
fn errors_belong_to_their_own_field() {
    let doc = fixture(r#"<p><input name="name" value=""><input name="email" value=""></p>"#);
    let name = input(&doc, "input[name=name]");
    let email = input(&doc, "input[name=email]");

    assert!(!forms::validate_field(&doc, &name));
    assert!(!forms::validate_field(&doc, &email));
    forms::clear_field_error(&email);

    let errors = dom::elements(&doc.query_selector_all(".field-error").expect("query"));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].text_content().as_deref(), Some("Please enter your name"));
}

#[wasm_bindgen_test]
fn only_matching_nav_link_is_marked_active() {
    let doc = fixture(
        r#"<nav><ul>
            <li><a href="about.html">About</a></li>
            <li><a href="contact.html">Contact</a></li>
        </ul></nav>"#,
    );
    assert_eq!(nav::mark_active_links(&doc, "about.html"), 1);

    let about = query(&doc, "a[href='about.html']");
    let contact = query(&doc, "a[href='contact.html']");
    assert!(about.class_list().contains("active"));
    assert!(!contact.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn mobile_menu_is_injected_once_and_toggles() {
    let doc = fixture(r#"<nav><ul><li><a href="/">Home</a></li></ul></nav>"#);
    nav::add_mobile_menu(&doc).expect("first");
    nav::add_mobile_menu(&doc).expect("second");
    assert_eq!(count(&doc, ".mobile-menu-btn"), 1);

    let first = query(&doc, "nav").first_element_child().expect("first child");
    assert!(first.class_list().contains("mobile-menu-btn"));

    let ul = query(&doc, "nav ul");
    first.dyn_ref::<web::HtmlElement>().expect("html").click();
    assert!(ul.class_list().contains("show"));
    first.dyn_ref::<web::HtmlElement>().expect("html").click();
    assert!(!ul.class_list().contains("show"));
}

#[wasm_bindgen_test]
fn mobile_menu_without_nav_is_skipped() {
    let doc = fixture("<main></main>");
    nav::add_mobile_menu(&doc).expect("no-op");
    assert_eq!(count(&doc, ".mobile-menu-btn"), 0);
}

#[wasm_bindgen_test]
fn unknown_fragment_scrolls_nowhere() {
    let doc = fixture(r#"<section id="hours"></section>"#);
    assert!(page::scroll_to_fragment(&doc, "#hours"));
    assert!(!page::scroll_to_fragment(&doc, "#missing"));
    assert!(!page::scroll_to_fragment(&doc, "#"));
}

#[wasm_bindgen_test]
fn notification_styles_are_injected_once() {
    let doc = fixture("");
    page::add_notification_styles(&doc).expect("first");
    page::add_notification_styles(&doc).expect("second");
    assert_eq!(count(&doc, "#notification-styles"), 1);
}

#[wasm_bindgen_test]
fn scroll_targets_start_hidden() {
    let doc = fixture(r#"<div class="animate-on-scroll">promo</div>"#);
    page::add_scroll_animations(&doc).expect("observe");
    let el = query(&doc, ".animate-on-scroll")
        .dyn_into::<web::HtmlElement>()
        .expect("html");
    let opacity = el.style().get_property_value("opacity").expect("opacity");
    assert_eq!(opacity, "0");
}

#[wasm_bindgen_test]
fn loading_state_restores_button() {
    let doc = fixture(r#"<button id="order">Place order</button>"#);
    let button = doc
        .get_element_by_id("order")
        .expect("button")
        .dyn_into::<web::HtmlElement>()
        .expect("html");

    let loading = page::ButtonLoading::start(button.clone(), None);
    assert_eq!(button.text_content().as_deref(), Some("Loading..."));
    assert!(button.dyn_ref::<web::HtmlButtonElement>().expect("button").disabled());

    loading.restore();
    assert_eq!(button.text_content().as_deref(), Some("Place order"));
    assert!(!button.dyn_ref::<web::HtmlButtonElement>().expect("button").disabled());
}

#[wasm_bindgen_test]
fn currency_uses_us_dollars() {
    assert_eq!(currency::format_currency(1234.5), "$1,234.50");
    assert_eq!(currency::format_currency(0.0), "$0.00");
}

#[wasm_bindgen_test]
fn store_clock_reads_a_wall_clock_time() {
    let (_day, time) = clock::store_now().expect("store time");
    assert!(time < 2400);
    assert!(time % 100 < 60);
}
