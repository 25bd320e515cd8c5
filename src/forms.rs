//! Inline validation for contact and order forms.
//!
//! Each field owns at most one `.field-error` element, placed directly after
//! it. Rules come from [`crate::validation`] keyed by the field's `name`.

use crate::constants::{
    FIELD_ERROR_CLASS, FIELD_ERROR_COLOR, FIELD_ERROR_STYLE, FORM_FIELD_SELECTOR,
};
use crate::dom::{self, js_error};
use crate::validation;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `name` attribute and current value of an input, select or textarea.
fn field_name_and_value(field: &web::Element) -> (String, String) {
    let value = if let Some(input) = field.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(select) = field.dyn_ref::<web::HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = field.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    };
    (field.get_attribute("name").unwrap_or_default(), value)
}

fn error_after(field: &web::Element) -> Option<web::Element> {
    field
        .next_element_sibling()
        .filter(|el| el.class_list().contains(FIELD_ERROR_CLASS))
}

pub fn clear_field_error(field: &web::Element) {
    if let Some(existing) = error_after(field) {
        existing.remove();
    }
    dom::set_style_property(field, "border-color", "");
}

pub fn show_field_error(
    document: &web::Document,
    field: &web::Element,
    message: &str,
) -> anyhow::Result<()> {
    clear_field_error(field);

    let error = document.create_element("div").map_err(js_error)?;
    error.set_class_name(FIELD_ERROR_CLASS);
    error.set_text_content(Some(message));
    error.set_attribute("style", FIELD_ERROR_STYLE).map_err(js_error)?;
    field.after_with_node_1(&error).map_err(js_error)?;

    dom::set_style_property(field, "border-color", FIELD_ERROR_COLOR);
    Ok(())
}

pub fn validate_field(document: &web::Document, field: &web::Element) -> bool {
    let (name, value) = field_name_and_value(field);
    match validation::validate_value(&name, &value) {
        Ok(()) => {
            clear_field_error(field);
            true
        }
        Err(err) => {
            if let Err(e) = show_field_error(document, field, &err.to_string()) {
                log::warn!("[forms] could not render error for {:?}: {:?}", name, e);
            }
            false
        }
    }
}

/// Validate on blur and clear the error while the visitor types.
pub fn add_real_time_validation(
    document: &web::Document,
    form: &web::Element,
) -> anyhow::Result<()> {
    let fields = form
        .query_selector_all(FORM_FIELD_SELECTOR)
        .map(|list| dom::elements(&list))
        .map_err(js_error)?;

    for field in &fields {
        let doc = document.clone();
        let on_blur = field.clone();
        dom::add_listener(field, "blur", move |_ev: web::Event| {
            validate_field(&doc, &on_blur);
        })?;

        let on_input = field.clone();
        dom::add_listener(field, "input", move |_ev: web::Event| {
            clear_field_error(&on_input);
        })?;
    }
    log::debug!("[forms] live validation on {} fields", fields.len());
    Ok(())
}
