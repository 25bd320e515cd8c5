use crate::constants::{
    NOTIFICATION_BASE_STYLE, NOTIFICATION_CLASS, NOTIFICATION_FADE_OUT_MS, NOTIFICATION_SLIDE_OUT,
};
use crate::dom::{self, js_error};
use crate::severity::Severity;
use web_sys as web;

/// Drop the toast currently on screen, if any.
pub fn dismiss_current(document: &web::Document) {
    if let Ok(Some(existing)) = document.query_selector(&format!(".{}", NOTIFICATION_CLASS)) {
        existing.remove();
    }
}

/// Show a toast, replacing any visible one. After `duration_ms` it slides out
/// and is removed; a toast replaced in the meantime is already detached, so
/// the pending removal does nothing.
pub fn show(
    document: &web::Document,
    message: &str,
    severity: Severity,
    duration_ms: u32,
) -> anyhow::Result<()> {
    dismiss_current(document);

    let body = document.body().ok_or_else(|| anyhow::anyhow!("missing <body>"))?;
    let toast = document.create_element("div").map_err(js_error)?;
    toast.set_class_name(&severity.class_name());
    toast.set_attribute("style", NOTIFICATION_BASE_STYLE).map_err(js_error)?;
    dom::set_style_property(&toast, "background-color", severity.color());
    toast.set_text_content(Some(message));
    body.append_child(&toast).map_err(js_error)?;

    dom::set_timeout(duration_ms, move || {
        dom::set_style_property(&toast, "animation", NOTIFICATION_SLIDE_OUT);
        if let Err(e) = dom::set_timeout(NOTIFICATION_FADE_OUT_MS, move || toast.remove()) {
            log::warn!("[notify] fade-out timer: {:?}", e);
        }
    })
}
