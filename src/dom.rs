use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_error(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Attach a listener that lives for the rest of the page.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

/// One-shot `setTimeout`; there is no cancellation.
pub fn set_timeout(delay_ms: u32, callback: impl FnOnce() + 'static) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let callback = Closure::once_into_js(callback);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            i32::try_from(delay_ms).unwrap_or(i32::MAX),
        )
        .map_err(js_error)?;
    Ok(())
}

pub fn elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

/// Set one inline style property on an element that is an `HtmlElement`.
pub fn set_style_property(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

/// Append a `<style>` to `<head>`. With an `id`, a second call is a no-op.
pub fn inject_style(document: &web::Document, id: Option<&str>, css: &str) -> anyhow::Result<()> {
    if let Some(id) = id {
        if document.get_element_by_id(id).is_some() {
            return Ok(());
        }
    }
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("missing <head>"))?;
    let style = document.create_element("style").map_err(js_error)?;
    if let Some(id) = id {
        style.set_id(id);
    }
    style.set_text_content(Some(css));
    head.append_child(&style).map_err(js_error)?;
    Ok(())
}
