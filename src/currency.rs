use crate::constants::{STORE_CURRENCY, STORE_LOCALE};
use crate::dom::js_error;
use wasm_bindgen::JsValue;

fn intl_format(amount: f64) -> anyhow::Result<String> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"style".into(), &"currency".into()).map_err(js_error)?;
    js_sys::Reflect::set(&options, &"currency".into(), &STORE_CURRENCY.into()).map_err(js_error)?;
    let locales = js_sys::Array::of1(&STORE_LOCALE.into());
    let formatter = js_sys::Intl::NumberFormat::new(&locales, &options);
    formatter
        .format()
        .call1(&JsValue::NULL, &JsValue::from_f64(amount))
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("NumberFormat returned a non-string"))
}

/// Format `amount` as US dollars, e.g. `1234.5` -> `"$1,234.50"`.
pub fn format_currency(amount: f64) -> String {
    intl_format(amount).unwrap_or_else(|e| {
        log::warn!("[currency] {:?}", e);
        format!("${:.2}", amount)
    })
}
