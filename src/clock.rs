use crate::constants::{STORE_LOCALE, STORE_TIME_ZONE};
use crate::hours::{self, Weekday};
use wasm_bindgen::JsValue;

/// Current weekday and `HHMM` time in the store's time zone.
///
/// The browser renders "now" as a locale string in `America/New_York` and the
/// string is parsed back as a local date, which yields the store wall clock
/// whatever the visitor's own zone is.
pub fn store_now() -> anyhow::Result<(Weekday, u16)> {
    let now = js_sys::Date::new_0();
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"timeZone".into(), &STORE_TIME_ZONE.into())
        .map_err(crate::dom::js_error)?;
    let rendered = now.to_locale_string(STORE_LOCALE, &options);
    let zoned = js_sys::Date::new(&JsValue::from(rendered));
    if zoned.get_time().is_nan() {
        anyhow::bail!("could not convert current time to {}", STORE_TIME_ZONE);
    }
    let day = Weekday::from_index(zoned.get_day())
        .ok_or_else(|| anyhow::anyhow!("weekday out of range: {}", zoned.get_day()))?;
    Ok((day, hours::hhmm(zoned.get_hours(), zoned.get_minutes())))
}

pub fn is_store_open() -> bool {
    match store_now() {
        Ok((day, time)) => {
            let open = hours::is_store_open_at(day, time);
            log::debug!("[hours] {} {:04} open={}", day.name(), time, open);
            open
        }
        Err(e) => {
            log::warn!("[hours] {:?}", e);
            false
        }
    }
}
