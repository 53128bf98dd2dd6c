//! Reading slider options from a JavaScript object.
//!
//! Recognized keys: `photos`, `errorMessage`, `value`, `min`, `max`, `change`,
//! `start`, `end`, `preload`. Missing, `undefined` and `null` keys take their
//! defaults; anything else has to have the right type.

use crate::error::WidgetError;
use js_sys::{Array, Function, Reflect};
use thumbslider_core::{Photo, SliderOptions, ValueCallback};
use wasm_bindgen::{JsCast, JsValue};

pub fn options_from_js(options: &JsValue) -> Result<SliderOptions, WidgetError> {
    if options.is_undefined() || options.is_null() {
        return Ok(SliderOptions::default());
    }
    if !options.is_object() {
        return Err(WidgetError::InvalidOption {
            name: "options",
            expected: "an object",
        });
    }

    Ok(SliderOptions {
        photos: field(options, "photos")?.map(photos).transpose()?,
        error_message: field(options, "errorMessage")?
            .map(|value| string(value, "errorMessage"))
            .transpose()?,
        value: field(options, "value")?
            .map(|value| integer(value, "value"))
            .transpose()?,
        min: field(options, "min")?
            .map(|value| integer(value, "min"))
            .transpose()?,
        max: field(options, "max")?
            .map(|value| integer(value, "max"))
            .transpose()?,
        change: field(options, "change")?
            .map(|value| callback(value, "change"))
            .transpose()?,
        start: field(options, "start")?
            .map(|value| callback(value, "start"))
            .transpose()?,
        end: field(options, "end")?
            .map(|value| callback(value, "end"))
            .transpose()?,
        preload_photos: field(options, "preload")?
            .map(|value| value.as_bool().ok_or_else(|| invalid("preload", "a boolean")))
            .transpose()?,
        tooltip_layout: None,
    })
}

fn invalid(name: &'static str, expected: &'static str) -> WidgetError {
    WidgetError::InvalidOption { name, expected }
}

fn field(options: &JsValue, key: &str) -> Result<Option<JsValue>, WidgetError> {
    let value = Reflect::get(options, &JsValue::from_str(key))?;
    Ok((!value.is_undefined() && !value.is_null()).then_some(value))
}

fn string(value: JsValue, name: &'static str) -> Result<String, WidgetError> {
    value.as_string().ok_or_else(|| invalid(name, "a string"))
}

/// Numbers are rounded to the nearest integer.
fn integer(value: JsValue, name: &'static str) -> Result<i64, WidgetError> {
    value
        .as_f64()
        .filter(|number| number.is_finite())
        .map(|number| number.round() as i64)
        .ok_or_else(|| invalid(name, "a finite number"))
}

fn photos(value: JsValue) -> Result<Vec<Photo>, WidgetError> {
    const EXPECTED: &str = "an array of { url } objects or URL strings";
    if !Array::is_array(&value) {
        return Err(invalid("photos", EXPECTED));
    }
    Array::from(&value)
        .iter()
        .map(|entry| {
            if let Some(url) = entry.as_string() {
                return Ok(Photo::new(url));
            }
            if !entry.is_object() {
                return Err(invalid("photos", EXPECTED));
            }
            Reflect::get(&entry, &JsValue::from_str("url"))?
                .as_string()
                .map(Photo::new)
                .ok_or_else(|| invalid("photos", EXPECTED))
        })
        .collect()
}

fn callback(value: JsValue, name: &'static str) -> Result<ValueCallback, WidgetError> {
    let function = value
        .dyn_into::<Function>()
        .map_err(|_| invalid(name, "a function"))?;
    Ok(Box::new(move |slider_value| {
        if let Err(err) = function.call1(&JsValue::UNDEFINED, &JsValue::from_f64(slider_value as f64)) {
            log::error!("{name} callback threw: {err:?}");
        }
    }))
}
