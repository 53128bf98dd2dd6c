//! JavaScript API.
//!
//! ```js
//! const slider = new ThumbnailSlider("slider", {
//!   photos: [{ url: "0.jpg" }, { url: "1.jpg" }],
//!   max: 1,
//!   change: (value) => console.log(value),
//!   end: () => console.log(slider.value),
//! });
//! slider.setValue(1);
//! ```
//!
//! Callbacks run after the slider has finished updating, so they may read
//! `value` or call `setValue`.

use crate::dom::ContainerRef;
use crate::error::WidgetError;
use crate::options::options_from_js;
use crate::widget::WebThumbnailSlider;
use thumbslider_core::SliderConfig;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = ThumbnailSlider)]
pub struct JsThumbnailSlider {
    widget: WebThumbnailSlider,
}

#[wasm_bindgen(js_class = ThumbnailSlider)]
impl JsThumbnailSlider {
    /// `container` is an element or an element id; `options` may be omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(container: JsValue, options: JsValue) -> Result<JsThumbnailSlider, JsValue> {
        let container = ContainerRef::from_js(container)?;
        let config = SliderConfig::from_options(options_from_js(&options)?).map_err(WidgetError::from)?;
        let widget = WebThumbnailSlider::create(container, config)?;
        Ok(Self { widget })
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> Result<f64, JsValue> {
        Ok(self.widget.value()? as f64)
    }

    /// Sets the value, rounded and clamped; `undefined` selects `min`.
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&self, value: Option<f64>) -> Result<(), JsValue> {
        let value = value.filter(|number| number.is_finite()).map(|number| number.round() as i64);
        self.widget.set_value(value)?;
        Ok(())
    }

    pub fn update(&self) -> Result<(), JsValue> {
        self.widget.update()?;
        Ok(())
    }

    #[wasm_bindgen(js_name = isDragging)]
    pub fn is_dragging(&self) -> Result<bool, JsValue> {
        Ok(self.widget.is_dragging()?)
    }
}

impl JsThumbnailSlider {
    pub fn widget(&self) -> &WebThumbnailSlider {
        &self.widget
    }
}
