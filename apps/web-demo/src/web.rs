use crate::gallery;
use std::cell::RefCell;
use thumbslider_platform_web::WebThumbnailSlider;
use wasm_bindgen::prelude::*;

thread_local! {
    static SLIDER: RefCell<Option<WebThumbnailSlider>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    let window = web_sys::window().ok_or("no global window exists")?;
    let document = window.document().ok_or("should have a document on window")?;
    let status = document
        .get_element_by_id("status")
        .ok_or("status element not found")?;

    let config = gallery::demo_config()
        .on_change({
            let status = status.clone();
            move |value| status.set_text_content(Some(&format!("photo {value}")))
        })
        .on_start(|value| log::info!("drag started at {value}"))
        .on_end(move |value| {
            log::info!("drag ended at {value}");
            status.set_text_content(Some(&format!("photo {value} selected")));
        });

    let slider = WebThumbnailSlider::create("slider", config)?;
    log::info!("preloaded {} photos", slider.preloaded_photos());
    SLIDER.with(|cell| cell.replace(Some(slider)));
    Ok(())
}
