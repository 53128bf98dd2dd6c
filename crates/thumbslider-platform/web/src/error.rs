use thiserror::Error;
use thumbslider_core::SliderError;
use wasm_bindgen::{JsError, JsValue};

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("no global window exists")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("container with id '{0}' not found")]
    ContainerNotFound(String),
    #[error("container is not an HTML element")]
    NotAnElement,
    #[error("container has no HTML element with class '{class}'")]
    MissingElement { class: &'static str },
    #[error("option '{name}' must be {expected}")]
    InvalidOption {
        name: &'static str,
        expected: &'static str,
    },
    #[error("slider is busy handling another event")]
    Busy,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error(transparent)]
    Config(#[from] SliderError),
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        WidgetError::Dom(format!("{value:?}"))
    }
}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        JsError::new(&err.to_string()).into()
    }
}
