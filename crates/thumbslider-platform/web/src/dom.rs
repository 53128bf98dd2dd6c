//! DOM lookups and pointer normalization.

use crate::error::WidgetError;
use js_sys::{Array, Function, Reflect};
use thumbslider_core::TransformMode;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlElement, MouseEvent, TouchEvent, Window};

pub const KNOB_CLASS: &str = "knob";
pub const TRACK_CLASS: &str = "track";

/// The host element of a slider, either directly or by id.
#[derive(Clone, Debug)]
pub enum ContainerRef {
    Element(HtmlElement),
    Id(String),
}

impl From<HtmlElement> for ContainerRef {
    fn from(element: HtmlElement) -> Self {
        ContainerRef::Element(element)
    }
}

impl From<&str> for ContainerRef {
    fn from(id: &str) -> Self {
        ContainerRef::Id(id.to_owned())
    }
}

impl From<String> for ContainerRef {
    fn from(id: String) -> Self {
        ContainerRef::Id(id)
    }
}

impl ContainerRef {
    /// Accepts an element id string or an `HTMLElement`.
    pub fn from_js(value: JsValue) -> Result<Self, WidgetError> {
        if let Some(id) = value.as_string() {
            return Ok(ContainerRef::Id(id));
        }
        value
            .dyn_into::<HtmlElement>()
            .map(ContainerRef::Element)
            .map_err(|_| WidgetError::NotAnElement)
    }

    pub fn resolve(self, document: &Document) -> Result<HtmlElement, WidgetError> {
        match self {
            ContainerRef::Element(element) => Ok(element),
            ContainerRef::Id(id) => document
                .get_element_by_id(&id)
                .ok_or(WidgetError::ContainerNotFound(id))?
                .dyn_into::<HtmlElement>()
                .map_err(|_| WidgetError::NotAnElement),
        }
    }
}

/// Whether a `class` attribute value contains `class_name` as a whole word.
pub fn has_class(class_attr: &str, class_name: &str) -> bool {
    class_attr.split_whitespace().any(|class| class == class_name)
}

/// Descendants of `root` with tag `tag` (`"*"` for any) carrying `class_name`,
/// in document order.
pub fn find_by_class_and_tag(root: &Element, class_name: &str, tag: &str) -> Vec<Element> {
    let elements = root.get_elements_by_tag_name(tag);
    (0..elements.length())
        .filter_map(|index| elements.item(index))
        .filter(|element| has_class(&element.class_name(), class_name))
        .collect()
}

pub fn find_by_class(root: &Element, class_name: &str) -> Vec<Element> {
    find_by_class_and_tag(root, class_name, "*")
}

/// First HTML descendant of `root` carrying `class_name`.
pub fn first_html_by_class(root: &Element, class_name: &'static str) -> Result<HtmlElement, WidgetError> {
    find_by_class(root, class_name)
        .into_iter()
        .find_map(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or(WidgetError::MissingElement { class: class_name })
}

pub(crate) fn create_html_element(
    document: &Document,
    tag: &str,
    class_name: Option<&str>,
) -> Result<HtmlElement, WidgetError> {
    let element = document.create_element(tag)?;
    if let Some(class_name) = class_name {
        element.set_class_name(class_name);
    }
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| WidgetError::NotAnElement)
}

/// Page-absolute x of `element`: the sum of `offsetLeft` along its offset-parent chain.
pub fn page_left(element: &HtmlElement) -> f64 {
    let mut left = 0.0;
    let mut current = Some(element.clone());
    while let Some(node) = current {
        left += f64::from(node.offset_left());
        current = node
            .offset_parent()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
    }
    left
}

/// Page x of a pointer event: the first target touch for touch events,
/// otherwise the mouse position.
pub fn pointer_page_x(event: &Event) -> Option<f64> {
    // Checked by type name: `TouchEvent` is not defined in every desktop browser.
    if event.type_().starts_with("touch") {
        let touch_event = event.unchecked_ref::<TouchEvent>();
        touch_event
            .target_touches()
            .get(0)
            .map(|touch| f64::from(touch.page_x()))
    } else {
        event
            .dyn_ref::<MouseEvent>()
            .map(|mouse| f64::from(mouse.page_x()))
    }
}

/// Detects WebKit 3D transform support once per widget.
pub fn probe_transform_mode(window: &Window) -> TransformMode {
    let supported = supports_webkit_3d_transform(window).unwrap_or_else(|err| {
        log::debug!("3d transform probe failed: {err:?}");
        false
    });
    TransformMode::from_3d_support(supported)
}

fn supports_webkit_3d_transform(window: &Window) -> Result<bool, JsValue> {
    let key = JsValue::from_str("WebKitCSSMatrix");
    if !Reflect::has(window, &key)? {
        return Ok(false);
    }
    let constructor: Function = Reflect::get(window, &key)?.dyn_into()?;
    let matrix = Reflect::construct(&constructor, &Array::new())?;
    Reflect::has(&matrix, &JsValue::from_str("m11"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_matching_is_whole_word() {
        assert!(has_class("knob", "knob"));
        assert!(has_class("slider knob active", "knob"));
        assert!(has_class("  knob\ttrack ", "track"));
        assert!(!has_class("knobby", "knob"));
        assert!(!has_class("big-knob", "knob"));
        assert!(!has_class("", "knob"));
    }

    #[test]
    fn id_strings_become_id_refs() {
        match ContainerRef::from("slider") {
            ContainerRef::Id(id) => assert_eq!(id, "slider"),
            other => panic!("expected id, got {other:?}"),
        }
    }
}
