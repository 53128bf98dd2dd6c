use crate::dom::{create_html_element, page_left};
use crate::error::WidgetError;
use crate::tooltip::TooltipElements;
use thumbslider_core::{SliderSurface, TooltipContent, TransformMode};
use web_sys::{Document, HtmlElement};

/// [`SliderSurface`] backed by real DOM elements.
///
/// Write failures are logged and dropped; the slider keeps its logical state.
#[derive(Debug)]
pub struct DomSurface {
    document: Document,
    container: HtmlElement,
    knob: HtmlElement,
    track: HtmlElement,
    tooltip: TooltipElements,
    transform: TransformMode,
}

impl DomSurface {
    pub fn new(
        document: Document,
        container: HtmlElement,
        knob: HtmlElement,
        track: HtmlElement,
        tooltip: TooltipElements,
        transform: TransformMode,
    ) -> Self {
        Self {
            document,
            container,
            knob,
            track,
            tooltip,
            transform,
        }
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub fn knob(&self) -> &HtmlElement {
        &self.knob
    }

    pub fn tooltip(&self) -> &TooltipElements {
        &self.tooltip
    }

    pub fn transform_mode(&self) -> TransformMode {
        self.transform
    }

    fn write_label(&self, text: &str) -> Result<(), WidgetError> {
        let label = create_html_element(&self.document, "center", None)?;
        label.set_text_content(Some(text));
        self.knob.set_text_content(None);
        self.knob.append_child(&label)?;
        Ok(())
    }
}

fn log_failure(action: &str, result: Result<(), WidgetError>) {
    if let Err(err) = result {
        log::warn!("failed to {action}: {err}");
    }
}

impl SliderSurface for DomSurface {
    fn knob_width(&self) -> f64 {
        f64::from(self.knob.offset_width())
    }

    fn track_width(&self) -> f64 {
        f64::from(self.track.offset_width())
    }

    fn container_page_left(&self) -> f64 {
        page_left(&self.container)
    }

    fn set_knob_pixel_offset(&mut self, offset: f64) {
        let style = self.knob.style();
        let value = self.transform.css_value(offset);
        for property in self.transform.properties() {
            if let Err(err) = style.set_property(property, &value) {
                log::warn!("failed to set knob {property}: {err:?}");
            }
        }
    }

    fn set_label_text(&mut self, text: &str) {
        log_failure("update knob label", self.write_label(text));
    }

    fn set_tooltip_content(&mut self, content: &TooltipContent) {
        log_failure("render tooltip", self.tooltip.render(&self.document, content));
    }

    fn set_tooltip_visible(&mut self, visible: bool) {
        log_failure("toggle tooltip", self.tooltip.set_visible(visible));
    }

    fn set_tooltip_position(&mut self, left: f64, top: f64) {
        log_failure("position tooltip", self.tooltip.set_position(left, top));
    }
}
