//! Tooltip markup.
//!
//! ```html
//! <div class="top_tooltip">
//!   <div class="conten_tooltip"><!-- photo or error --></div>
//!   <div class="bottom_tooltip"></div>
//! </div>
//! ```
//!
//! The class names are the ones existing page stylesheets target.

use crate::dom::create_html_element;
use crate::error::WidgetError;
use thumbslider_core::TooltipContent;
use web_sys::{Document, HtmlElement};

pub const TOOLTIP_CLASS: &str = "top_tooltip";
pub const TOOLTIP_CONTENT_CLASS: &str = "conten_tooltip";
pub const TOOLTIP_BOTTOM_CLASS: &str = "bottom_tooltip";

#[derive(Clone, Debug)]
pub struct TooltipElements {
    pub root: HtmlElement,
    pub content: HtmlElement,
    pub bottom: HtmlElement,
}

impl TooltipElements {
    pub fn create(document: &Document) -> Result<Self, WidgetError> {
        let root = create_html_element(document, "div", Some(TOOLTIP_CLASS))?;
        let content = create_html_element(document, "div", Some(TOOLTIP_CONTENT_CLASS))?;
        let bottom = create_html_element(document, "div", Some(TOOLTIP_BOTTOM_CLASS))?;
        root.append_child(&content)?;
        root.append_child(&bottom)?;
        Ok(Self {
            root,
            content,
            bottom,
        })
    }

    /// Inserts the tooltip as the first child of `container`, so its
    /// `left`/`top` are relative to the same box as the knob offset.
    pub fn insert_into(&self, container: &HtmlElement) -> Result<(), WidgetError> {
        container.prepend_with_node_1(&self.root)?;
        Ok(())
    }

    /// Replaces the image region with an anchor-wrapped photo or the error message.
    pub fn render(&self, document: &Document, content: &TooltipContent) -> Result<(), WidgetError> {
        self.content.set_inner_html("");
        match content {
            TooltipContent::Photo { url } => {
                let anchor = create_html_element(document, "a", None)?;
                anchor.set_attribute("href", "#")?;
                let image = create_html_element(document, "img", None)?;
                image.set_attribute("src", url)?;
                anchor.append_child(&image)?;
                self.content.append_child(&anchor)?;
            }
            TooltipContent::Missing { message } => {
                let label = create_html_element(document, "center", None)?;
                label.style().set_property("color", "blue")?;
                label.set_text_content(Some(message));
                self.content.append_child(&label)?;
            }
        }
        Ok(())
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), WidgetError> {
        let display = if visible { "block" } else { "none" };
        self.root.style().set_property("display", display)?;
        Ok(())
    }

    pub fn set_position(&self, left: f64, top: f64) -> Result<(), WidgetError> {
        let style = self.root.style();
        style.set_property("left", &format!("{left}px"))?;
        style.set_property("top", &format!("{top}px"))?;
        Ok(())
    }
}
