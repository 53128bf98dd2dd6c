use crate::dom::create_html_element;
use crate::error::WidgetError;
use web_sys::{Document, HtmlElement};

pub const PRELOAD_CLASS: &str = "thumbslider-preload";

/// Hidden element holding one `<img>` per photo so the browser fetches them up front.
#[derive(Clone, Debug)]
pub struct ImageCache {
    root: HtmlElement,
}

impl ImageCache {
    pub fn build(document: &Document, container: &HtmlElement, urls: &[&str]) -> Result<Self, WidgetError> {
        let root = create_html_element(document, "div", Some(PRELOAD_CLASS))?;
        root.style().set_property("display", "none")?;
        for url in urls {
            let image = create_html_element(document, "img", None)?;
            image.set_attribute("src", url)?;
            root.append_child(&image)?;
        }
        container.append_child(&root)?;
        log::debug!("preloading {} photos", urls.len());
        Ok(Self { root })
    }

    pub fn len(&self) -> u32 {
        self.root.child_element_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
