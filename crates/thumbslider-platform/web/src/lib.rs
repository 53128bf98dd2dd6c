//! Web platform adapter for the thumbnail slider.
//!
//! Binds a [`thumbslider_core::ThumbnailSlider`] to a DOM container: the knob
//! and track are looked up by class, a tooltip is inserted, pointer listeners
//! are attached, and every slider write lands on the page through
//! [`DomSurface`]. JavaScript callers use the exported `ThumbnailSlider` class.

mod bindings;
mod dom;
mod error;
mod events;
mod options;
mod preload;
mod surface;
mod tooltip;
mod widget;

pub use bindings::JsThumbnailSlider;
pub use dom::*;
pub use error::WidgetError;
pub use options::options_from_js;
pub use preload::ImageCache;
pub use surface::DomSurface;
pub use tooltip::TooltipElements;
pub use widget::WebThumbnailSlider;
