//! Platform-independent core of the thumbnail slider widget.
//!
//! The slider maps a horizontal pointer position onto an integer value range,
//! moves a knob along a track, and keeps a preview tooltip in sync with the
//! current value. Everything that touches a real document goes through the
//! [`SliderSurface`] trait, so the state machine here can be driven by the DOM
//! adapter in `thumbslider-platform-web` or by the recording surface in
//! `thumbslider-testing`.

mod config;
mod error;
mod geometry;
mod pointer;
pub mod preload;
mod slider;
mod surface;
mod tooltip;
mod transform;

pub use config::*;
pub use error::*;
pub use geometry::*;
pub use pointer::*;
pub use slider::*;
pub use surface::*;
pub use tooltip::*;
pub use transform::*;

pub mod prelude {
    pub use crate::config::{Photo, SliderConfig, SliderOptions, TooltipLayout};
    pub use crate::error::SliderError;
    pub use crate::slider::{DragState, ThumbnailSlider};
    pub use crate::surface::SliderSurface;
    pub use crate::tooltip::{TooltipContent, TooltipKind};
    pub use crate::transform::TransformMode;
}
