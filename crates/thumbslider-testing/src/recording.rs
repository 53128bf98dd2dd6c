//! In-memory [`SliderSurface`] that records every write.

use thumbslider_core::{SliderSurface, TooltipContent};

/// A single write made by the slider to its surface.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    KnobOffset(f64),
    Label(String),
    TooltipContent(TooltipContent),
    TooltipVisible(bool),
    TooltipPosition { left: f64, top: f64 },
}

/// Surface with configurable layout that keeps the full write history.
///
/// Layout can be changed between interactions to simulate reflow.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    knob_width: f64,
    track_width: f64,
    container_left: f64,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new(knob_width: f64, track_width: f64) -> Self {
        Self {
            knob_width,
            track_width,
            ..Self::default()
        }
    }

    pub fn with_container_left(mut self, left: f64) -> Self {
        self.container_left = left;
        self
    }

    pub fn set_knob_width(&mut self, width: f64) {
        self.knob_width = width;
    }

    pub fn set_track_width(&mut self, width: f64) {
        self.track_width = width;
    }

    pub fn set_container_left(&mut self, left: f64) {
        self.container_left = left;
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn knob_offsets(&self) -> Vec<f64> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::KnobOffset(offset) => Some(*offset),
                _ => None,
            })
            .collect()
    }

    pub fn last_knob_offset(&self) -> Option<f64> {
        self.knob_offsets().last().copied()
    }

    pub fn label(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Label(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn tooltip_content(&self) -> Option<&TooltipContent> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::TooltipContent(content) => Some(content),
            _ => None,
        })
    }

    pub fn tooltip_visible(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|call| match call {
                SurfaceCall::TooltipVisible(visible) => Some(*visible),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn tooltip_position(&self) -> Option<(f64, f64)> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::TooltipPosition { left, top } => Some((*left, *top)),
            _ => None,
        })
    }
}

impl SliderSurface for RecordingSurface {
    fn knob_width(&self) -> f64 {
        self.knob_width
    }

    fn track_width(&self) -> f64 {
        self.track_width
    }

    fn container_page_left(&self) -> f64 {
        self.container_left
    }

    fn set_knob_pixel_offset(&mut self, offset: f64) {
        self.calls.push(SurfaceCall::KnobOffset(offset));
    }

    fn set_label_text(&mut self, text: &str) {
        self.calls.push(SurfaceCall::Label(text.to_owned()));
    }

    fn set_tooltip_content(&mut self, content: &TooltipContent) {
        self.calls.push(SurfaceCall::TooltipContent(content.clone()));
    }

    fn set_tooltip_visible(&mut self, visible: bool) {
        self.calls.push(SurfaceCall::TooltipVisible(visible));
    }

    fn set_tooltip_position(&mut self, left: f64, top: f64) {
        self.calls.push(SurfaceCall::TooltipPosition { left, top });
    }
}

#[cfg(test)]
#[path = "tests/recording_tests.rs"]
mod tests;
