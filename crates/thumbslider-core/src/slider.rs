//! The slider state machine.
//!
//! A drag goes `Idle -> Dragging` on press, stays `Dragging` through moves and
//! returns to `Idle` on release. Every press and move runs a position update:
//! the pointer is converted to a knob offset, the knob follows it, and when the
//! offset lands on a new integer value the value is committed through
//! [`ThumbnailSlider::set_value`].

use crate::config::SliderConfig;
use crate::error::SliderError;
use crate::surface::SliderSurface;
use crate::tooltip::{TooltipContent, TooltipKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

pub struct ThumbnailSlider<S: SliderSurface> {
    surface: S,
    config: SliderConfig,
    current_value: i64,
    /// Whether the latest position update of the drag committed a new value.
    value_changed_since_drag_start: bool,
    drag: DragState,
    tooltip_kind: TooltipKind,
}

impl<S: SliderSurface> ThumbnailSlider<S> {
    /// Creates the slider and commits the configured initial value.
    pub fn new(surface: S, config: SliderConfig) -> Result<Self, SliderError> {
        config.validate()?;
        let initial = config.initial_value();
        let mut slider = Self {
            surface,
            current_value: config.min(),
            config,
            value_changed_since_drag_start: false,
            drag: DragState::Idle,
            tooltip_kind: TooltipKind::Empty,
        };
        slider.set_value(Some(initial));
        Ok(slider)
    }

    pub fn value(&self) -> i64 {
        self.current_value
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    pub fn value_changed_since_drag_start(&self) -> bool {
        self.value_changed_since_drag_start
    }

    pub fn tooltip_kind(&self) -> TooltipKind {
        self.tooltip_kind
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Starts a drag at page-absolute `page_x`.
    ///
    /// Pressing while a drag is already running restarts it.
    pub fn press(&mut self, page_x: f64) {
        log::debug!("slider drag started at page x {page_x}");
        self.drag = DragState::Dragging;
        self.value_changed_since_drag_start = false;
        self.handle_pointer(page_x);

        let value = self.current_value;
        if let Some(on_start) = self.config.on_start.as_mut() {
            on_start(value);
        }
    }

    /// Continues a drag. Ignored while idle.
    pub fn drag_to(&mut self, page_x: f64) {
        if !self.is_dragging() {
            log::trace!("ignoring move at page x {page_x}: no drag in progress");
            return;
        }
        self.handle_pointer(page_x);
    }

    /// Ends the drag. `on_end` only fires when the last position update of the
    /// drag committed a new value.
    pub fn release(&mut self) {
        if !self.is_dragging() {
            return;
        }
        self.drag = DragState::Idle;

        let value = self.current_value;
        log::debug!(
            "slider drag ended at {value} (changed: {})",
            self.value_changed_since_drag_start
        );
        if self.value_changed_since_drag_start && self.config.on_end.is_some() {
            self.refresh_tooltip(value);
            if let Some(on_end) = self.config.on_end.as_mut() {
                on_end(value);
            }
        }
    }

    /// Position update for a pointer at page-absolute `page_x`.
    ///
    /// The knob follows the pointer exactly; the value only changes when the
    /// knob crosses onto a different integer. Degenerate geometry (empty range,
    /// or a track no wider than the knob) makes this a no-op.
    pub fn handle_pointer(&mut self, page_x: f64) {
        let geometry = self.surface.geometry();
        let range = self.config.range();
        if !geometry.maps_pointer(range) {
            log::trace!("pointer ignored: range {range}, geometry {geometry:?}");
            return;
        }

        let pointer_x = page_x - self.surface.container_page_left();
        let offset = geometry.knob_offset_for_pointer(pointer_x);
        self.surface.set_knob_pixel_offset(offset);

        let value = geometry.value_for_offset(offset, self.config.min(), range);
        log::trace!("pointer x {pointer_x} -> knob offset {offset} -> value {value}");
        if value != self.current_value {
            self.set_value(Some(value));
            self.value_changed_since_drag_start = true;
        } else {
            self.value_changed_since_drag_start = false;
        }

        let placement = self.config.tooltip_layout().place(self.tooltip_kind, offset);
        self.surface.set_tooltip_position(placement.left, placement.top);
    }

    /// Commits `value` (or `min` when `None`) after clamping it into range.
    ///
    /// The knob is moved to the value's pixel offset. Once the track has more
    /// than a few pixels of travel the knob label is updated, and with a
    /// change callback configured the tooltip is refreshed before the callback
    /// runs.
    pub fn set_value(&mut self, value: Option<i64>) {
        let value = self.config.clamp(value.unwrap_or(self.config.min()));
        let geometry = self.surface.geometry();

        if geometry.travel() > 0.0 && geometry.travel().is_finite() {
            let offset = geometry.offset_for_value(value, self.config.min(), self.config.range());
            self.surface.set_knob_pixel_offset(offset);
        }

        self.current_value = value;

        if geometry.runs_change_pipeline() {
            self.notify_change(value);
        }
    }

    /// Re-applies the current value, recomputing pixel geometry after a layout change.
    pub fn update(&mut self) {
        self.set_value(Some(self.current_value));
    }

    fn notify_change(&mut self, value: i64) {
        self.surface.set_label_text(&value.to_string());
        if self.config.on_change.is_some() {
            self.refresh_tooltip(value);
            if let Some(on_change) = self.config.on_change.as_mut() {
                on_change(value);
            }
        }
    }

    fn refresh_tooltip(&mut self, value: i64) {
        let content =
            TooltipContent::for_value(self.config.photos(), value, self.config.error_message());
        self.surface.set_tooltip_content(&content);
        self.tooltip_kind = content.kind();
        self.surface.set_tooltip_visible(true);
    }
}

impl<S: SliderSurface + std::fmt::Debug> std::fmt::Debug for ThumbnailSlider<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailSlider")
            .field("surface", &self.surface)
            .field("config", &self.config)
            .field("current_value", &self.current_value)
            .field(
                "value_changed_since_drag_start",
                &self.value_changed_since_drag_start,
            )
            .field("drag", &self.drag)
            .field("tooltip_kind", &self.tooltip_kind)
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/slider_tests.rs"]
mod tests;
