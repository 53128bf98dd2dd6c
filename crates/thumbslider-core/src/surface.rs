use crate::geometry::SliderGeometry;
use crate::tooltip::TooltipContent;

/// Rendering interface between the slider state machine and whatever displays it.
///
/// Reads report current layout; writes are fire-and-forget. Implementations
/// that can fail (the DOM) log and carry on, so a broken style write degrades
/// the visuals without interrupting the drag.
pub trait SliderSurface {
    /// Rendered width of the knob in pixels.
    fn knob_width(&self) -> f64;

    /// Rendered width of the track in pixels.
    fn track_width(&self) -> f64;

    /// Page-absolute x of the container's left edge.
    fn container_page_left(&self) -> f64;

    /// Moves the knob's left edge to `offset` pixels along the track.
    fn set_knob_pixel_offset(&mut self, offset: f64);

    /// Replaces the label shown on the knob.
    fn set_label_text(&mut self, text: &str);

    fn set_tooltip_content(&mut self, content: &TooltipContent);

    fn set_tooltip_visible(&mut self, visible: bool);

    /// Positions the tooltip panel in container pixels.
    fn set_tooltip_position(&mut self, left: f64, top: f64);

    fn geometry(&self) -> SliderGeometry {
        SliderGeometry::new(self.knob_width(), self.track_width())
    }
}
