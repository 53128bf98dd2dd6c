//! Pixel geometry of the knob and track, and the linear mapping between knob
//! offsets and slider values.
//!
//! All offsets are measured in CSS pixels from the left edge of the track and
//! refer to the knob's left edge.

/// Below this travel the track is considered not laid out yet, and the label,
/// tooltip and change callback are left untouched.
pub const MIN_TRAVEL_FOR_CHANGE: f64 = 10.0;

/// Rendered widths of the knob and the track.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SliderGeometry {
    pub knob_width: f64,
    pub track_width: f64,
}

impl SliderGeometry {
    pub const fn new(knob_width: f64, track_width: f64) -> Self {
        Self {
            knob_width,
            track_width,
        }
    }

    /// Distance the knob's left edge can move, `track_width - knob_width`.
    pub fn travel(&self) -> f64 {
        self.track_width - self.knob_width
    }

    /// Whether a pointer can be mapped onto a value range of width `range`.
    ///
    /// An empty range or a track no wider than the knob would divide by zero.
    pub fn maps_pointer(&self, range: u64) -> bool {
        range > 0 && self.travel() > 0.0 && self.travel().is_finite()
    }

    /// Converts a container-relative pointer x into the knob's left-edge
    /// offset, keeping the knob centred under the pointer but inside the track.
    pub fn knob_offset_for_pointer(&self, pointer_x: f64) -> f64 {
        let centred = (pointer_x + self.knob_width / 2.0).min(self.track_width);
        (centred - self.knob_width).max(0.0).min(self.travel().max(0.0))
    }

    /// Value under a knob offset. Callers must check [`maps_pointer`](Self::maps_pointer) first.
    ///
    /// The step count is capped at `range`, so the result never passes `min + range`
    /// even when `range` is too wide for `f64` to hold exactly.
    pub fn value_for_offset(&self, offset: f64, min: i64, range: u64) -> i64 {
        let steps = (offset * range as f64 / self.travel()).round() as u64;
        min.saturating_add_unsigned(steps.min(range))
    }

    /// Knob offset for a value, rounded to whole pixels.
    ///
    /// Returns `0.0` for an empty range, where every value sits at the start.
    pub fn offset_for_value(&self, value: i64, min: i64, range: u64) -> f64 {
        if range == 0 || value <= min {
            return 0.0;
        }
        (value.abs_diff(min) as f64 * self.travel() / range as f64).round()
    }

    pub fn runs_change_pipeline(&self) -> bool {
        self.travel() > MIN_TRAVEL_FOR_CHANGE
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
