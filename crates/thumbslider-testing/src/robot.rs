//! Robot-style driver for the slider.
//!
//! Drives a [`ThumbnailSlider`] over a [`RecordingSurface`] the way a user
//! would: press, move and release at container-relative x coordinates.
//!
//! # Example
//!
//! ```
//! use thumbslider_core::SliderConfig;
//! use thumbslider_testing::SliderRobot;
//!
//! let mut robot = SliderRobot::new(10.0, 110.0, SliderConfig::default()).unwrap();
//! robot.drag(5.0, 55.0);
//! assert_eq!(robot.value(), 50);
//! ```

use crate::recording::RecordingSurface;
use thumbslider_core::{SliderConfig, SliderError, SliderSurface, ThumbnailSlider};

pub struct SliderRobot {
    slider: ThumbnailSlider<RecordingSurface>,
}

impl SliderRobot {
    /// Creates a slider whose knob and track have the given widths.
    pub fn new(knob_width: f64, track_width: f64, config: SliderConfig) -> Result<Self, SliderError> {
        Self::with_surface(RecordingSurface::new(knob_width, track_width), config)
    }

    pub fn with_surface(surface: RecordingSurface, config: SliderConfig) -> Result<Self, SliderError> {
        Ok(Self {
            slider: ThumbnailSlider::new(surface, config)?,
        })
    }

    pub fn value(&self) -> i64 {
        self.slider.value()
    }

    pub fn slider(&self) -> &ThumbnailSlider<RecordingSurface> {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut ThumbnailSlider<RecordingSurface> {
        &mut self.slider
    }

    pub fn surface(&self) -> &RecordingSurface {
        self.slider.surface()
    }

    fn page_x(&self, x: f64) -> f64 {
        x + self.slider.surface().container_page_left()
    }

    /// Presses at container-relative `x`.
    pub fn press_at(&mut self, x: f64) {
        let page_x = self.page_x(x);
        self.slider.press(page_x);
    }

    /// Moves to container-relative `x`.
    pub fn move_to(&mut self, x: f64) {
        let page_x = self.page_x(x);
        self.slider.drag_to(page_x);
    }

    pub fn release(&mut self) {
        self.slider.release();
    }

    /// Presses at `from`, moves to `to` and releases.
    pub fn drag(&mut self, from: f64, to: f64) {
        self.press_at(from);
        self.move_to(to);
        self.release();
    }

    /// Presses at `from` and moves to `to` in `steps` equal increments before releasing.
    pub fn drag_in_steps(&mut self, from: f64, to: f64, steps: usize) {
        self.press_at(from);
        let steps = steps.max(1);
        for step in 1..=steps {
            let x = from + (to - from) * step as f64 / steps as f64;
            self.move_to(x);
        }
        self.release();
    }

    /// Simulates a reflow that changes the track width, followed by the
    /// viewport resize notification.
    pub fn resize_track(&mut self, track_width: f64) {
        log::debug!("robot resizing track to {track_width}");
        self.slider.surface_mut().set_track_width(track_width);
        self.slider.update();
    }
}
