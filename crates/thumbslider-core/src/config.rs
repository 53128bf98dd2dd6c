//! Slider configuration: recognized options, their defaults, and the merge
//! from caller-supplied options into an immutable [`SliderConfig`].

use crate::error::SliderError;
use std::fmt;

/// Text shown in the tooltip when `photos` has no entry for the current value.
pub const DEFAULT_ERROR_MESSAGE: &str = "no photo";
pub const DEFAULT_VALUE: i64 = 0;
pub const DEFAULT_MIN: i64 = 0;
pub const DEFAULT_MAX: i64 = 100;

/// Callback invoked with the slider value.
pub type ValueCallback = Box<dyn FnMut(i64)>;

/// A preview image, indexed by slider value.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Photo {
    pub url: String,
}

impl Photo {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Tooltip panel placement relative to the knob offset.
///
/// The photo panel and the narrower "missing photo" panel have different
/// widths and vertical offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipLayout {
    pub photo_width: f64,
    pub photo_top: f64,
    pub missing_width: f64,
    pub missing_top: f64,
}

impl Default for TooltipLayout {
    fn default() -> Self {
        Self {
            photo_width: 140.0,
            photo_top: 44.0,
            missing_width: 58.0,
            missing_top: 164.0,
        }
    }
}

/// Caller-supplied options. Any field left as `None` takes its default.
#[derive(Default)]
pub struct SliderOptions {
    pub photos: Option<Vec<Photo>>,
    pub error_message: Option<String>,
    pub value: Option<i64>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub change: Option<ValueCallback>,
    pub start: Option<ValueCallback>,
    pub end: Option<ValueCallback>,
    pub preload_photos: Option<bool>,
    pub tooltip_layout: Option<TooltipLayout>,
}

impl fmt::Debug for SliderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderOptions")
            .field("photos", &self.photos)
            .field("error_message", &self.error_message)
            .field("value", &self.value)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("change", &self.change.is_some())
            .field("start", &self.start.is_some())
            .field("end", &self.end.is_some())
            .field("preload_photos", &self.preload_photos)
            .field("tooltip_layout", &self.tooltip_layout)
            .finish()
    }
}

/// The value callbacks of a [`SliderConfig`], detached from it.
#[derive(Default)]
pub struct SliderCallbacks {
    pub change: Option<ValueCallback>,
    pub start: Option<ValueCallback>,
    pub end: Option<ValueCallback>,
}

impl fmt::Debug for SliderCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderCallbacks")
            .field("change", &self.change.is_some())
            .field("start", &self.start.is_some())
            .field("end", &self.end.is_some())
            .finish()
    }
}

/// Fully resolved slider configuration.
///
/// Built either from [`SliderOptions`] via [`SliderConfig::from_options`] or
/// with the `with_*` builder methods starting from [`SliderConfig::default`].
pub struct SliderConfig {
    pub(crate) photos: Vec<Photo>,
    pub(crate) error_message: String,
    pub(crate) value: i64,
    pub(crate) min: i64,
    pub(crate) max: i64,
    pub(crate) on_change: Option<ValueCallback>,
    pub(crate) on_start: Option<ValueCallback>,
    pub(crate) on_end: Option<ValueCallback>,
    pub(crate) preload_photos: bool,
    pub(crate) tooltip_layout: TooltipLayout,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            photos: Vec::new(),
            error_message: DEFAULT_ERROR_MESSAGE.into(),
            value: DEFAULT_VALUE,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            on_change: None,
            on_start: None,
            on_end: None,
            preload_photos: false,
            tooltip_layout: TooltipLayout::default(),
        }
    }
}

impl SliderConfig {
    /// Merges `options` over the defaults and validates the result.
    pub fn from_options(options: SliderOptions) -> Result<Self, SliderError> {
        let defaults = Self::default();
        let config = Self {
            photos: options.photos.unwrap_or(defaults.photos),
            error_message: options.error_message.unwrap_or(defaults.error_message),
            value: options.value.unwrap_or(defaults.value),
            min: options.min.unwrap_or(defaults.min),
            max: options.max.unwrap_or(defaults.max),
            on_change: options.change,
            on_start: options.start,
            on_end: options.end,
            preload_photos: options.preload_photos.unwrap_or(defaults.preload_photos),
            tooltip_layout: options.tooltip_layout.unwrap_or(defaults.tooltip_layout),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SliderError> {
        if self.min > self.max {
            return Err(SliderError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn with_photos(mut self, photos: impl IntoIterator<Item = Photo>) -> Self {
        self.photos = photos.into_iter().collect();
        self
    }

    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = message.into();
        self
    }

    /// Sets the initial value. It is clamped into range when the slider is created.
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = value;
        self
    }

    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn on_change(mut self, callback: impl FnMut(i64) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn on_start(mut self, callback: impl FnMut(i64) + 'static) -> Self {
        self.on_start = Some(Box::new(callback));
        self
    }

    pub fn on_end(mut self, callback: impl FnMut(i64) + 'static) -> Self {
        self.on_end = Some(Box::new(callback));
        self
    }

    /// Moves the value callbacks out, leaving none configured.
    pub fn take_callbacks(&mut self) -> SliderCallbacks {
        SliderCallbacks {
            change: self.on_change.take(),
            start: self.on_start.take(),
            end: self.on_end.take(),
        }
    }

    pub fn with_preload_photos(mut self, preload: bool) -> Self {
        self.preload_photos = preload;
        self
    }

    pub fn with_tooltip_layout(mut self, layout: TooltipLayout) -> Self {
        self.tooltip_layout = layout;
        self
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn initial_value(&self) -> i64 {
        self.value
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Width of the value range, `max - min`.
    ///
    /// Unsigned so that the full `i64` span fits; zero when the range is inverted.
    pub fn range(&self) -> u64 {
        if self.min > self.max {
            return 0;
        }
        self.max.abs_diff(self.min)
    }

    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    pub fn preload_photos(&self) -> bool {
        self.preload_photos
    }

    pub fn tooltip_layout(&self) -> TooltipLayout {
        self.tooltip_layout
    }

    pub fn has_change_callback(&self) -> bool {
        self.on_change.is_some()
    }
}

impl fmt::Debug for SliderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderConfig")
            .field("photos", &self.photos.len())
            .field("error_message", &self.error_message)
            .field("value", &self.value)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("on_change", &self.on_change.is_some())
            .field("on_start", &self.on_start.is_some())
            .field("on_end", &self.on_end.is_some())
            .field("preload_photos", &self.preload_photos)
            .finish()
    }
}
