//! Tooltip content model.
//!
//! The tooltip shows either the photo for the current value or the configured
//! error message. Which of the two is showing is kept as explicit state so the
//! panel can be placed without inspecting rendered markup.

use crate::config::{Photo, TooltipLayout};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TooltipContent {
    Photo { url: String },
    Missing { message: String },
}

impl TooltipContent {
    /// Content for `value`: the photo at that index, or `error_message` when
    /// there is none (including negative values).
    pub fn for_value(photos: &[Photo], value: i64, error_message: &str) -> Self {
        match usize::try_from(value).ok().and_then(|index| photos.get(index)) {
            Some(photo) => TooltipContent::Photo {
                url: photo.url.clone(),
            },
            None => TooltipContent::Missing {
                message: error_message.to_owned(),
            },
        }
    }

    pub fn kind(&self) -> TooltipKind {
        match self {
            TooltipContent::Photo { .. } => TooltipKind::Photo,
            TooltipContent::Missing { .. } => TooltipKind::Missing,
        }
    }
}

/// What the tooltip currently displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TooltipKind {
    /// Nothing rendered yet.
    #[default]
    Empty,
    Photo,
    Missing,
}

/// Left/top placement of the tooltip panel, in container pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
}

impl TooltipLayout {
    /// Centres the panel for `kind` over a knob at `knob_offset`.
    pub fn place(&self, kind: TooltipKind, knob_offset: f64) -> TooltipPlacement {
        let (width, top) = match kind {
            TooltipKind::Empty | TooltipKind::Photo => (self.photo_width, self.photo_top),
            TooltipKind::Missing => (self.missing_width, self.missing_top),
        };
        TooltipPlacement {
            left: knob_offset - width / 2.0,
            top,
        }
    }
}
