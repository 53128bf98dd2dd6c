use thiserror::Error;

/// Errors raised while turning caller options into a [`SliderConfig`](crate::SliderConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderError {
    #[error("invalid slider range: min ({min}) is greater than max ({max})")]
    InvalidRange { min: i64, max: i64 },
}
