//! Testing utilities and harness for the thumbnail slider

pub mod callbacks;
pub mod recording;
pub mod robot;

pub use callbacks::*;
pub use recording::*;
pub use robot::*;

pub mod prelude {
    pub use crate::callbacks::{CallbackKind, CallbackLog};
    pub use crate::recording::{RecordingSurface, SurfaceCall};
    pub use crate::robot::SliderRobot;
}
