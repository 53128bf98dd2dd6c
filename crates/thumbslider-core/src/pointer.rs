/// Which part of a drag an input event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Start,
    Move,
    End,
}

impl PointerPhase {
    /// DOM event types delivering this phase, touch first.
    pub const fn event_types(self) -> &'static [&'static str] {
        match self {
            PointerPhase::Start => &["touchstart", "mousedown"],
            PointerPhase::Move => &["touchmove", "mousemove"],
            PointerPhase::End => &["touchend", "touchcancel", "mouseup"],
        }
    }

    pub fn from_event_type(event_type: &str) -> Option<Self> {
        [PointerPhase::Start, PointerPhase::Move, PointerPhase::End]
            .into_iter()
            .find(|phase| phase.event_types().contains(&event_type))
    }
}

/// Event type fired on the window when the viewport is resized.
pub const RESIZE_EVENT: &str = "resize";
