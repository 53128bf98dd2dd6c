use std::cell::RefCell;
use std::rc::Rc;
use thumbslider_core::SliderConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    Change,
    Start,
    End,
}

/// Shared, ordered record of every callback the slider invoked.
#[derive(Clone, Debug, Default)]
pub struct CallbackLog {
    entries: Rc<RefCell<Vec<(CallbackKind, i64)>>>,
}

impl CallbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends `(kind, value)` to this log.
    pub fn recorder(&self, kind: CallbackKind) -> impl FnMut(i64) + 'static {
        let entries = Rc::clone(&self.entries);
        move |value| entries.borrow_mut().push((kind, value))
    }

    /// Installs change, start and end recorders on `config`.
    pub fn attach(&self, config: SliderConfig) -> SliderConfig {
        config
            .on_change(self.recorder(CallbackKind::Change))
            .on_start(self.recorder(CallbackKind::Start))
            .on_end(self.recorder(CallbackKind::End))
    }

    pub fn entries(&self) -> Vec<(CallbackKind, i64)> {
        self.entries.borrow().clone()
    }

    /// Values passed to callbacks of `kind`, in call order.
    pub fn values(&self, kind: CallbackKind) -> Vec<i64> {
        self.entries
            .borrow()
            .iter()
            .filter(|(entry_kind, _)| *entry_kind == kind)
            .map(|(_, value)| *value)
            .collect()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}
