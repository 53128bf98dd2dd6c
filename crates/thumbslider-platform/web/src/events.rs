//! Event listener groups.
//!
//! A group owns one handler closure and registers it for a fixed list of event
//! types. The closure lives as long as the group; attaching and detaching only
//! touches the target's listener list, so a handler may detach its own group.

use crate::error::WidgetError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

pub(crate) type EventHandler = Closure<dyn FnMut(Event)>;

pub(crate) struct ListenerGroup {
    target: EventTarget,
    event_types: &'static [&'static str],
    handler: EventHandler,
    attached: bool,
}

impl ListenerGroup {
    pub(crate) fn new(
        target: EventTarget,
        event_types: &'static [&'static str],
        handler: impl FnMut(Event) + 'static,
    ) -> Self {
        Self {
            target,
            event_types,
            handler: Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>),
            attached: false,
        }
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.attached
    }

    pub(crate) fn attach(&mut self) -> Result<(), WidgetError> {
        if self.attached {
            return Ok(());
        }
        // Non-passive so prevent_default can stop scrolling during a touch drag.
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        for event_type in self.event_types {
            self.target
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event_type,
                    self.handler.as_ref().unchecked_ref(),
                    &options,
                )?;
        }
        self.attached = true;
        Ok(())
    }

    pub(crate) fn detach(&mut self) {
        if !self.attached {
            return;
        }
        for event_type in self.event_types {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(event_type, self.handler.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove {event_type} listener: {err:?}");
            }
        }
        self.attached = false;
    }
}

impl Drop for ListenerGroup {
    fn drop(&mut self) {
        self.detach();
    }
}
