//! DOM-bound slider widget.
//!
//! Start listeners stay attached for the widget's lifetime. Move and end
//! listeners are attached on press and detached on every end-class event.
//! All handler closures are created once here and hold only a weak reference
//! to the widget, so dropping the [`WebThumbnailSlider`] detaches everything.
//!
//! Value callbacks are queued while the slider runs and invoked after its
//! borrow is released, so a callback may read or set the widget's value.

use crate::dom::{
    first_html_by_class, pointer_page_x, probe_transform_mode, ContainerRef, KNOB_CLASS,
    TRACK_CLASS,
};
use crate::error::WidgetError;
use crate::events::ListenerGroup;
use crate::preload::ImageCache;
use crate::surface::DomSurface;
use crate::tooltip::TooltipElements;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use thumbslider_core::{
    preload, PointerPhase, SliderCallbacks, SliderConfig, ThumbnailSlider, RESIZE_EVENT,
};
use web_sys::{Event, EventTarget};

struct Listeners {
    start: ListenerGroup,
    moves: ListenerGroup,
    ends: ListenerGroup,
    resize: ListenerGroup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Notification {
    Change(i64),
    Start(i64),
    End(i64),
}

type NotificationQueue = Rc<RefCell<VecDeque<Notification>>>;

/// Swaps the config's callbacks for ones that only queue a notification.
///
/// A queueing callback is installed exactly where a real one was, so the
/// slider still refreshes the tooltip for configured callbacks only.
fn queue_callbacks(
    mut config: SliderConfig,
    queue: &NotificationQueue,
) -> (SliderConfig, SliderCallbacks) {
    let callbacks = config.take_callbacks();
    let enqueue = |notify: fn(i64) -> Notification| {
        let queue = Rc::clone(queue);
        move |value| queue.borrow_mut().push_back(notify(value))
    };
    if callbacks.change.is_some() {
        config = config.on_change(enqueue(Notification::Change));
    }
    if callbacks.start.is_some() {
        config = config.on_start(enqueue(Notification::Start));
    }
    if callbacks.end.is_some() {
        config = config.on_end(enqueue(Notification::End));
    }
    (config, callbacks)
}

struct SliderShared {
    slider: RefCell<ThumbnailSlider<DomSurface>>,
    listeners: RefCell<Option<Listeners>>,
    callbacks: RefCell<SliderCallbacks>,
    pending: NotificationQueue,
    preload: Option<ImageCache>,
}

impl SliderShared {
    /// Invokes queued callbacks in order. A dispatch started from inside a
    /// callback returns at once; the outer loop drains what it queued.
    fn dispatch(&self) {
        let Ok(mut callbacks) = self.callbacks.try_borrow_mut() else {
            return;
        };
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(notification) = next else {
                break;
            };
            let (callback, value) = match notification {
                Notification::Change(value) => (callbacks.change.as_mut(), value),
                Notification::Start(value) => (callbacks.start.as_mut(), value),
                Notification::End(value) => (callbacks.end.as_mut(), value),
            };
            if let Some(callback) = callback {
                callback(value);
            }
        }
    }

    fn set_drag_listeners(&self, attached: bool) {
        let mut listeners = self.listeners.borrow_mut();
        let Some(listeners) = listeners.as_mut() else {
            return;
        };
        if attached {
            if let Err(err) = listeners.moves.attach().and_then(|_| listeners.ends.attach()) {
                log::error!("failed to attach drag listeners: {err}");
            }
        } else {
            listeners.moves.detach();
            listeners.ends.detach();
        }
    }

    fn on_start(&self, event: &Event) {
        event.prevent_default();
        let Some(page_x) = pointer_page_x(event) else {
            log::debug!("{} without pointer coordinates ignored", event.type_());
            return;
        };
        {
            let Ok(mut slider) = self.slider.try_borrow_mut() else {
                log::warn!("{} ignored: slider is busy", event.type_());
                return;
            };
            if !slider.is_dragging() {
                self.set_drag_listeners(true);
            }
            slider.press(page_x);
        }
        self.dispatch();
    }

    fn on_move(&self, event: &Event) {
        event.prevent_default();
        let Some(page_x) = pointer_page_x(event) else {
            return;
        };
        match self.slider.try_borrow_mut() {
            Ok(mut slider) => slider.drag_to(page_x),
            Err(_) => log::warn!("{} ignored: slider is busy", event.type_()),
        }
        self.dispatch();
    }

    fn on_end(&self, event: &Event) {
        self.set_drag_listeners(false);
        match self.slider.try_borrow_mut() {
            Ok(mut slider) => slider.release(),
            Err(_) => log::warn!("{} ignored: slider is busy", event.type_()),
        }
        self.dispatch();
    }

    fn on_resize(&self) {
        match self.slider.try_borrow_mut() {
            Ok(mut slider) => slider.update(),
            Err(_) => log::warn!("resize ignored: slider is busy"),
        }
        self.dispatch();
    }
}

fn handler(
    shared: &Weak<SliderShared>,
    handle: fn(&SliderShared, &Event),
) -> impl FnMut(Event) + 'static {
    let shared = shared.clone();
    move |event: Event| {
        if let Some(shared) = shared.upgrade() {
            handle(&shared, &event);
        }
    }
}

/// A thumbnail slider bound to a DOM container.
pub struct WebThumbnailSlider {
    shared: Rc<SliderShared>,
}

impl WebThumbnailSlider {
    /// Builds the widget inside `container`.
    ///
    /// The container must hold descendants with the `knob` and `track` classes.
    pub fn create(
        container: impl Into<ContainerRef>,
        config: SliderConfig,
    ) -> Result<Self, WidgetError> {
        let window = web_sys::window().ok_or(WidgetError::NoWindow)?;
        let document = window.document().ok_or(WidgetError::NoDocument)?;
        let container = container.into().resolve(&document)?;

        let knob = first_html_by_class(&container, KNOB_CLASS)?;
        let track = first_html_by_class(&container, TRACK_CLASS)?;
        let transform = probe_transform_mode(&window);
        log::debug!("creating slider with {transform:?} knob transforms");

        let tooltip = TooltipElements::create(&document)?;
        tooltip.insert_into(&container)?;

        let preload = if config.preload_photos() {
            let urls = preload::unique_urls(config.photos());
            Some(ImageCache::build(&document, &container, &urls)?)
        } else {
            None
        };

        let surface = DomSurface::new(
            document,
            container.clone(),
            knob,
            track,
            tooltip,
            transform,
        );
        let pending = NotificationQueue::default();
        let (config, callbacks) = queue_callbacks(config, &pending);
        let slider = ThumbnailSlider::new(surface, config)?;

        let shared = Rc::new(SliderShared {
            slider: RefCell::new(slider),
            listeners: RefCell::new(None),
            callbacks: RefCell::new(callbacks),
            pending,
            preload,
        });
        let weak = Rc::downgrade(&shared);
        let target: EventTarget = container.into();
        let mut listeners = Listeners {
            start: ListenerGroup::new(
                target.clone(),
                PointerPhase::Start.event_types(),
                handler(&weak, SliderShared::on_start),
            ),
            moves: ListenerGroup::new(
                target.clone(),
                PointerPhase::Move.event_types(),
                handler(&weak, SliderShared::on_move),
            ),
            ends: ListenerGroup::new(
                target,
                PointerPhase::End.event_types(),
                handler(&weak, SliderShared::on_end),
            ),
            resize: ListenerGroup::new(window.into(), &[RESIZE_EVENT], {
                let weak = weak.clone();
                move |_event: Event| {
                    if let Some(shared) = weak.upgrade() {
                        shared.on_resize();
                    }
                }
            }),
        };
        listeners.start.attach()?;
        listeners.resize.attach()?;
        *shared.listeners.borrow_mut() = Some(listeners);
        shared.dispatch();

        Ok(Self { shared })
    }

    pub fn value(&self) -> Result<i64, WidgetError> {
        Ok(self
            .shared
            .slider
            .try_borrow()
            .map_err(|_| WidgetError::Busy)?
            .value())
    }

    pub fn is_dragging(&self) -> Result<bool, WidgetError> {
        Ok(self
            .shared
            .slider
            .try_borrow()
            .map_err(|_| WidgetError::Busy)?
            .is_dragging())
    }

    /// Commits `value` (`None` selects `min`), clamped into range.
    pub fn set_value(&self, value: Option<i64>) -> Result<(), WidgetError> {
        self.shared
            .slider
            .try_borrow_mut()
            .map_err(|_| WidgetError::Busy)?
            .set_value(value);
        self.shared.dispatch();
        Ok(())
    }

    /// Recomputes the knob position for the current value.
    pub fn update(&self) -> Result<(), WidgetError> {
        self.shared
            .slider
            .try_borrow_mut()
            .map_err(|_| WidgetError::Busy)?
            .update();
        self.shared.dispatch();
        Ok(())
    }

    /// Whether move/end listeners are currently attached.
    pub fn drag_listeners_attached(&self) -> bool {
        self.shared
            .listeners
            .borrow()
            .as_ref()
            .is_some_and(|listeners| listeners.moves.is_attached() && listeners.ends.is_attached())
    }

    pub fn preloaded_photos(&self) -> u32 {
        self.shared.preload.as_ref().map_or(0, ImageCache::len)
    }
}
