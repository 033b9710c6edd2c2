//! Browser resources the timer holds only while it needs them.
//!
//! Each handle deregisters itself on drop, so releasing one is just letting it
//! go out of scope: from an effect cleanup, on a state change, or at unmount.

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};
use yew::Callback;

use crate::state::Viewport;

/// Repeating tick. Missed periods while the tab is suspended are not replayed.
pub struct TickSubscription {
    _interval: Interval,
}

impl TickSubscription {
    pub fn start(period_ms: u32, on_tick: impl Fn() + 'static) -> Self {
        Self {
            _interval: Interval::new(period_ms, move || on_tick()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragInput {
    Move { x: f64, y: f64 },
    End,
}

/// Window-level move/up listeners for one drag session.
pub struct DragListeners {
    _listeners: Vec<EventListener>,
}

impl DragListeners {
    pub fn attach(on_input: Callback<DragInput>) -> Option<Self> {
        let window = web_sys::window()?;
        let mut listeners = Vec::with_capacity(5);

        let cb = on_input.clone();
        listeners.push(EventListener::new(&window, "mousemove", move |event: &Event| {
            let Some(e) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            cb.emit(DragInput::Move {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            });
        }));

        let cb = on_input.clone();
        listeners.push(EventListener::new(&window, "mouseup", move |_event: &Event| {
            cb.emit(DragInput::End);
        }));

        // Non-passive so the page does not scroll under the finger.
        let cb = on_input.clone();
        listeners.push(EventListener::new_with_options(
            &window,
            "touchmove",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(e) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let Some((x, y)) = first_touch_point(e) else {
                    return;
                };
                e.prevent_default();
                cb.emit(DragInput::Move { x, y });
            },
        ));

        for kind in ["touchend", "touchcancel"] {
            let cb = on_input.clone();
            listeners.push(EventListener::new(&window, kind, move |_event: &Event| {
                cb.emit(DragInput::End);
            }));
        }

        Some(Self {
            _listeners: listeners,
        })
    }
}

/// Listens for window resizes for as long as the returned handle lives.
pub fn resize_listener(on_resize: impl Fn(Viewport) + 'static) -> Option<EventListener> {
    let window = web_sys::window()?;
    Some(EventListener::new(&window, "resize", move |_event: &Event| {
        on_resize(Viewport::current());
    }))
}

pub fn first_touch_point(e: &TouchEvent) -> Option<(f64, f64)> {
    let t0 = e.touches().item(0)?;
    Some((t0.client_x() as f64, t0.client_y() as f64))
}
