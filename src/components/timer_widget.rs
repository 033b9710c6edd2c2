use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent};
use yew::prelude::*;

use super::time_display::TimeDisplay;
use crate::config::TimerConfig;
use crate::model::{TimerAction, TimerState, stop_timer};
use crate::state::{Footprint, Placement, PlacementAction, Viewport};
use crate::subscriptions::{DragInput, DragListeners, TickSubscription, first_touch_point, resize_listener};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct TimerWidgetProps {
    #[prop_or_default]
    pub initial_secs: u64,
    /// Fired once each time the stop control is pressed.
    #[prop_or_default]
    pub on_stop: Callback<()>,
}

fn target_is_control(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("button").ok().flatten())
        .is_some()
}

fn measure_footprint(widget_ref: &NodeRef) -> Option<Footprint> {
    let rect = widget_ref.cast::<Element>()?.get_bounding_client_rect();
    Some(Footprint {
        width: rect.width(),
        height: rect.height(),
    })
}

#[function_component(TimerWidget)]
pub fn timer_widget(props: &TimerWidgetProps) -> Html {
    let config = use_memo((), |_| TimerConfig::load());
    let widget_ref = use_node_ref();
    let timer = use_reducer({
        let initial = props.initial_secs;
        move || TimerState::new(initial)
    });
    let placement = use_reducer({
        let config = config.clone();
        move || {
            Placement::top_right(
                Viewport::current(),
                config.footprint(),
                config.margin,
                config.default_inset,
            )
        }
    });
    let log = config.debug_log;
    let dragging = placement.dragging();

    // One interval while running; dropping it on the next change or at unmount clears it.
    {
        let dispatcher = timer.dispatcher();
        let period = config.tick_ms;
        use_effect_with(timer.running, move |&running| {
            let tick = running.then(|| {
                TickSubscription::start(period, move || dispatcher.dispatch(TimerAction::Tick))
            });
            move || drop(tick)
        });
    }

    // Window move/up listeners exist only while a drag session is open.
    {
        let dispatcher = placement.dispatcher();
        use_effect_with(dragging, move |&dragging| {
            let listeners = if dragging {
                clog(log, "timer drag started");
                DragListeners::attach(Callback::from(move |input: DragInput| match input {
                    DragInput::Move { x, y } => {
                        dispatcher.dispatch(PlacementAction::UpdateDrag { x, y })
                    }
                    DragInput::End => dispatcher.dispatch(PlacementAction::EndDrag),
                }))
            } else {
                None
            };
            move || {
                if listeners.is_some() {
                    clog(log, "timer drag listeners released");
                }
                drop(listeners);
            }
        });
    }

    // Resize follows the widget's whole lifetime.
    {
        let dispatcher = placement.dispatcher();
        let widget_ref = widget_ref.clone();
        let measure = config.measure_rendered_size;
        use_effect_with((), move |_| {
            if measure {
                if let Some(fp) = measure_footprint(&widget_ref) {
                    dispatcher.dispatch(PlacementAction::Measure(fp));
                }
            }
            let listener = resize_listener(move |viewport| {
                dispatcher.dispatch(PlacementAction::Resize(viewport));
            });
            move || drop(listener)
        });
    }

    let begin_drag = {
        let dispatcher = placement.dispatcher();
        let widget_ref = widget_ref.clone();
        let measure = config.measure_rendered_size;
        move |x: f64, y: f64| {
            if measure {
                if let Some(fp) = measure_footprint(&widget_ref) {
                    dispatcher.dispatch(PlacementAction::Measure(fp));
                }
            }
            dispatcher.dispatch(PlacementAction::BeginDrag { x, y });
        }
    };
    let on_mouse_down = {
        let begin_drag = begin_drag.clone();
        Callback::from(move |e: MouseEvent| {
            if e.button() != 0 || target_is_control(&e) {
                return;
            }
            // Keeps the browser from starting a text selection mid-drag.
            e.prevent_default();
            begin_drag(e.client_x() as f64, e.client_y() as f64);
        })
    };
    let on_touch_start = Callback::from(move |e: TouchEvent| {
        if target_is_control(&e) {
            return;
        }
        if let Some((x, y)) = first_touch_point(&e) {
            begin_drag(x, y);
        }
    });

    let on_toggle = {
        let dispatcher = timer.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(TimerAction::Toggle))
    };
    let on_stop = {
        let dispatcher = timer.dispatcher();
        let on_stop = props.on_stop.clone();
        Callback::from(move |_| {
            clog(log, "timer stopped");
            stop_timer(|action| dispatcher.dispatch(action), &on_stop);
        })
    };

    let pos = placement.position;
    let (cursor, lift) = if dragging {
        ("grabbing", "transform:scale(1.05); box-shadow:0 12px 28px rgba(0,0,0,0.55);")
    } else {
        ("grab", "box-shadow:0 4px 12px rgba(0,0,0,0.35);")
    };
    let style = format!(
        "position:fixed; left:{}px; top:{}px; z-index:50; display:flex; align-items:center; gap:10px; padding:14px 16px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; cursor:{}; user-select:none; touch-action:none; transition:transform 120ms ease, box-shadow 120ms ease; {}",
        pos.x, pos.y, cursor, lift
    );

    html! {
        <div
            ref={widget_ref}
            class={classes!("quest-timer", dragging.then_some("dragging"))}
            style={style}
            onmousedown={on_mouse_down}
            ontouchstart={on_touch_start}
        >
            <span title="Drag to move" aria-hidden="true" style="font-size:16px; opacity:0.6;">{"⠿"}</span>
            <TimeDisplay
                elapsed_secs={timer.elapsed_secs}
                running={timer.running}
                on_toggle={on_toggle}
                on_stop={on_stop}
            />
        </div>
    }
}
