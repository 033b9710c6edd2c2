use super::timer_widget::TimerWidget;
use yew::prelude::*;

// Minimal host page; routing and task storage live elsewhere.
#[function_component(App)]
pub fn app() -> Html {
    let stopped_sessions = use_state(|| 0u32);

    let on_stop = {
        let stopped_sessions = stopped_sessions.clone();
        Callback::from(move |_| stopped_sessions.set(*stopped_sessions + 1))
    };

    html! {
        <div id="root" style="min-height:100vh; padding:24px; background:#0e1116; color:#c9d1d9; font-family:system-ui, sans-serif;">
            <h2 style="margin:0 0 8px 0; color:#58a6ff;">{"Quest Timer"}</h2>
            <p style="margin:0; opacity:0.8;">{"Drag the timer anywhere on screen. It stays inside the window when you resize."}</p>
            <p style="margin:8px 0 0 0; font-size:13px; opacity:0.6;">{ format!("Stopped sessions: {}", *stopped_sessions) }</p>
            <TimerWidget on_stop={on_stop} />
        </div>
    }
}
