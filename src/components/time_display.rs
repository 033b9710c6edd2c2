use crate::util::format_elapsed;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TimeDisplayProps {
    pub elapsed_secs: u64,
    pub running: bool,
    pub on_toggle: Callback<()>,
    pub on_stop: Callback<()>,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let stop_cb = {
        let cb = props.on_stop.clone();
        Callback::from(move |_| cb.emit(()))
    };
    // Presses on the controls must never reach the widget's drag handlers.
    let hold_mouse = Callback::from(|e: MouseEvent| e.stop_propagation());
    let hold_touch = Callback::from(|e: TouchEvent| e.stop_propagation());

    let (toggle_label, toggle_glyph) = if props.running {
        ("Pause", "⏸")
    } else {
        ("Start", "▶")
    };
    let button_style = "width:32px; height:32px; padding:0; border-radius:6px; background:transparent; border:1px solid #30363d; color:inherit; cursor:pointer;";

    html! {<div style="display:flex; align-items:center; gap:12px;">
        <div style="font-size:22px; font-weight:700; color:#58a6ff; font-variant-numeric:tabular-nums;">{ format_elapsed(props.elapsed_secs) }</div>
        <div style="display:flex; gap:6px;">
            <button
                onclick={toggle_cb}
                onmousedown={hold_mouse.clone()}
                ontouchstart={hold_touch.clone()}
                title={toggle_label}
                aria-label={toggle_label}
                style={button_style}
            >{ toggle_glyph }</button>
            <button
                onclick={stop_cb}
                onmousedown={hold_mouse}
                ontouchstart={hold_touch}
                title="Stop"
                aria-label="Stop"
                style={format!("{} color:#f85149;", button_style)}
            >{"■"}</button>
        </div>
    </div>}
}
