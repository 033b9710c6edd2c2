// Formatting and console helpers shared by the widget.

/// Renders elapsed seconds as `HH:MM:SS`. Hours are not wrapped.
pub fn format_elapsed(secs: u64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

pub fn clog(enabled: bool, msg: &str) {
    if !enabled {
        return;
    }
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}
