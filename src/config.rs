//! Widget tuning, optionally overridden from local storage.

use serde::Deserialize;

use crate::state::Footprint;

pub const CONFIG_KEY: &str = "qt_timer_config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Minimum gap to the top/left viewport edges, in px.
    pub margin: f64,
    /// Approximate rendered size used for clamping.
    pub widget_width: f64,
    pub widget_height: f64,
    /// Distance from the top and right edges at mount.
    pub default_inset: f64,
    pub tick_ms: u32,
    /// Clamp against the element's bounding box instead of the footprint above.
    pub measure_rendered_size: bool,
    pub debug_log: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            margin: 8.0,
            widget_width: 180.0,
            widget_height: 80.0,
            default_inset: 16.0,
            tick_ms: 1000,
            measure_rendered_size: false,
            debug_log: false,
        }
    }
}

impl TimerConfig {
    /// Parses a stored override. Anything unreadable yields the defaults.
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str::<Self>(raw)
            .map(Self::sanitized)
            .unwrap_or_default()
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(CONFIG_KEY) {
                    return Self::from_json(&raw);
                }
            }
        }
        Self::default()
    }

    pub fn footprint(&self) -> Footprint {
        Footprint {
            width: self.widget_width,
            height: self.widget_height,
        }
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.margin.is_finite() || self.margin < 0.0 {
            self.margin = defaults.margin;
        }
        if !self.widget_width.is_finite() || self.widget_width <= 0.0 {
            self.widget_width = defaults.widget_width;
        }
        if !self.widget_height.is_finite() || self.widget_height <= 0.0 {
            self.widget_height = defaults.widget_height;
        }
        if !self.default_inset.is_finite() {
            self.default_inset = defaults.default_inset;
        }
        self.tick_ms = self.tick_ms.max(1);
        self
    }
}
