// Viewport geometry for the floating timer.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    /// Reads the window's inner size, falling back to 800x600.
    pub fn current() -> Self {
        let fallback = Self::default();
        let Some(window) = web_sys::window() else {
            return fallback;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(fallback.width);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(fallback.height);
        Self { width, height }
    }
}

/// Size the widget is assumed to occupy when clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

impl Default for Footprint {
    fn default() -> Self {
        Self {
            width: 180.0,
            height: 80.0,
        }
    }
}

/// `max(margin, min(proposed, limit))`. When `limit < margin` this yields
/// `margin` and the widget overhangs the far edge.
pub fn clamp_axis(proposed: f64, limit: f64, margin: f64) -> f64 {
    margin.max(proposed.min(limit))
}

pub fn clamp_position(proposed: Position, viewport: Viewport, footprint: Footprint, margin: f64) -> Position {
    Position {
        x: clamp_axis(proposed.x, viewport.width - footprint.width, margin),
        y: clamp_axis(proposed.y, viewport.height - footprint.height, margin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARGIN: f64 = 8.0;

    #[test]
    fn inside_is_untouched() {
        let vp = Viewport { width: 1024.0, height: 768.0 };
        let p = clamp_position(Position { x: 300.0, y: 200.0 }, vp, Footprint::default(), MARGIN);
        assert_eq!(p, Position { x: 300.0, y: 200.0 });
    }

    #[test]
    fn pins_to_margin_and_far_edge() {
        let vp = Viewport { width: 1024.0, height: 768.0 };
        let fp = Footprint::default();
        let low = clamp_position(Position { x: -50.0, y: 2.0 }, vp, fp, MARGIN);
        assert_eq!(low, Position { x: MARGIN, y: MARGIN });
        let high = clamp_position(Position { x: 5000.0, y: 5000.0 }, vp, fp, MARGIN);
        assert_eq!(high, Position { x: 1024.0 - 180.0, y: 768.0 - 80.0 });
    }

    #[test]
    fn narrow_viewport_falls_back_to_margin() {
        // Limit is negative here; the margin wins and the widget overhangs.
        let vp = Viewport { width: 120.0, height: 50.0 };
        let p = clamp_position(Position { x: 60.0, y: 30.0 }, vp, Footprint::default(), MARGIN);
        assert_eq!(p, Position { x: MARGIN, y: MARGIN });
        assert!(p.x > vp.width - 180.0);
    }
}
