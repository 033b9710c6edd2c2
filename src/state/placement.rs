use std::rc::Rc;
use yew::Reducible;

use super::geometry::{Footprint, Position, Viewport, clamp_position};

/// Pointer-to-widget offset captured when a drag starts, so the widget keeps
/// its grip point instead of jumping under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Where the timer sits and whether it is being dragged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Position,
    pub viewport: Viewport,
    pub footprint: Footprint,
    /// Minimum distance kept from the top/left viewport edges.
    pub margin: f64,
    /// Open only between a down event on the widget and the matching up/end/cancel.
    pub drag: Option<DragSession>,
}

impl Placement {
    /// Places the widget `inset` px from the top-right corner, clamped.
    pub fn top_right(viewport: Viewport, footprint: Footprint, margin: f64, inset: f64) -> Self {
        let proposed = Position {
            x: viewport.width - footprint.width - inset,
            y: inset,
        };
        Self {
            position: clamp_position(proposed, viewport, footprint, margin),
            viewport,
            footprint,
            margin,
            drag: None,
        }
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Opens a drag session. A second down while one is open is ignored.
    pub fn begin_drag(&mut self, pointer_x: f64, pointer_y: f64) -> bool {
        if self.drag.is_some() || !pointer_x.is_finite() || !pointer_y.is_finite() {
            return false;
        }
        self.drag = Some(DragSession {
            offset_x: pointer_x - self.position.x,
            offset_y: pointer_y - self.position.y,
        });
        true
    }

    pub fn update_drag(&mut self, pointer_x: f64, pointer_y: f64) -> bool {
        let Some(session) = self.drag else {
            return false;
        };
        // Non-finite coordinates leave that axis where it is.
        let proposed = Position {
            x: if pointer_x.is_finite() { pointer_x - session.offset_x } else { self.position.x },
            y: if pointer_y.is_finite() { pointer_y - session.offset_y } else { self.position.y },
        };
        self.move_to(proposed)
    }

    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Re-clamps against a new viewport. An open session keeps its offset.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        let viewport_changed = self.viewport != viewport;
        self.viewport = viewport;
        self.move_to(self.position) || viewport_changed
    }

    /// Swaps the assumed footprint for a measured one and re-clamps.
    pub fn set_footprint(&mut self, footprint: Footprint) -> bool {
        if footprint.width <= 0.0 || footprint.height <= 0.0 || footprint == self.footprint {
            return false;
        }
        self.footprint = footprint;
        self.move_to(self.position);
        true
    }

    fn move_to(&mut self, proposed: Position) -> bool {
        let next = clamp_position(proposed, self.viewport, self.footprint, self.margin);
        if next == self.position {
            return false;
        }
        self.position = next;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlacementAction {
    BeginDrag { x: f64, y: f64 },
    UpdateDrag { x: f64, y: f64 },
    EndDrag,
    Resize(Viewport),
    Measure(Footprint),
}

impl Reducible for Placement {
    type Action = PlacementAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PlacementAction::*;
        let mut new = *self;
        let changed = match action {
            BeginDrag { x, y } => new.begin_drag(x, y),
            UpdateDrag { x, y } => new.update_drag(x, y),
            EndDrag => new.end_drag(),
            Resize(viewport) => new.resize(viewport),
            Measure(footprint) => new.set_footprint(footprint),
        };
        if !changed {
            return self;
        }
        Rc::new(new)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MARGIN: f64 = 8.0;

    fn desk() -> Placement {
        Placement::top_right(
            Viewport { width: 1024.0, height: 768.0 },
            Footprint::default(),
            MARGIN,
            16.0,
        )
    }

    fn in_bounds(p: &Placement) -> bool {
        let pos = p.position;
        pos.x >= p.margin
            && pos.x <= p.viewport.width - p.footprint.width
            && pos.y >= p.margin
            && pos.y <= p.viewport.height - p.footprint.height
    }

    #[test]
    fn starts_top_right() {
        let p = desk();
        assert_eq!(p.position, Position { x: 1024.0 - 180.0 - 16.0, y: 16.0 });
        assert!(!p.dragging());
    }

    #[test]
    fn drag_keeps_grip_offset() {
        let mut p = desk();
        let start = p.position;
        assert!(p.begin_drag(start.x + 20.0, start.y + 10.0));
        p.update_drag(start.x - 80.0, start.y + 110.0);
        assert_eq!(p.position, Position { x: start.x - 100.0, y: start.y + 100.0 });
    }

    #[test]
    fn drag_is_clamped() {
        let mut p = desk();
        p.begin_drag(p.position.x, p.position.y);
        p.update_drag(-400.0, -400.0);
        assert_eq!(p.position, Position { x: MARGIN, y: MARGIN });
        p.update_drag(9000.0, 9000.0);
        assert_eq!(p.position, Position { x: 844.0, y: 688.0 });
    }

    #[test]
    fn moves_without_session_are_ignored() {
        let mut p = desk();
        let before = p.position;
        assert!(!p.update_drag(100.0, 100.0));
        assert!(!p.end_drag());
        assert_eq!(p.position, before);
    }

    #[test]
    fn ended_drag_stays_put() {
        let mut p = desk();
        p.begin_drag(p.position.x, p.position.y);
        p.update_drag(300.0, 300.0);
        assert!(p.end_drag());
        let parked = p.position;
        for (x, y) in [(0.0, 0.0), (500.0, 20.0), (2000.0, 2000.0)] {
            p.update_drag(x, y);
        }
        assert_eq!(p.position, parked);
        assert!(!p.dragging());
    }

    #[test]
    fn second_down_keeps_first_session() {
        let mut p = desk();
        p.begin_drag(p.position.x + 5.0, p.position.y + 5.0);
        let session = p.drag;
        assert!(!p.begin_drag(0.0, 0.0));
        assert_eq!(p.drag, session);
    }

    #[test]
    fn non_finite_axis_holds_still() {
        let mut p = desk();
        p.begin_drag(p.position.x, p.position.y);
        p.update_drag(f64::NAN, 200.0);
        assert_eq!(p.position.x, 1024.0 - 180.0 - 16.0);
        assert_eq!(p.position.y, 200.0);
    }

    #[test]
    fn shrinking_viewport_pulls_widget_back() {
        let mut p = desk();
        p.begin_drag(p.position.x, p.position.y);
        p.update_drag(9000.0, 9000.0);
        p.end_drag();
        assert!(p.resize(Viewport { width: 500.0, height: 400.0 }));
        assert_eq!(p.position, Position { x: 320.0, y: 320.0 });
        assert!(in_bounds(&p));
    }

    #[test]
    fn growing_viewport_leaves_widget_alone() {
        let mut p = desk();
        let before = p.position;
        p.resize(Viewport { width: 1920.0, height: 1080.0 });
        assert_eq!(p.position, before);
    }

    #[test]
    fn resize_mid_drag_keeps_session() {
        let mut p = desk();
        p.begin_drag(p.position.x + 10.0, p.position.y + 10.0);
        p.resize(Viewport { width: 400.0, height: 300.0 });
        assert!(p.dragging());
        p.update_drag(110.0, 110.0);
        assert_eq!(p.position, Position { x: 100.0, y: 100.0 });
    }

    #[test]
    fn measured_footprint_reclamps() {
        let mut p = desk();
        p.begin_drag(p.position.x, p.position.y);
        p.update_drag(9000.0, 9000.0);
        assert!(p.set_footprint(Footprint { width: 240.0, height: 96.0 }));
        assert_eq!(p.position, Position { x: 784.0, y: 672.0 });
        assert!(!p.set_footprint(Footprint { width: 0.0, height: 96.0 }));
    }

    #[test]
    fn reducer_returns_same_rc_when_nothing_changes() {
        let p = Rc::new(desk());
        let after = p.clone().reduce(PlacementAction::UpdateDrag { x: 1.0, y: 1.0 });
        assert!(Rc::ptr_eq(&p, &after));
        let after = after.reduce(PlacementAction::BeginDrag { x: 900.0, y: 20.0 });
        assert!(after.dragging());
    }

    #[derive(Clone, Copy, Debug)]
    enum Op {
        Down(f64, f64),
        Move(f64, f64),
        Up,
        Resize(f64, f64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-3000.0..5000.0f64, -3000.0..5000.0f64).prop_map(|(x, y)| Op::Down(x, y)),
            (-3000.0..5000.0f64, -3000.0..5000.0f64).prop_map(|(x, y)| Op::Move(x, y)),
            Just(Op::Up),
            (200.0..4000.0f64, 100.0..3000.0f64).prop_map(|(w, h)| Op::Resize(w, h)),
        ]
    }

    proptest! {
        #[test]
        fn position_stays_in_viewport(
            w in 200.0..4000.0f64,
            h in 100.0..3000.0f64,
            ops in prop::collection::vec(op_strategy(), 1..64),
        ) {
            let mut p = Placement::top_right(Viewport { width: w, height: h }, Footprint::default(), MARGIN, 16.0);
            prop_assert!(in_bounds(&p));
            for op in ops {
                match op {
                    Op::Down(x, y) => { p.begin_drag(x, y); }
                    Op::Move(x, y) => { p.update_drag(x, y); }
                    Op::Up => { p.end_drag(); }
                    Op::Resize(w, h) => { p.resize(Viewport { width: w, height: h }); }
                }
                prop_assert!(in_bounds(&p), "out of bounds after {:?}: {:?}", op, p);
            }
        }

        #[test]
        fn moves_after_release_are_inert(
            grab in (-1000.0..3000.0f64, -1000.0..3000.0f64),
            moves in prop::collection::vec((-3000.0..5000.0f64, -3000.0..5000.0f64), 0..32),
        ) {
            let mut p = Placement::top_right(Viewport { width: 1280.0, height: 720.0 }, Footprint::default(), MARGIN, 16.0);
            p.begin_drag(grab.0, grab.1);
            p.update_drag(grab.0 - 50.0, grab.1 + 50.0);
            p.end_drag();
            let parked = p.position;
            for (x, y) in moves {
                p.update_drag(x, y);
                prop_assert_eq!(p.position, parked);
            }
        }
    }
}
