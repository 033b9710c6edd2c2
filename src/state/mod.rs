pub mod geometry;
pub mod placement;

pub use geometry::{Footprint, Viewport};
pub use placement::{Placement, PlacementAction};
