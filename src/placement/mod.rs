//! Grid placement: snapping, rotation, preview cursor and removal

pub mod controller;
pub mod footprint;
pub mod highlight;
pub mod removal;
pub mod snap;

pub use controller::{
    PendingPlacement, PlacementController, PlacementEvent, PlacementOrigin, PlacementSettings,
    PlacementState,
};
pub use footprint::{Footprint, QuarterTurns};
pub use highlight::HighlightCursor;
pub use removal::{RemovalOutcome, RemovalTrigger};
pub use snap::{round_half_up, snap_axis, snap_point};
