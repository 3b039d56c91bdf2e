//! Grid snapping.
//!
//! An odd span centers on a grid line; an even span centers half a unit off
//! it so the footprint's edges fall on grid lines.

use glam::{Vec2, Vec3};

use super::footprint::Footprint;

/// Round to nearest, ties toward positive infinity.
#[inline]
pub fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Snap one axis for a footprint covering `span` grid units along it.
pub fn snap_axis(value: f32, unit: f32, span: u32) -> f32 {
    let snapped = round_half_up(value / unit) * unit;
    if span % 2 == 0 { snapped - unit / 2.0 } else { snapped }
}

/// Snap a world point on the XZ plane. Returns `(x, z)`.
pub fn snap_point(point: Vec3, unit: f32, footprint: Footprint) -> Vec2 {
    Vec2::new(
        snap_axis(point.x, unit, footprint.width),
        snap_axis(point.z, unit, footprint.height),
    )
}
