//! Footprints and quarter-turn rotation

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec2, Vec3};

/// Rectangle of grid units an object covers: `width` along world X,
/// `height` along world Z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    /// Single grid cell
    pub const UNIT: Footprint = Footprint { width: 1, height: 1 };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Footprint after a quarter turn (dimensions swap)
    pub const fn rotated(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Footprint after `turns` quarter turns
    pub fn rotated_by(self, turns: QuarterTurns) -> Self {
        if turns.is_odd() { self.rotated() } else { self }
    }

    /// Size in world units on the XZ plane
    pub fn world_extent(self, grid_unit: f32) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * grid_unit
    }
}

/// Yaw in 90 degree steps, kept modulo 4.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct QuarterTurns(u8);

impl QuarterTurns {
    pub const ZERO: QuarterTurns = QuarterTurns(0);

    pub fn new(count: u32) -> Self {
        Self((count % 4) as u8)
    }

    /// One more quarter turn counterclockwise (seen from above)
    pub fn next(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    pub fn count(self) -> u8 {
        self.0
    }

    pub fn is_odd(self) -> bool {
        self.0 % 2 == 1
    }

    /// Yaw angle in radians, in `[0, 2π)`
    pub fn radians(self) -> f32 {
        self.0 as f32 * FRAC_PI_2
    }

    /// Rotation about world up
    pub fn to_quat(self) -> Quat {
        Quat::from_rotation_y(self.radians())
    }

    /// Nearest quarter turn to the yaw of `rotation`.
    ///
    /// Yaw is read from where the rotation sends local +X, so a tilt about X
    /// (crops laid flat) does not change the result.
    pub fn from_rotation(rotation: Quat) -> Self {
        let v = rotation * Vec3::X;
        let angle = (-v.z).atan2(v.x);
        let steps = (angle / FRAC_PI_2).round() as i32;
        Self(steps.rem_euclid(4) as u8)
    }
}
