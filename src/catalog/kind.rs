//! Placeable kind definition

use serde::{Deserialize, Serialize};

use crate::placement::footprint::Footprint;

/// Grass top elevation on unraised terrain; default resting height for props.
pub const DEFAULT_REST_HEIGHT: f32 = 6.0;

/// Broad grouping used by catalog panels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindCategory {
    Animal,
    Building,
    #[default]
    Decoration,
    Crop,
    Nature,
}

/// A catalog entry: one type of object the user can place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceableKind {
    /// Stable identifier (e.g. "Cow", "Barn")
    pub name: String,
    #[serde(default)]
    pub category: KindCategory,
    /// Span along world X, in grid units
    pub footprint_width: u32,
    /// Span along world Z, in grid units
    pub footprint_height: u32,
    /// Elevation of the object origin when resting on unraised terrain
    #[serde(default = "default_rest_height")]
    pub rest_height: f32,
    /// Protected kinds can never be deleted by the removal tool
    #[serde(default)]
    pub protected: bool,
    /// Yaw applied when a fresh instance is spawned
    #[serde(default)]
    pub spawn_yaw_degrees: f32,
    /// Model is authored standing up and must be tipped flat (crop beds)
    #[serde(default)]
    pub lay_flat: bool,
    /// Uniform model scale
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Height of the pick box used for hit-testing
    #[serde(default = "default_bounds_height")]
    pub bounds_height: f32,
}

fn default_rest_height() -> f32 {
    DEFAULT_REST_HEIGHT
}

fn default_scale() -> f32 {
    1.0
}

fn default_bounds_height() -> f32 {
    2.0
}

impl PlaceableKind {
    /// New kind with default settings
    pub fn new(name: impl Into<String>, category: KindCategory, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            category,
            footprint_width: width,
            footprint_height: height,
            rest_height: DEFAULT_REST_HEIGHT,
            protected: false,
            spawn_yaw_degrees: 0.0,
            lay_flat: false,
            scale: 1.0,
            bounds_height: default_bounds_height(),
        }
    }

    pub fn with_rest_height(mut self, rest_height: f32) -> Self {
        self.rest_height = rest_height;
        self
    }

    pub fn with_spawn_yaw(mut self, degrees: f32) -> Self {
        self.spawn_yaw_degrees = degrees;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_bounds_height(mut self, height: f32) -> Self {
        self.bounds_height = height;
        self
    }

    pub fn laid_flat(mut self) -> Self {
        self.lay_flat = true;
        self
    }

    pub fn protected(mut self) -> Self {
        self.protected = true;
        self
    }

    /// Unrotated footprint
    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.footprint_width, self.footprint_height)
    }
}
