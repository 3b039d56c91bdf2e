//! Scene configuration

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::environment::{Season, WeatherKind};
use crate::terrain::{BlockLayout, HeightParams};

/// Color palette (0xRRGGBB)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub dirt: u32,
    pub grass: u32,
    pub highlight: u32,
    pub highlight_placing: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dirt: 0x964B00,
            grass: 0x3E5C3A,
            highlight: 0xFFFFFF,
            highlight_placing: 0x66FF00,
        }
    }
}

/// Orthographic camera setup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub ortho_size: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub viewport: (f32, f32),
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            ortho_size: 20.0,
            position: Vec3::new(20.0, 20.0, 20.0),
            target: Vec3::ZERO,
            viewport: (1280.0, 720.0),
        }
    }
}

/// Initial environment state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub season: Season,
    pub weather: WeatherKind,
    /// Starting hour (0-24)
    pub start_hour: f32,
    /// Real seconds per in-game day; 0 disables the automatic day/night cycle
    pub day_length_seconds: f32,
    pub sky_radius: f32,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            season: Season::Spring,
            weather: WeatherKind::Sunny,
            start_hour: 10.0,
            day_length_seconds: 0.0,
            sky_radius: 200.0,
        }
    }
}

/// Configuration for a farm scene
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// World distance between adjacent snap positions
    pub grid_unit: f32,
    /// Terrain expansions run at startup
    pub initial_levels: u32,
    /// Height noise used when the terrain grows
    pub terrain_height: HeightParams,
    /// Terrain block dimensions
    pub blocks: BlockLayout,
    /// Lift of the placement cursor above the ground surface
    pub highlight_lift: f32,
    pub palette: Palette,
    pub camera: CameraConfig,
    pub environment: EnvironmentConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid_unit: 2.0,
            initial_levels: 3,
            terrain_height: HeightParams {
                scale: 0.2,
                height_multiplier: 5,
            },
            blocks: BlockLayout::default(),
            highlight_lift: 0.05,
            palette: Palette::default(),
            camera: CameraConfig::default(),
            environment: EnvironmentConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Reject values that would break snapping or block stacking
    pub fn validate(&self) -> Result<()> {
        if !(self.grid_unit > 0.0) {
            return Err(Error::Config(format!("grid_unit must be positive, got {}", self.grid_unit)));
        }
        if !(self.blocks.block_size > 0.0) {
            return Err(Error::Config(format!(
                "block_size must be positive, got {}",
                self.blocks.block_size
            )));
        }
        if !(self.camera.ortho_size > 0.0) {
            return Err(Error::Config("camera ortho_size must be positive".to_string()));
        }
        Ok(())
    }
}
