//! Noise-based terrain height per grid cell

use serde::{Deserialize, Serialize};

use super::noise::fbm;

/// Octaves used for terrain heights (fewer than the fbm default for broader hills)
pub const TERRAIN_OCTAVES: u32 = 3;

/// Parameters controlling terrain height generation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightParams {
    pub scale: f64,             // Grid-to-noise scale (smaller = smoother)
    pub height_multiplier: u32, // Maximum stacked height
}

impl Default for HeightParams {
    fn default() -> Self {
        Self {
            scale: 0.15,
            height_multiplier: 4,
        }
    }
}

/// Integer block height at a grid coordinate.
///
/// Pure: the same inputs always produce the same height. The result lies in
/// `0..=height_multiplier` and reaches the top only when the noise is exactly 1.
pub fn terrain_height(grid_x: f64, grid_z: f64, params: HeightParams) -> u32 {
    let noise_value = fbm(
        grid_x * params.scale,
        grid_z * params.scale,
        TERRAIN_OCTAVES,
        2.0,
        0.5,
    );
    // [-1, 1] -> [0, 1]
    let normalized = ((noise_value + 1.0) / 2.0).clamp(0.0, 1.0);
    (normalized * params.height_multiplier as f64).floor() as u32
}

/// Terrain height generator carrying its parameters
#[derive(Clone, Debug, Default)]
pub struct TerrainHeightGenerator {
    params: HeightParams,
}

impl TerrainHeightGenerator {
    /// Create a new generator with the given parameters
    pub fn new(params: HeightParams) -> Self {
        Self { params }
    }

    /// Get height parameters
    pub fn params(&self) -> &HeightParams {
        &self.params
    }

    /// Height of the cell at integer grid coordinates
    pub fn height_at(&self, i: i32, j: i32) -> u32 {
        terrain_height(i as f64, j as f64, self.params)
    }

    /// Min/max height over a square of cells starting at the origin
    pub fn height_bounds(&self, size: i32) -> (u32, u32) {
        if size <= 0 {
            return (0, 0);
        }
        let mut min_h = u32::MAX;
        let mut max_h = 0;
        for i in 0..size {
            for j in 0..size {
                let h = self.height_at(i, j);
                min_h = min_h.min(h);
                max_h = max_h.max(h);
            }
        }
        (min_h, max_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_params_default() {
        let params = HeightParams::default();
        assert_eq!(params.scale, 0.15);
        assert_eq!(params.height_multiplier, 4);
    }

    #[test]
    fn test_terrain_height_deterministic() {
        let params = HeightParams::default();
        assert_eq!(terrain_height(0.0, 0.0, params), terrain_height(0.0, 0.0, params));
        for i in -10..10 {
            for j in -10..10 {
                let a = terrain_height(i as f64, j as f64, params);
                let b = terrain_height(i as f64, j as f64, params);
                assert_eq!(a, b, "height should be consistent at ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_origin_is_mid_height() {
        // Noise is 0 on lattice points, so the origin normalizes to exactly 0.5
        assert_eq!(terrain_height(0.0, 0.0, HeightParams::default()), 2);
        let tall = HeightParams { scale: 0.2, height_multiplier: 5 };
        assert_eq!(terrain_height(0.0, 0.0, tall), 2);
    }

    #[test]
    fn test_terrain_height_range() {
        let params = HeightParams::default();
        for i in -40..40 {
            for j in -40..40 {
                let h = terrain_height(i as f64, j as f64, params);
                assert!(h <= params.height_multiplier, "h={} at ({}, {})", h, i, j);
            }
        }
    }

    #[test]
    fn test_zero_multiplier_is_flat() {
        let flat = HeightParams { scale: 0.15, height_multiplier: 0 };
        for i in 0..10 {
            assert_eq!(terrain_height(i as f64, (i * 3) as f64, flat), 0);
        }
    }

    #[test]
    fn test_terrain_varies() {
        let generator = TerrainHeightGenerator::new(HeightParams { scale: 0.2, height_multiplier: 5 });
        let (min_h, max_h) = generator.height_bounds(30);
        assert!(min_h < max_h, "terrain should not be flat over a 30x30 area");
    }

    #[test]
    fn test_generator_matches_free_function() {
        let generator = TerrainHeightGenerator::default();
        assert_eq!(generator.height_at(3, 7), terrain_height(3.0, 7.0, HeightParams::default()));
        assert_eq!(generator.params(), &HeightParams::default());
    }

    #[test]
    fn test_height_bounds_empty() {
        let generator = TerrainHeightGenerator::default();
        assert_eq!(generator.height_bounds(0), (0, 0));
    }
}
