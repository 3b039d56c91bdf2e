//! Block stacking for generated terrain cells.
//!
//! Each cell becomes a column of dirt blocks topped by a grass block. Columns
//! extend toward -X and -Z from the origin, one block size per cell.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::grid::{GridCell, GridCoord};
use crate::math::Aabb;

/// Block dimensions and vertical offsets
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockLayout {
    /// Horizontal size of a terrain block
    pub block_size: f32,
    /// Height of each dirt block
    pub dirt_height: f32,
    /// Height of the grass cap
    pub grass_height: f32,
    /// Top of the grass surface on an unraised cell
    pub grass_top: f32,
    /// Vertical rise per unit of cell height
    pub step: f32,
}

impl Default for BlockLayout {
    fn default() -> Self {
        Self {
            block_size: 10.0,
            dirt_height: 8.0,
            grass_height: 2.0,
            grass_top: 6.0,
            step: 2.0,
        }
    }
}

/// Material of a terrain block
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Dirt,
    Grass,
}

impl BlockKind {
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Dirt => "Dirt",
            BlockKind::Grass => "Grass",
        }
    }
}

/// A single box of terrain ready to be added to the scene
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainBlock {
    pub kind: BlockKind,
    pub cell: GridCoord,
    pub center: Vec3,
    pub size: Vec3,
}

impl TerrainBlock {
    /// Local bounds centered on the block origin
    pub fn local_bounds(&self) -> Aabb {
        Aabb::from_center_half_extent(Vec3::ZERO, self.size * 0.5)
    }
}

impl BlockLayout {
    /// World-space center of a cell's column on the XZ plane
    pub fn cell_center(&self, coord: GridCoord) -> (f32, f32) {
        (
            -(coord.i as f32) * self.block_size,
            -(coord.j as f32) * self.block_size,
        )
    }

    /// Elevation of the grass surface for a cell of the given height
    pub fn surface_y(&self, height: u32) -> f32 {
        height as f32 * self.step + self.grass_top
    }

    /// Raise above the flat grass top for a cell of the given height
    pub fn elevation(&self, height: u32) -> f32 {
        height as f32 * self.step
    }

    /// Dirt column (`height + 1` blocks) plus the grass cap for a cell
    pub fn blocks_for_cell(&self, cell: &GridCell) -> Vec<TerrainBlock> {
        let (x, z) = self.cell_center(cell.coord);
        let mut blocks = Vec::with_capacity(cell.height as usize + 2);

        for k in 0..=cell.height {
            blocks.push(TerrainBlock {
                kind: BlockKind::Dirt,
                cell: cell.coord,
                center: Vec3::new(x, k as f32 * self.step - self.dirt_height * 0.5, z),
                size: Vec3::new(self.block_size, self.dirt_height, self.block_size),
            });
        }

        blocks.push(TerrainBlock {
            kind: BlockKind::Grass,
            cell: cell.coord,
            center: Vec3::new(x, self.surface_y(cell.height) - self.grass_height * 0.5, z),
            size: Vec3::new(self.block_size, self.grass_height, self.block_size),
        });

        blocks
    }

    /// Grid overlay covering `extent x extent` cells
    pub fn overlay(&self, extent: u32, grid_unit: f32) -> GridOverlay {
        let size = extent as f32 * self.block_size;
        let divisions = if grid_unit > 0.0 { (size / grid_unit) as u32 } else { 0 };
        let offset = -size / 2.0 + self.block_size / 2.0;
        GridOverlay {
            size,
            divisions,
            center: Vec3::new(offset, self.grass_top + 4.0, offset),
        }
    }
}

/// Line grid drawn over the terrain
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridOverlay {
    pub size: f32,
    pub divisions: u32,
    pub center: Vec3,
}
