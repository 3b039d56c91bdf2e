//! Terrain grid and its expansion state machine.
//!
//! The grid grows as a square anchored at cell `(0, 0)`. Each expansion covers
//! `level x level` cells and generates only the cells not seen before, then
//! bumps the level.

use std::collections::{HashMap, HashSet};

use super::generator::{HeightParams, TerrainHeightGenerator};

/// Integer grid coordinate of a terrain cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub i: i32,
    pub j: i32,
}

impl GridCoord {
    pub fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }
}

/// A generated terrain cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
    pub coord: GridCoord,
    /// Number of stacked vertical units above the base block
    pub height: u32,
    /// Whether a terrain block exists at this cell
    pub occupied: bool,
}

/// Grows the terrain one level at a time without regenerating existing cells.
pub struct TerrainGrid {
    generator: TerrainHeightGenerator,
    level: u32,
    seen: HashSet<GridCoord>,
    cells: HashMap<GridCoord, GridCell>,
    /// Generation order, for callers that replay the terrain
    order: Vec<GridCoord>,
}

impl TerrainGrid {
    /// Create an empty grid at level 1
    pub fn new(params: HeightParams) -> Self {
        Self {
            generator: TerrainHeightGenerator::new(params),
            level: 1,
            seen: HashSet::new(),
            cells: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Run `levels` expansions and return every generated cell.
    pub fn seed(&mut self, levels: u32) -> Vec<GridCell> {
        let mut out = Vec::new();
        for _ in 0..levels {
            out.extend(self.expand());
        }
        out
    }

    /// Generate all unseen cells inside the current level's square, then advance the level.
    ///
    /// Returns only the newly generated cells.
    pub fn expand(&mut self) -> Vec<GridCell> {
        let size = self.level as i32;
        let mut generated = Vec::new();

        for i in 0..size {
            for j in 0..size {
                let coord = GridCoord::new(i, j);
                if !self.seen.insert(coord) {
                    continue;
                }

                let cell = GridCell {
                    coord,
                    height: self.generator.height_at(i, j),
                    occupied: true,
                };
                self.cells.insert(coord, cell);
                self.order.push(coord);
                generated.push(cell);
            }
        }

        self.level += 1;
        log::info!(
            "Terrain expanded to level {} ({} new cells, {} total)",
            self.level,
            generated.len(),
            self.cells.len()
        );
        generated
    }

    /// Level the next expansion will cover
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Side length, in cells, of the square generated so far
    pub fn extent(&self) -> u32 {
        self.level - 1
    }

    /// Get a generated cell
    pub fn cell(&self, coord: GridCoord) -> Option<&GridCell> {
        self.cells.get(&coord)
    }

    /// Whether a cell has been generated
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.seen.contains(&coord)
    }

    /// All generated cells in generation order
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> + '_ {
        self.order.iter().filter_map(|c| self.cells.get(c))
    }

    /// Number of generated cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Height generator used for new cells
    pub fn generator(&self) -> &TerrainHeightGenerator {
        &self.generator
    }
}
