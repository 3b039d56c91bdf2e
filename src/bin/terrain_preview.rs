//! Terrain preview - prints the generated height map as text.
//!
//! Usage: cargo run --bin terrain_preview -- [OPTIONS]
//!
//! Options:
//!   --size <N>        Grid side length in cells (default: 16)
//!   --scale <SCALE>   Noise sample scale (default: 0.2)
//!   --height <H>      Height multiplier (default: 5)

use homestead::terrain::{HeightParams, TerrainGrid};

fn main() {
    homestead::core::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let size = parse_arg::<u32>(&args, "--size").unwrap_or(16).max(1);
    let scale = parse_arg::<f64>(&args, "--scale").unwrap_or(0.2);
    let height_multiplier = parse_arg::<u32>(&args, "--height").unwrap_or(5);

    let mut grid = TerrainGrid::new(HeightParams { scale, height_multiplier });
    grid.seed(size);

    println!("=== Terrain Preview ===");
    println!("Size:   {} x {} cells", size, size);
    println!("Scale:  {}, Height: {}", scale, height_multiplier);
    println!();

    let (min, max) = grid.generator().height_bounds(size as i32);
    for j in 0..size as i32 {
        let row: String = (0..size as i32)
            .map(|i| {
                let height = grid
                    .cell(homestead::terrain::GridCoord::new(i, j))
                    .map_or(0, |c| c.height);
                height_glyph(height, height_multiplier)
            })
            .collect();
        println!("{}", row);
    }

    println!();
    println!("Heights: min {}, max {} ({} cells)", min, max, grid.len());
}

/// Shade a height with an ASCII ramp
fn height_glyph(height: u32, max: u32) -> char {
    const RAMP: &[u8] = b" .:-=+*#%@";
    if max == 0 {
        return RAMP[0] as char;
    }
    let idx = (height as usize * (RAMP.len() - 1)) / max as usize;
    RAMP[idx.min(RAMP.len() - 1)] as char
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    let pos = args.iter().position(|a| a == flag)?;
    match args.get(pos + 1).map(|v| v.parse::<T>()) {
        Some(Ok(value)) => Some(value),
        _ => {
            log::warn!("Ignoring invalid value for {}", flag);
            None
        }
    }
}
