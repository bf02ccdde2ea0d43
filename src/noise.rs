use tracing::debug;

use crate::error::Result;
use crate::grid::Grid;
use crate::rng::{hash2, seed_u32};

const SALT_NOISE: u64 = 0x0B17_5EED_C0FF_EE01;

/// A `width x height` grid with every cell set to 0.
pub fn allocate(width: usize, height: usize) -> Result<Grid<f32>> {
    Grid::try_new(width, height)
}

/// Binary noise: each cell independently becomes 0.0 or 1.0 with equal
/// probability. The value is a hash of the cell coordinates and `seed`, so
/// the same seed always yields the same field.
pub fn seed_noise(grid: &mut Grid<f32>, seed: u64) {
    debug!(w = grid.w(), h = grid.h(), seed, "seeding binary noise");
    let s = seed_u32(seed, SALT_NOISE);
    let w = grid.w();
    for (i, cell) in grid.data_mut().iter_mut().enumerate() {
        let x = (i % w) as u32;
        let y = (i / w) as u32;
        *cell = (hash2(x, y, s) & 1) as f32;
    }
}
