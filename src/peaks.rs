use tracing::debug;

use crate::error::{Result, check_strength};
use crate::grid::Grid;

/// Pull cell values toward target levels.
///
/// For each cell and each point, in the order given: when the cell is within
/// `range` of the point it moves `strength` of the way there. Later points see
/// the value left by earlier ones. Results are not clamped.
///
/// Fails before touching the grid if `strength` is outside `[0, 1]`.
pub fn pull_to_peaks(
    grid: &mut Grid<f32>,
    points: &[f32],
    range: f32,
    strength: f32,
) -> Result<()> {
    check_strength(strength)?;
    debug!(points = points.len(), range, strength, "pulling to peaks");

    for cell in grid.data_mut().iter_mut() {
        for &p in points {
            if (*cell - p).abs() <= range {
                *cell += (p - *cell) * strength;
            }
        }
    }
    Ok(())
}
