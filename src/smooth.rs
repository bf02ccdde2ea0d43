use tracing::debug;

use crate::grid::{Grid, clip_xy};

/// Mean over the filled disk of `radius` around `(x, y)`.
///
/// Offsets `(i, j)` run over `-radius..=radius` on both axes and are kept when
/// `i*i + j*j <= radius*radius`. Cells outside the grid are skipped, not
/// counted as zero. An empty window averages to 0.
pub fn average_circle(grid: &Grid<f32>, x: i64, y: i64, radius: usize) -> f32 {
    let r = radius as i64;
    let r_sq = r * r;
    let mut sum = 0.0f64;
    let mut count = 0u32;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r_sq {
                continue;
            }
            if let Some((cx, cy)) = clip_xy(x + dx, y + dy, grid.w(), grid.h()) {
                sum += grid.get(cx, cy) as f64;
                count += 1;
            }
        }
    }
    if count > 0 { (sum / count as f64) as f32 } else { 0.0 }
}

/// Half-open window `[c - size/2, c + size/2 + size%2)` along one axis.
/// Odd sizes are centred; even sizes have one cell fewer on the high side.
#[inline]
fn window(c: i64, size: usize) -> (i64, i64) {
    let half = (size / 2) as i64;
    let rem = (size % 2) as i64;
    (c - half, c + half + rem)
}

/// Mean over the `width x height` window centred on `(x, y)`, clipped to the
/// grid. An empty window (zero size or entirely outside) averages to 0.
pub fn average_rectangle(grid: &Grid<f32>, x: i64, y: i64, width: usize, height: usize) -> f32 {
    let (x0, x1) = window(x, width);
    let (y0, y1) = window(y, height);
    let mut sum = 0.0f64;
    let mut count = 0u32;
    for wy in y0..y1 {
        for wx in x0..x1 {
            if let Some((cx, cy)) = clip_xy(wx, wy, grid.w(), grid.h()) {
                sum += grid.get(cx, cy) as f64;
                count += 1;
            }
        }
    }
    if count > 0 { (sum / count as f64) as f32 } else { 0.0 }
}

/// Replace every cell with its circular average over the pre-pass grid.
pub fn smooth_circle(grid: &mut Grid<f32>, radius: usize) {
    debug!(w = grid.w(), h = grid.h(), radius, "circle smoothing");
    grid.rebuild(|src, x, y| average_circle(src, x as i64, y as i64, radius));
}

/// Replace every cell with its rectangular average over the pre-pass grid.
pub fn smooth_rectangle(grid: &mut Grid<f32>, width: usize, height: usize) {
    debug!(w = grid.w(), h = grid.h(), width, height, "rectangle smoothing");
    grid.rebuild(|src, x, y| average_rectangle(src, x as i64, y as i64, width, height));
}
