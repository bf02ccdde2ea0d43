use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GridError;
use crate::grid::Grid;

/// Reflection axis. The discriminants are the numeric codes accepted by
/// `TryFrom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MirrorAxis {
    /// Rows reversed top to bottom: `(x, y) <- (x, h-1-y)`.
    Horizontal = 0,
    /// Each row reversed: `(x, y) <- (w-1-x, y)`.
    Vertical = 1,
    /// Point reflection through the centre.
    Both = 2,
}

impl TryFrom<i32> for MirrorAxis {
    type Error = GridError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Horizontal),
            1 => Ok(Self::Vertical),
            2 => Ok(Self::Both),
            _ => Err(GridError::invalid(format!(
                "invalid mirror axis {code}: use 0 for horizontal, 1 for vertical, 2 for both"
            ))),
        }
    }
}

impl TryFrom<u8> for MirrorAxis {
    type Error = GridError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::try_from(code as i32)
    }
}

pub fn mirror(grid: &mut Grid<f32>, axis: MirrorAxis) {
    debug!(w = grid.w(), h = grid.h(), ?axis, "mirroring");
    let (w, h) = (grid.w(), grid.h());
    grid.rebuild(|src, x, y| match axis {
        MirrorAxis::Horizontal => src.get(x, h - 1 - y),
        MirrorAxis::Vertical => src.get(w - 1 - x, y),
        MirrorAxis::Both => src.get(w - 1 - x, h - 1 - y),
    });
}
