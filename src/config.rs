use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GridError, Result, check_dims, check_strength};
use crate::grid::Grid;
use crate::mirror::MirrorAxis;
use crate::smooth::{smooth_circle, smooth_rectangle};

pub const DEFAULT_SIZE: usize = 100;
pub const DEFAULT_RADIUS: usize = 4;
pub const DEFAULT_STRENGTH: f32 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingKind {
    #[default]
    Circle,
    Rectangle,
}

/// Smoothing settings. Purely descriptive until handed to
/// [`apply_configured_smoothing`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SmoothingConfig {
    pub radius: usize,
    /// Rectangle window width.
    pub width: usize,
    /// Rectangle window height.
    pub height: usize,
    /// Blend factor in [0, 1] between the old and the smoothed value.
    pub strength: f32,
    pub kind: SmoothingKind,
}

impl SmoothingConfig {
    pub fn circle(radius: usize, strength: f32) -> Self {
        Self {
            radius,
            width: 0,
            height: 0,
            strength,
            kind: SmoothingKind::Circle,
        }
    }

    pub fn rectangle(width: usize, height: usize, strength: f32) -> Self {
        Self {
            radius: 0,
            width,
            height,
            strength,
            kind: SmoothingKind::Rectangle,
        }
    }

    fn validate(&self) -> Result<()> {
        check_strength(self.strength)?;
        match self.kind {
            SmoothingKind::Circle if self.radius == 0 => {
                Err(GridError::invalid("radius must be greater than 0"))
            }
            SmoothingKind::Rectangle if self.width == 0 || self.height == 0 => {
                Err(GridError::invalid(format!(
                    "smoothing window must be non-empty (got {}x{})",
                    self.width, self.height
                )))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

/// Grid dimensions, a zero-filled grid of that size, and smoothing settings.
///
/// Dimensions and smoothing are fixed at construction; only the cells change
/// afterwards, through [`GridConfig::cells_mut`] or [`GridConfig::set`].
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    size: Size,
    grid: Grid<f32>,
    smoothing: SmoothingConfig,
}

impl Default for GridConfig {
    /// 100x100, zeroed, smoothing disabled.
    fn default() -> Self {
        Self {
            size: Size {
                width: DEFAULT_SIZE,
                height: DEFAULT_SIZE,
            },
            grid: Grid::new(DEFAULT_SIZE, DEFAULT_SIZE),
            smoothing: SmoothingConfig::default(),
        }
    }
}

impl GridConfig {
    /// Circle smoothing of radius 4 at half strength; the rectangle window
    /// defaults to the whole grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_dims(width, height)?;
        Ok(Self {
            size: Size { width, height },
            grid: Grid::new(width, height),
            smoothing: SmoothingConfig {
                radius: DEFAULT_RADIUS,
                width,
                height,
                strength: DEFAULT_STRENGTH,
                kind: SmoothingKind::Circle,
            },
        })
    }

    pub fn with_smoothing(
        width: usize,
        height: usize,
        radius: usize,
        strength: f32,
        kind: SmoothingKind,
    ) -> Result<Self> {
        check_dims(width, height)?;
        if radius == 0 {
            return Err(GridError::invalid("radius must be greater than 0"));
        }
        check_strength(strength)?;
        Ok(Self {
            size: Size { width, height },
            grid: Grid::new(width, height),
            smoothing: SmoothingConfig {
                radius,
                width,
                height,
                strength,
                kind,
            },
        })
    }

    /// Build from an explicit smoothing block. Circle smoothing needs a
    /// positive radius, rectangle smoothing a non-empty window.
    pub fn from_parts(size: Size, smoothing: SmoothingConfig) -> Result<Self> {
        check_dims(size.width, size.height)?;
        smoothing.validate()?;
        Ok(Self {
            size,
            grid: Grid::new(size.width, size.height),
            smoothing,
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn grid(&self) -> &Grid<f32> {
        &self.grid
    }

    /// Row-major cells. A slice, so the grid keeps its size.
    pub fn cells_mut(&mut self) -> &mut [f32] {
        self.grid.data_mut()
    }

    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        self.grid.set(x, y, v);
    }

    /// Transforms inside the crate keep the dimensions; callers outside only
    /// get the cells.
    pub(crate) fn grid_mut(&mut self) -> &mut Grid<f32> {
        &mut self.grid
    }

    pub fn smoothing(&self) -> &SmoothingConfig {
        &self.smoothing
    }
}

/// Run the stored smoothing on the stored grid.
///
/// The filter picked by `kind` runs once, then each cell moves `strength` of
/// the way from its old value to the smoothed one. A strength of 0 (the
/// disabled default) leaves the grid unchanged.
pub fn apply_configured_smoothing(config: &mut GridConfig) {
    let s = config.smoothing;
    if s.strength <= 0.0 {
        debug!("smoothing disabled, skipping");
        return;
    }

    let before = (s.strength < 1.0).then(|| config.grid.data().to_vec());
    match s.kind {
        SmoothingKind::Circle => smooth_circle(&mut config.grid, s.radius),
        SmoothingKind::Rectangle => smooth_rectangle(&mut config.grid, s.width, s.height),
    }

    if let Some(before) = before {
        for (cell, old) in config.grid.data_mut().iter_mut().zip(before) {
            *cell = old + (*cell - old) * s.strength;
        }
    }
}

/// Tunables for [`crate::generate`]. Missing fields deserialize to defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    pub width: usize,
    pub height: usize,
    pub smoothing: SmoothingConfig,
    pub smoothing_passes: usize,

    // Peak attraction
    pub peaks: Vec<f32>,
    pub peak_range: f32,
    pub peak_strength: f32,

    pub mirror: Option<MirrorAxis>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            smoothing: SmoothingConfig::circle(2, 1.0),
            smoothing_passes: 3,
            peaks: vec![0.2, 0.8],
            peak_range: 0.15,
            peak_strength: 0.5,
            mirror: None,
        }
    }
}
