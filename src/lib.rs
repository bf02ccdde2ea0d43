//! 2-D scalar field generation and transforms for procedural heightmaps.
//!
//! Single-threaded: a grid has one exclusive owner at a time.

pub mod config;
pub mod error;
pub mod grid;
pub mod mirror;
pub mod noise;
pub mod peaks;
pub mod render;
pub mod rng;
pub mod smooth;

use std::time::Instant;

use tracing::info;

pub use config::{
    GridConfig, Params, Size, SmoothingConfig, SmoothingKind, apply_configured_smoothing,
};
pub use error::{GridError, Result};
pub use grid::Grid;
pub use mirror::{MirrorAxis, mirror};
pub use noise::{allocate, seed_noise};
pub use peaks::pull_to_peaks;
pub use smooth::{average_circle, average_rectangle, smooth_circle, smooth_rectangle};

/// Wall-clock duration of one `generate` stage.
#[derive(Clone, Debug)]
pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Seeded noise, configured smoothing passes, peak attraction and an optional
/// mirror, in that order. All parameters are validated before any work.
pub fn generate(seed: u64, params: &Params) -> Result<(GridConfig, Vec<Timing>)> {
    let mut config = GridConfig::from_parts(
        Size {
            width: params.width,
            height: params.height,
        },
        params.smoothing,
    )?;
    if !params.peaks.is_empty() {
        error::check_strength(params.peak_strength)?;
    }

    info!(
        w = params.width,
        h = params.height,
        seed,
        passes = params.smoothing_passes,
        "generating grid"
    );

    let mut timings = Vec::new();
    let total_start = Instant::now();

    // 1. Binary noise
    let t = Instant::now();
    seed_noise(config.grid_mut(), seed);
    timings.push(Timing {
        name: "noise",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 2. Smoothing
    let t = Instant::now();
    for _ in 0..params.smoothing_passes {
        apply_configured_smoothing(&mut config);
    }
    timings.push(Timing {
        name: "smoothing",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    // 3. Peak attraction
    if !params.peaks.is_empty() {
        let t = Instant::now();
        pull_to_peaks(
            config.grid_mut(),
            &params.peaks,
            params.peak_range,
            params.peak_strength,
        )?;
        timings.push(Timing {
            name: "peaks",
            ms: t.elapsed().as_secs_f64() * 1000.0,
        });
    }

    // 4. Mirror
    if let Some(axis) = params.mirror {
        let t = Instant::now();
        mirror(config.grid_mut(), axis);
        timings.push(Timing {
            name: "mirror",
            ms: t.elapsed().as_secs_f64() * 1000.0,
        });
    }

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });

    Ok((config, timings))
}
