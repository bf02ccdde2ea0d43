use std::fmt;

use crate::config::GridConfig;
use crate::grid::Grid;

// Palette for normalised [0, 1] fields, water below WATER_LEVEL.
const WATER_DEEP: [u8; 4] = [18, 36, 70, 255];
const WATER_SHALLOW: [u8; 4] = [38, 78, 120, 255];
const BEACH_SAND: [u8; 4] = [210, 200, 160, 255];
const LAND_LOW: [u8; 4] = [70, 130, 62, 255];
const LAND_HIGH: [u8; 4] = [190, 170, 120, 255];
const SNOW: [u8; 4] = [245, 248, 250, 255];

pub const WATER_LEVEL: f32 = 0.35;

/// Threshold bucket for one cell of the ASCII dump.
#[inline]
fn glyph(v: f32) -> char {
    if v > 1.0 {
        '#'
    } else if v > 0.75 {
        '*'
    } else if v > 0.5 {
        '+'
    } else if v > 0.25 {
        '-'
    } else {
        ' '
    }
}

/// Row by row, each cell as a glyph plus one space, newline after each row.
pub fn render_ascii(grid: &Grid<f32>) -> String {
    let mut out = String::with_capacity(grid.h() * (grid.w() * 2 + 1));
    for y in 0..grid.h() {
        for &v in grid.row(y) {
            out.push(glyph(v));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Diagnostic dump of a config's grid.
pub fn render(config: &GridConfig) -> String {
    config.to_string()
}

impl fmt::Display for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid Properties:")?;
        f.write_str(&render_ascii(self.grid()))
    }
}

#[inline]
fn lerp_color(a: [u8; 4], b: [u8; 4], t: f32) -> [u8; 4] {
    let t = t.clamp(0.0, 1.0);
    [
        (a[0] as f32 + (b[0] as f32 - a[0] as f32) * t).round() as u8,
        (a[1] as f32 + (b[1] as f32 - a[1] as f32) * t).round() as u8,
        (a[2] as f32 + (b[2] as f32 - a[2] as f32) * t).round() as u8,
        255,
    ]
}

/// Grayscale RGBA, stretched from the grid's min to its max.
pub fn render_heightmap(grid: &Grid<f32>) -> Vec<u8> {
    let min_v = grid.data().iter().cloned().fold(f32::INFINITY, f32::min);
    let max_v = grid.data().iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let range = (max_v - min_v).max(1e-6);
    let mut rgba = vec![0u8; grid.w() * grid.h() * 4];
    for (i, &v) in grid.data().iter().enumerate() {
        let t = (v - min_v) / range;
        let g = (t * 255.0).clamp(0.0, 255.0) as u8;
        rgba[i * 4..i * 4 + 4].copy_from_slice(&[g, g, g, 255]);
    }
    rgba
}

/// Terrain-coloured RGBA for a field in [0, 1]. Values outside are clamped
/// for display only.
pub fn render_terrain(grid: &Grid<f32>) -> Vec<u8> {
    let mut rgba = vec![0u8; grid.w() * grid.h() * 4];
    for (i, &v) in grid.data().iter().enumerate() {
        let v = v.clamp(0.0, 1.0);
        let color = if v < WATER_LEVEL {
            lerp_color(WATER_DEEP, WATER_SHALLOW, v / WATER_LEVEL)
        } else if v < WATER_LEVEL + 0.03 {
            BEACH_SAND
        } else if v < 0.8 {
            let t = (v - WATER_LEVEL - 0.03) / (0.8 - WATER_LEVEL - 0.03);
            lerp_color(LAND_LOW, LAND_HIGH, t)
        } else {
            lerp_color(LAND_HIGH, SNOW, (v - 0.8) / 0.2)
        };
        rgba[i * 4..i * 4 + 4].copy_from_slice(&color);
    }
    rgba
}
