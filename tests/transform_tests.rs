use approx::assert_relative_eq;
use gridgen::{
    Grid, MirrorAxis, allocate, average_circle, average_rectangle, mirror, pull_to_peaks,
    seed_noise, smooth_circle, smooth_rectangle,
};

fn checkerboard(w: usize, h: usize) -> Grid<f32> {
    let mut g = allocate(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            g.set(x, y, ((x + y) % 2) as f32);
        }
    }
    g
}

fn numbered(w: usize, h: usize) -> Grid<f32> {
    let data = (0..w * h).map(|i| i as f32 * 0.1).collect();
    Grid::from_vec(w, h, data).unwrap()
}

// ============================================================================
// Allocation & noise
// ============================================================================

#[test]
fn test_allocate_non_square() {
    let g = allocate(7, 3).unwrap();
    assert_eq!(g.w(), 7);
    assert_eq!(g.h(), 3);
    assert_eq!(g.data().len(), 21);
    assert!(g.data().iter().all(|&v| v == 0.0));
}

#[test]
fn test_seed_noise_binary() {
    let mut g = allocate(20, 11).unwrap();
    seed_noise(&mut g, 2024);
    assert!(g.data().iter().all(|&v| v == 0.0 || v == 1.0));
}

// ============================================================================
// Averaging
// ============================================================================

#[test]
fn test_average_circle_uniform() {
    let mut g = allocate(9, 6).unwrap();
    g.fill(0.3);
    for radius in 0..5 {
        for (x, y) in [(0, 0), (4, 3), (8, 5), (2, 5)] {
            assert_relative_eq!(average_circle(&g, x, y, radius), 0.3, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_average_circle_drops_with_dark_centre() {
    let mut g = allocate(5, 5).unwrap();
    g.fill(1.0);
    assert_eq!(average_circle(&g, 2, 2, 1), 1.0);
    g.set(2, 2, 0.0);
    let avg = average_circle(&g, 2, 2, 1);
    assert_relative_eq!(avg, 0.8);
}

#[test]
fn test_average_rectangle_uniform() {
    let mut g = allocate(6, 4).unwrap();
    g.fill(0.6);
    for (w, h) in [(1, 1), (2, 3), (4, 4), (9, 9)] {
        assert_relative_eq!(average_rectangle(&g, 3, 2, w, h), 0.6, epsilon = 1e-6);
    }
}

#[test]
fn test_empty_windows_are_zero() {
    let mut g = allocate(4, 4).unwrap();
    g.fill(1.0);
    assert_eq!(average_circle(&g, 100, 100, 2), 0.0);
    assert_eq!(average_circle(&g, -1, 2, 0), 0.0);
    assert_eq!(average_rectangle(&g, -10, 0, 3, 3), 0.0);
    assert_eq!(average_rectangle(&g, 2, 2, 0, 0), 0.0);
}

#[test]
fn test_odd_rectangle_is_centred() {
    // 1-row ramp 0, 1, 2, 3, 4, 5, 6; width 5 at x=3 covers 1..=5.
    let data = (0..7).map(|i| i as f32).collect();
    let g = Grid::from_vec(7, 1, data).unwrap();
    assert_eq!(average_rectangle(&g, 3, 0, 5, 1), 3.0);
    // Width 4 at x=3 covers 1..=4.
    assert_eq!(average_rectangle(&g, 3, 0, 4, 1), 2.5);
}

// ============================================================================
// Smoothing
// ============================================================================

#[test]
fn test_smooth_circle_checkerboard_in_unit_range() {
    let mut g = checkerboard(5, 5);
    smooth_circle(&mut g, 1);
    assert!(g.data().iter().all(|&v| (0.0..=1.0).contains(&v)));
    // Interior cell (x+y even) = 0 surrounded by four 1s.
    assert_relative_eq!(g.get(2, 2), 0.8);
}

#[test]
fn test_smooth_rectangle_checkerboard_in_unit_range() {
    let mut g = checkerboard(6, 4);
    smooth_rectangle(&mut g, 3, 3);
    assert!(g.data().iter().all(|&v| (0.0..=1.0).contains(&v)));
    // Interior 3x3 window on a checkerboard holds 4 or 5 ones.
    assert_relative_eq!(g.get(2, 2), 4.0 / 9.0);
    assert_relative_eq!(g.get(1, 2), 5.0 / 9.0);
}

// ============================================================================
// Peak attraction
// ============================================================================

#[test]
fn test_pull_to_peaks_uniform() {
    let mut g = allocate(5, 5).unwrap();
    g.fill(0.4);
    pull_to_peaks(&mut g, &[0.5], 0.2, 0.5).unwrap();
    for &v in g.data() {
        assert_relative_eq!(v, 0.45, epsilon = 1e-6);
    }
}

#[test]
fn test_pull_to_peaks_invalid_strength() {
    let mut g = allocate(5, 5).unwrap();
    g.fill(0.4);
    let before = g.clone();
    assert!(pull_to_peaks(&mut g, &[0.5], 0.2, 1.5).is_err());
    assert_eq!(g, before);
}

// ============================================================================
// Mirroring
// ============================================================================

#[test]
fn test_mirror_3x3() {
    let original = numbered(3, 3);

    let mut g = original.clone();
    mirror(&mut g, MirrorAxis::Horizontal);
    assert_eq!(g.row(0), original.row(2));
    assert_eq!(g.row(1), original.row(1));

    let mut g = original.clone();
    mirror(&mut g, MirrorAxis::Vertical);
    for y in 0..3 {
        assert_eq!(g.get(0, y), original.get(2, y));
    }
}

#[test]
fn test_mirror_invalid_axis() {
    assert!(MirrorAxis::try_from(3i32).is_err());
}

#[test]
fn test_mirror_twice_is_identity() {
    let original = numbered(5, 3);
    for axis in [MirrorAxis::Horizontal, MirrorAxis::Vertical, MirrorAxis::Both] {
        let mut g = original.clone();
        mirror(&mut g, axis);
        assert_ne!(g, original);
        mirror(&mut g, axis);
        assert_eq!(g, original);
    }
}

#[test]
fn test_mirror_non_square_keeps_shape() {
    let original = numbered(4, 2);
    let mut g = original.clone();
    mirror(&mut g, MirrorAxis::Both);
    assert_eq!((g.w(), g.h()), (4, 2));
    assert_eq!(g.get(0, 0), original.get(3, 1));
    assert_eq!(g.get(3, 1), original.get(0, 0));
}
