use crate::error::{GridError, Result, check_dims};

/// Row-major flat grid. No per-cell objects, f32 friendly.
///
/// `x` is the column in `0..w`, `y` the row in `0..h`; cell `(x, y)` lives at
/// `data[y * w + x]`. Every transform in this crate uses this convention.
/// The buffer always holds exactly `w * h` cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    data: Vec<T>,
    w: usize,
    h: usize,
}

impl<T: Copy + Default> Grid<T> {
    /// Zero-filled (`T::default()`) grid. Callers validate dimensions;
    /// see [`Grid::try_new`].
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            data: vec![T::default(); w * h],
            w,
            h,
        }
    }

    pub fn try_new(w: usize, h: usize) -> Result<Self> {
        check_dims(w, h)?;
        Ok(Self::new(w, h))
    }

    /// Wrap an existing row-major buffer.
    pub fn from_vec(w: usize, h: usize, data: Vec<T>) -> Result<Self> {
        check_dims(w, h)?;
        if data.len() != w * h {
            return Err(GridError::invalid(format!(
                "buffer holds {} cells, expected {}x{}",
                data.len(),
                w,
                h
            )));
        }
        Ok(Self { data, w, h })
    }

    #[inline]
    pub fn w(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn h(&self) -> usize {
        self.h
    }

    /// All cells, row-major.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// All cells, row-major. A slice, so the length cannot change.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h);
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    pub fn fill(&mut self, v: T) {
        self.data.fill(v);
    }

    /// One row as a slice.
    pub fn row(&self, y: usize) -> &[T] {
        &self.data[y * self.w..(y + 1) * self.w]
    }

    /// Compute every cell of a fresh buffer from the current contents, then
    /// swap it in. `f` only ever sees the pre-pass grid.
    pub fn rebuild<F>(&mut self, f: F)
    where
        F: Fn(&Grid<T>, usize, usize) -> T,
    {
        let mut next = Vec::with_capacity(self.data.len());
        for y in 0..self.h {
            for x in 0..self.w {
                next.push(f(self, x, y));
            }
        }
        self.data = next;
    }
}

/// Clip a signed coordinate to the grid. Returns None outside the bounds;
/// there is no wrapping on either axis.
#[inline]
pub fn clip_xy(x: i64, y: i64, w: usize, h: usize) -> Option<(usize, usize)> {
    if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
        return None;
    }
    Some((x as usize, y as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zero_filled() {
        let g = Grid::<f32>::new(3, 2);
        assert_eq!(g.data().len(), 6);
        assert!(g.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn try_new_rejects_empty() {
        assert!(Grid::<f32>::try_new(0, 5).is_err());
        assert!(Grid::<f32>::try_new(5, 0).is_err());
    }

    #[test]
    fn indexing_is_row_major() {
        let mut g = Grid::<f32>::new(4, 3);
        g.set(3, 1, 7.0);
        assert_eq!(g.data()[4 + 3], 7.0);
        assert_eq!(g.row(1), &[0.0, 0.0, 0.0, 7.0]);
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(Grid::from_vec(2, 2, vec![0.0f32; 3]).is_err());
        let g = Grid::from_vec(2, 2, vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(g.get(1, 1), 4.0);
    }

    #[test]
    fn rebuild_reads_only_the_old_buffer() {
        // A shift that would smear the first value if it read its own writes.
        let mut g = Grid::from_vec(4, 1, vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();
        g.rebuild(|src, x, y| if x == 0 { src.get(0, y) } else { src.get(x - 1, y) });
        assert_eq!(g.data(), vec![1.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn data_mut_edits_cells_in_place() {
        let mut g = Grid::<f32>::new(3, 2);
        g.data_mut()[5] = 2.0;
        assert_eq!(g.get(2, 1), 2.0);
        assert_eq!((g.w(), g.h(), g.data().len()), (3, 2, 6));
    }

    #[test]
    fn clip_rejects_outside() {
        assert_eq!(clip_xy(-1, 0, 3, 3), None);
        assert_eq!(clip_xy(0, 3, 3, 3), None);
        assert_eq!(clip_xy(2, 2, 3, 3), Some((2, 2)));
    }
}
