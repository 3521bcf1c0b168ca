use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field, stored row-major.  It holds
/// whatever the current stage of processing needs per pixel: a plain
/// `f64` for the energy map, or a distance + parent pair for the seam
/// search.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice<P: Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Copy> Lattice<P> {
    /// A lattice with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: P) -> Self {
        Lattice {
            width,
            height,
            cells: vec![value; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Every cell, row-major.
    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [P] {
        &mut self.cells
    }

    /// One row, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.index_of(0, y);
        &self.cells[start..start + self.width as usize]
    }
}

impl<P: Copy + Default> Lattice<P> {
    pub fn new(width: u32, height: u32) -> Self {
        Lattice::filled(width, height, P::default())
    }
}

impl<P: Copy> Index<(u32, u32)> for Lattice<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.index_of(x, y);
        &self.cells[index]
    }
}

impl<P: Copy> IndexMut<(u32, u32)> for Lattice<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.index_of(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressing_is_row_major() {
        let mut lattice: Lattice<u32> = Lattice::new(4, 3);
        lattice[(1, 2)] = 7;
        assert_eq!(lattice.index_of(1, 2), 9);
        assert_eq!(lattice.as_slice()[9], 7);
        assert_eq!(lattice.row(2), &[0, 7, 0, 0]);
    }
}
