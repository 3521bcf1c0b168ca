// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Grid dimensional flipper
//!
//! A proxy for any [`GridView`] that maps the width to the original
//! height, and vice versa, as well as every x to y and vice versa.
//!
//! A horizontal seam of an image is exactly a vertical seam of that
//! image turned on its side, so the seam finder only has to know how
//! to walk top-to-bottom.  Nothing is copied: every lookup is simply
//! redirected with its coordinates swapped.

use crate::view::GridView;
use image::Rgb;

pub struct Flipper<'a, V: GridView + ?Sized> {
    pub view: &'a V,
}

impl<'a, V: GridView + ?Sized> Flipper<'a, V> {
    pub fn new(view: &'a V) -> Self {
        Flipper { view }
    }
}

impl<'a, V: GridView + ?Sized> GridView for Flipper<'a, V> {
    fn dimensions(&self) -> (u32, u32) {
        let (x, y) = self.view.dimensions();
        (y, x)
    }

    fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        self.view.pixel(y, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixelgrid::PixelGrid;

    #[test]
    fn flipper_swaps_axes() {
        let colors = (0..6u8).map(|i| Rgb([i, i, i])).collect();
        let grid = PixelGrid::from_pixels(3, 2, colors).unwrap();
        let flipped = Flipper::new(&grid);
        assert_eq!(flipped.dimensions(), (2, 3));
        for y in 0..3 {
            for x in 0..2 {
                assert_eq!(flipped.pixel(x, y), grid.pixel(y, x));
            }
        }
    }

    #[test]
    fn flipper_checks_bounds_in_its_own_frame() {
        let colors = vec![Rgb([0, 0, 0]); 6];
        let grid = PixelGrid::from_pixels(3, 2, colors).unwrap();
        let flipped = Flipper::new(&grid);
        assert!(flipped.color_at(1, 2).is_ok());
        assert!(flipped.color_at(2, 1).is_err());
    }
}
