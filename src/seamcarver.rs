// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarver - the facade
//!
//! Owns the grid being carved, and offers the four seam operations in
//! both directions.  Horizontal seams are found by searching a flipped
//! view of the grid for a vertical one, so one search serves both
//! axes and no pixels are moved to make that happen.

use crate::energy;
use crate::error::Result;
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::{horizontal_seam, vertical_seam, SeamFinder, SeamPath};
use crate::view::GridView;
use image::{GenericImageView, Pixel, Primitive, RgbImage};
use log::{debug, trace};

/// A struct for holding the image to be carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    grid: PixelGrid,
}

impl SeamCarver {
    /// Creates a new SeamCarver with a copy of an image to be carved.
    pub fn new<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S>,
        S: Primitive,
    {
        Ok(SeamCarver::from_grid(PixelGrid::from_image(image)?))
    }

    pub fn from_grid(grid: PixelGrid) -> Self {
        SeamCarver { grid }
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Energy of the pixel at column `x`, row `y`.
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        energy::energy(&self.grid, x, y)
    }

    /// The cheapest top-to-bottom seam, with its cost.
    pub fn vertical_seam_path(&self) -> SeamPath {
        let path = vertical_seam(&self.grid);
        trace!("vertical seam {:?} costs {}", path.seam, path.cost);
        path
    }

    /// The cheapest left-to-right seam, with its cost.
    pub fn horizontal_seam_path(&self) -> SeamPath {
        let path = horizontal_seam(&self.grid);
        trace!("horizontal seam {:?} costs {}", path.seam, path.cost);
        path
    }

    /// Remove a top-to-bottom seam; the image loses one column.
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.grid.remove_column_seam(seam)?;
        debug!("removed vertical seam, now {}x{}", self.width(), self.height());
        Ok(())
    }

    /// Remove a left-to-right seam; the image loses one row.
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        self.grid.remove_row_seam(seam)?;
        debug!(
            "removed horizontal seam, now {}x{}",
            self.width(),
            self.height()
        );
        Ok(())
    }

    /// The image as it stands after carving.
    pub fn current_image(&self) -> RgbImage {
        self.grid.to_image()
    }

    pub fn into_image(self) -> RgbImage {
        self.grid.into_image()
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&self) -> Vec<u32> {
        self.horizontal_seam_path().seam
    }

    fn find_vertical_seam(&self) -> Vec<u32> {
        self.vertical_seam_path().seam
    }
}
