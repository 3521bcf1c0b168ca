// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid being carved
//!
//! A dense, row-major block of RGB colors that shrinks by one column
//! (or one row) per seam removal.  The grid remembers whether its
//! storage has been transposed relative to the caller's view of it;
//! every public coordinate and dimension is expressed in the caller's
//! (logical) frame regardless.

use crate::error::{Result, SeamError};
use crate::seam::validate_seam;
use crate::view::GridView;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive, Rgb, RgbImage};
use itertools::iproduct;
use num_traits::NumCast;

// Same trick as everywhere else: a two-state flag with a name is
// much easier to read than a bool and a `!`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Upright,
    Transposed,
}

impl Orientation {
    pub fn turn(self) -> Self {
        match self {
            Orientation::Upright => Orientation::Transposed,
            Orientation::Transposed => Orientation::Upright,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    // Stored dimensions; these describe `colors`, not the caller's
    // view of the grid.
    width: u32,
    height: u32,
    colors: Vec<Rgb<u8>>,
    orientation: Orientation,
}

// Scale any subpixel type into 8 bits against its nominal maximum, so
// that 16-bit and floating point images carve the same way as 8-bit
// ones.
fn to_channel<S: Primitive>(c: S) -> u8 {
    let value: f64 = NumCast::from(c).unwrap_or(0.0);
    let max: f64 = NumCast::from(S::DEFAULT_MAX_VALUE).unwrap_or(255.0);
    (value / max * 255.0).round().max(0.0).min(255.0) as u8
}

impl PixelGrid {
    /// Build a grid from a row-major list of colors.
    pub fn from_pixels(width: u32, height: u32, colors: Vec<Rgb<u8>>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SeamError::EmptyImage);
        }
        let expected = width as usize * height as usize;
        if colors.len() != expected {
            return Err(SeamError::BufferSize {
                expected,
                found: colors.len(),
            });
        }
        Ok(PixelGrid {
            width,
            height,
            colors,
            orientation: Orientation::Upright,
        })
    }

    /// Copy any `image` crate image into a new grid.  Non-RGB images
    /// are converted to RGB, and wide subpixels are scaled into 8 bits.
    pub fn from_image<I, P, S>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = S>,
        S: Primitive,
    {
        let (width, height) = image.dimensions();
        let colors = iproduct!(0..height, 0..width)
            .map(|(y, x)| {
                let Rgb([r, g, b]) = image.get_pixel(x, y).to_rgb();
                Rgb([to_channel(r), to_channel(g), to_channel(b)])
            })
            .collect();
        PixelGrid::from_pixels(width, height, colors)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    fn stored_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Swap the stored axes, so stored `(x, y)` becomes `(y, x)`, and
    /// flip the orientation flag.  The logical view of the grid does
    /// not change; only the memory layout does.
    pub fn transpose(&mut self) {
        let colors = iproduct!(0..self.width, 0..self.height)
            .map(|(x, y)| self.colors[self.stored_index(x, y)])
            .collect();
        self.colors = colors;
        std::mem::swap(&mut self.width, &mut self.height);
        self.orientation = self.orientation.turn();
    }

    /// Remove one pixel from every row, at the column named by the
    /// seam, shifting everything to its right one place left.
    pub fn remove_column_seam(&mut self, seam: &[u32]) -> Result<()> {
        validate_seam(seam, self.height(), self.width())?;
        if self.width() == 1 {
            return Err(SeamError::Exhausted("column"));
        }
        match self.orientation {
            Orientation::Upright => self.drop_stored_column_seam(seam),
            Orientation::Transposed => self.drop_stored_row_seam(seam),
        }
        Ok(())
    }

    /// Remove one pixel from every column, at the row named by the
    /// seam, shifting everything below it up one place.
    pub fn remove_row_seam(&mut self, seam: &[u32]) -> Result<()> {
        validate_seam(seam, self.width(), self.height())?;
        if self.height() == 1 {
            return Err(SeamError::Exhausted("row"));
        }
        match self.orientation {
            Orientation::Upright => self.drop_stored_row_seam(seam),
            Orientation::Transposed => self.drop_stored_column_seam(seam),
        }
        Ok(())
    }

    // `retain` visits the pixels in storage order, so the running
    // index tells us which row and column we're looking at.
    fn drop_stored_column_seam(&mut self, seam: &[u32]) {
        let width = self.width as usize;
        let mut index = 0;
        self.colors.retain(|_| {
            let (x, y) = (index % width, index / width);
            index += 1;
            x != seam[y] as usize
        });
        self.width -= 1;
    }

    fn drop_stored_row_seam(&mut self, seam: &[u32]) {
        let width = self.width as usize;
        for (x, &cut) in seam.iter().enumerate() {
            for y in (cut as usize)..(self.height as usize - 1) {
                self.colors[y * width + x] = self.colors[(y + 1) * width + x];
            }
        }
        self.colors.truncate(self.colors.len() - width);
        self.height -= 1;
    }

    /// Materialize the grid, in the caller's orientation, as an RGB
    /// image buffer.
    pub fn to_image(&self) -> RgbImage {
        let (width, height) = self.dimensions();
        ImageBuffer::from_fn(width, height, |x, y| self.pixel(x, y))
    }

    /// As `to_image`, but first restores the storage to the caller's
    /// orientation so the copy-out walks memory in order.
    pub fn into_image(mut self) -> RgbImage {
        if self.orientation == Orientation::Transposed {
            self.transpose();
        }
        self.to_image()
    }
}

impl GridView for PixelGrid {
    fn dimensions(&self) -> (u32, u32) {
        match self.orientation {
            Orientation::Upright => (self.width, self.height),
            Orientation::Transposed => (self.height, self.width),
        }
    }

    fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        match self.orientation {
            Orientation::Upright => self.colors[self.stored_index(x, y)],
            Orientation::Transposed => self.colors[self.stored_index(y, x)],
        }
    }
}
