//! The read-only face of a pixel grid.
//!
//! Both the energy function and the seam finder only ever need to ask
//! "how big are you?" and "what color is this pixel?".  Anything that
//! can answer those two questions can be carved, including a
//! [`Flipper`](crate::flipper::Flipper) that answers them sideways.

use crate::error::{Result, SeamError};
use image::Rgb;

// Sync so the energy map can be filled from several threads at once.
pub trait GridView: Sync {
    /// (width, height), in this view's frame.
    fn dimensions(&self) -> (u32, u32);

    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    /// The color at column `x`, row `y`.  Callers guarantee the
    /// coordinates are inside `dimensions()`; implementations are free
    /// to panic otherwise.
    fn pixel(&self, x: u32, y: u32) -> Rgb<u8>;

    /// The color at column `x`, row `y`, or `OutOfRange`.
    fn color_at(&self, x: u32, y: u32) -> Result<Rgb<u8>> {
        check_bounds(self, x, y)?;
        Ok(self.pixel(x, y))
    }
}

pub(crate) fn check_bounds<V: GridView + ?Sized>(view: &V, x: u32, y: u32) -> Result<()> {
    let (width, height) = view.dimensions();
    if x >= width || y >= height {
        return Err(SeamError::OutOfRange {
            x,
            y,
            width,
            height,
        });
    }
    Ok(())
}
