// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Uses the dual-gradient energy function: the energy of a pixel is
//! the magnitude of the color gradient across its left/right pair and
//! its up/down pair.  The pixel's own color never enters into it.
//! Pixels on the border have no pair on one side, and are assigned a
//! fixed, high energy instead, so that seams avoid the edges unless
//! nothing else is available.

use crate::cq;
use crate::error::Result;
use crate::lattice::Lattice;
use crate::view::{check_bounds, GridView};
use image::{GrayImage, ImageBuffer, Luma, Rgb};
#[cfg(not(feature = "threaded"))]
use itertools::iproduct;

/// The energy of every pixel on the edge of the grid.
pub const BORDER_ENERGY: f64 = 1000.0;

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up:
//
//        |Δ|² = (Δr)²+(Δg)²+(Δb)²
fn gradient(p1: Rgb<u8>, p2: Rgb<u8>) -> f64 {
    p1.0.iter()
        .zip(p2.0.iter())
        .map(|(&c1, &c2)| {
            let d = i32::from(c1) - i32::from(c2);
            d * d
        })
        .sum::<i32>()
        .into()
}

// e(x,y) = sqrt(|Δx|² + |Δy|²), for callers that have already done
// the bounds check.
pub(crate) fn energy_at<V: GridView + ?Sized>(view: &V, x: u32, y: u32) -> f64 {
    let (width, height) = view.dimensions();
    cq!(
        x == 0 || y == 0 || x == width - 1 || y == height - 1,
        BORDER_ENERGY,
        (gradient(view.pixel(x + 1, y), view.pixel(x - 1, y))
            + gradient(view.pixel(x, y + 1), view.pixel(x, y - 1)))
        .sqrt()
    )
}

/// The energy of the pixel at column `x`, row `y`.
pub fn energy<V: GridView + ?Sized>(view: &V, x: u32, y: u32) -> Result<f64> {
    check_bounds(view, x, y)?;
    Ok(energy_at(view, x, y))
}

/// Compute the energy of every pixel in the view.
pub fn energy_map<V: GridView + ?Sized>(view: &V) -> Lattice<f64> {
    let (width, height) = view.dimensions();
    let mut emap = Lattice::new(width, height);
    fill_energy(view, &mut emap);
    emap
}

#[cfg(not(feature = "threaded"))]
fn fill_energy<V: GridView + ?Sized>(view: &V, emap: &mut Lattice<f64>) {
    let (width, height) = (emap.width(), emap.height());
    iproduct!(0..height, 0..width)
        .zip(emap.as_mut_slice().iter_mut())
        .for_each(|((y, x), cell)| *cell = energy_at(view, x, y));
}

// Every pixel's energy depends only on the (unchanging) grid, so the
// map can be broken into bands of whole rows with chunks_mut and each
// band filled by its own thread without anything unsafe.
#[cfg(feature = "threaded")]
fn fill_energy<V: GridView + ?Sized>(view: &V, emap: &mut Lattice<f64>) {
    let width = emap.width() as usize;
    let height = emap.height() as usize;
    let bands = num_cpus::get().max(1);
    let rows_per_band = (height + bands - 1) / bands;

    let result = crossbeam::thread::scope(|s| {
        for (band, chunk) in emap
            .as_mut_slice()
            .chunks_mut(rows_per_band * width)
            .enumerate()
        {
            s.spawn(move |_| {
                let top = band * rows_per_band;
                for (i, cell) in chunk.iter_mut().enumerate() {
                    let (x, y) = (i % width, top + i / width);
                    *cell = energy_at(view, x as u32, y as u32);
                }
            });
        }
    });

    if let Err(panic) = result {
        std::panic::resume_unwind(panic);
    }
}

/// Render an energy map as a greyscale image, scaled so that the
/// highest energy in the map is white.
pub fn energy_to_image(energy: &Lattice<f64>) -> GrayImage {
    let factor = energy.as_slice().iter().cloned().fold(0.0, f64::max);
    ImageBuffer::from_fn(energy.width(), energy.height(), |x, y| {
        let e = energy[(x, y)];
        Luma([cq!(factor > 0.0, (e / factor * 255.0).round() as u8, 0)])
    })
}
