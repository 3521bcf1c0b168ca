// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the seam with the least energy
//!
//! The pixels of the grid form a DAG: every pixel has an edge to the
//! (up to) three pixels touching it in the row below.  Row-major order
//! is already a topological order of that DAG, so the shortest path
//! from the top row to the bottom row falls out of a single relaxation
//! pass, with no priority queue required.
//!
//! A pixel's energy is the cost of *leaving* it.  The top row starts at
//! `BORDER_ENERGY`, so the cost of a seam is `BORDER_ENERGY` plus the
//! energy of every pixel on it except the one in the bottom row.

use crate::cq;
use crate::energy::{energy_map, BORDER_ENERGY};
use crate::flipper::Flipper;
use crate::lattice::Lattice;
use crate::view::GridView;
use itertools::iproduct;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// carvers.
pub trait SeamFinder {
    /// Request a left-to-right seam: one row index per column.
    fn find_horizontal_seam(&self) -> Vec<u32>;

    /// Request a top-to-bottom seam: one column index per row.
    fn find_vertical_seam(&self) -> Vec<u32>;
}

/// A seam, along with the accumulated cost of reaching its last pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct SeamPath {
    pub seam: Vec<u32>,
    pub cost: f64,
}

// The best known way to reach a pixel: the accumulated energy, and the
// column of the pixel in the row above it came from.  Until a pixel is
// reached, its distance is infinite.
#[derive(Debug, Copy, Clone)]
struct Reach {
    dist: f64,
    parent: u32,
}

impl Default for Reach {
    fn default() -> Self {
        Reach {
            dist: f64::INFINITY,
            parent: 0,
        }
    }
}

/// Find the cheapest top-to-bottom seam of the view.
pub fn vertical_seam<V: GridView + ?Sized>(view: &V) -> SeamPath {
    let (width, height) = view.dimensions();

    // Only one way down a one-pixel-wide image.  Every pixel on it is a
    // border pixel, so the cost is known without looking.
    if width == 1 {
        return SeamPath {
            seam: vec![0; height as usize],
            cost: BORDER_ENERGY * f64::from(height),
        };
    }

    let energy = energy_map(view);
    let mut reach: Lattice<Reach> = Lattice::new(width, height);
    for x in 0..width {
        reach[(x, 0)].dist = BORDER_ENERGY;
    }

    // Push each pixel's cost down to its three children: down-left,
    // down-right, then straight down.  A child only changes hands on a
    // strictly better offer, so ties go to whoever got there first.
    let max_x = width - 1;
    for (y, x) in iproduct!(0..height - 1, 0..width) {
        let leaving = reach[(x, y)].dist + energy[(x, y)];
        let mut relax = |child: u32| {
            let cell = &mut reach[(child, y + 1)];
            if leaving < cell.dist {
                *cell = Reach {
                    dist: leaving,
                    parent: x,
                };
            }
        };
        if x != 0 {
            relax(x - 1);
        }
        if x != max_x {
            relax(x + 1);
        }
        relax(x);
    }

    // Leftmost of the cheapest pixels on the bottom row.
    let bottom = height - 1;
    let (mut seam_col, cost) = (0..width).fold((0, f64::INFINITY), |(best, dist), x| {
        let d = reach[(x, bottom)].dist;
        cq!(d < dist, (x, d), (best, dist))
    });

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    let seam = (0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = reach[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect();

    SeamPath { seam, cost }
}

/// Find the cheapest left-to-right seam of the view, by asking for the
/// cheapest top-to-bottom seam of the view turned on its side.
pub fn horizontal_seam<V: GridView + ?Sized>(view: &V) -> SeamPath {
    vertical_seam(&Flipper::new(view))
}
