// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors
//!
//! Every failure in this crate is a broken contract on the caller's
//! side: a query off the edge of the grid, or a seam that could not
//! have come from this grid.  None of them are retryable, and none of
//! them leave the grid modified.

use thiserror::Error;

/// What, specifically, was wrong with a seam handed to a removal
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeamDefect {
    /// The seam does not have one entry per row (or column).
    Length { expected: u32, found: usize },
    /// Two consecutive entries are more than one pixel apart.
    Jump { row: usize, from: u32, to: u32 },
    /// An entry points past the edge of the grid.
    Range { row: usize, value: u32, range: u32 },
}

impl std::fmt::Display for SeamDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            SeamDefect::Length { expected, found } => {
                write!(f, "seam has {} entries, expected {}", found, expected)
            }
            SeamDefect::Jump { row, from, to } => write!(
                f,
                "seam jumps from {} to {} between rows {} and {}",
                from,
                to,
                row - 1,
                row
            ),
            SeamDefect::Range { row, value, range } => write!(
                f,
                "seam entry {} at row {} is outside of 0..{}",
                value, row, range
            ),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SeamError {
    #[error("cannot carve an image with no pixels")]
    EmptyImage,

    #[error("pixel buffer holds {found} pixels, expected {expected}")]
    BufferSize { expected: usize, found: usize },

    #[error("pixel ({x}, {y}) is outside of a {width}x{height} grid")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("invalid seam: {0}")]
    InvalidSeam(SeamDefect),

    #[error("cannot remove the last remaining {0}")]
    Exhausted(&'static str),
}

pub type Result<T> = std::result::Result<T, SeamError>;
