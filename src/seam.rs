// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam validation
//!
//! A seam is a list of column indices, one per row, describing an
//! 8-connected path from the top of the grid to the bottom.  A
//! horizontal seam is the same thing on a grid turned on its side: one
//! row index per column.

use crate::error::{Result, SeamDefect, SeamError};
use itertools::Itertools;

/// Check that `seam` has exactly `length` entries, every entry is in
/// `0..range`, and no two consecutive entries are more than one apart.
pub fn validate_seam(seam: &[u32], length: u32, range: u32) -> Result<()> {
    let invalid = |defect| Err(SeamError::InvalidSeam(defect));

    if seam.len() != length as usize {
        return invalid(SeamDefect::Length {
            expected: length,
            found: seam.len(),
        });
    }

    if let Some((row, &value)) = seam.iter().enumerate().find(|&(_, &v)| v >= range) {
        return invalid(SeamDefect::Range { row, value, range });
    }

    if let Some((row, (&from, &to))) = seam
        .iter()
        .tuple_windows()
        .enumerate()
        .find(|&(_, (&a, &b))| a.max(b) - a.min(b) > 1)
    {
        return invalid(SeamDefect::Jump {
            row: row + 1,
            from,
            to,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defect(r: Result<()>) -> SeamDefect {
        match r {
            Err(SeamError::InvalidSeam(d)) => d,
            other => panic!("expected an invalid seam, got {:?}", other),
        }
    }

    #[test]
    fn accepts_connected_seam() {
        assert!(validate_seam(&[0, 1, 2, 2, 1], 5, 3).is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            defect(validate_seam(&[0, 1], 3, 3)),
            SeamDefect::Length {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn rejects_jumps() {
        assert_eq!(
            defect(validate_seam(&[0, 1, 3, 3], 4, 5)),
            SeamDefect::Jump {
                row: 2,
                from: 1,
                to: 3
            }
        );
    }

    #[test]
    fn rejects_entries_past_the_edge() {
        assert_eq!(
            defect(validate_seam(&[1, 2, 3], 3, 3)),
            SeamDefect::Range {
                row: 2,
                value: 3,
                range: 3
            }
        );
    }
}
