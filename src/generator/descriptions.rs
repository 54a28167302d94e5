/*
descriptions.rs

Copyright 2025 Hervé Quatremain

This file is part of Hexalink.

Hexalink is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hexalink is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hexalink. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Difficulty levels and their generation parameters.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Puzzle difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(i32)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Generation parameters for one difficulty level.
///
/// The parameter sets must be satisfiable: requesting more cells than the
/// board bounds can grow, or more connections than the region has free side
/// pairs, makes generation fail with a configuration error.
#[derive(Debug, Copy, Clone)]
pub struct LevelDescription {
    /// Board bounds, as (columns, rows), that the region grows into.
    /// Rows are counted in half-steps, like [`super::grid_index::GridIndex`]
    /// rows.
    pub size: (i32, i32),

    /// Number of random seed positions that start the region growth.
    pub start_hexagons: usize,

    /// Number of cells in the generated level.
    pub total_hexagons: usize,

    /// Number of colored connections in the solved level.
    pub connections: usize,

    /// Number of colors to draw from, between 1 and 6.
    pub colors: u8,

    /// Odds that a generated cell is movable, as (numerator, denominator).
    /// The remaining cells are the anchors that scrambling never touches.
    pub movable_odds: (u32, u32),
}

impl Difficulty {
    /// Return the generation parameters for the difficulty level.
    pub fn description(self) -> LevelDescription {
        match self {
            Difficulty::Easy => LevelDescription {
                size: (5, 5),
                start_hexagons: 3,
                total_hexagons: 10,
                connections: 6,
                colors: 3,
                movable_odds: (17, 20),
            },
            Difficulty::Medium => LevelDescription {
                size: (7, 7),
                start_hexagons: 3,
                total_hexagons: 18,
                connections: 14,
                colors: 4,
                movable_odds: (17, 20),
            },
            Difficulty::Hard => LevelDescription {
                size: (9, 9),
                start_hexagons: 4,
                total_hexagons: 30,
                connections: 24,
                colors: 6,
                movable_odds: (17, 20),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easy_parameters() {
        let description: LevelDescription = Difficulty::Easy.description();
        assert_eq!(description.size, (5, 5));
        assert_eq!(description.start_hexagons, 3);
        assert_eq!(description.total_hexagons, 10);
        assert_eq!(description.connections, 6);
        assert_eq!(description.colors, 3);
        assert_eq!(description.movable_odds, (17, 20));
    }

    #[test]
    fn parameters_fit_their_boards() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let d: LevelDescription = difficulty.description();
            let capacity: usize = (d.size.0 * d.size.1) as usize;
            assert!(d.total_hexagons <= capacity, "{difficulty} cannot fit");
            assert!(d.start_hexagons >= 1);
            assert!(d.colors >= 1 && d.colors <= 6);
            // Every cell has at most six sides, so the connection count must
            // stay below three per cell on average.
            assert!(d.connections * 2 <= d.total_hexagons * 6);
        }
    }

    #[test]
    fn difficulty_from_repr() {
        assert_eq!(Difficulty::from_repr(0), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_repr(2), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_repr(3), None);
    }
}
