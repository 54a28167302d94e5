/*
direction.rs

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

//! The six directions of a hexagonal cell.

use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

/// Direction of one side of a hexagonal cell.
///
/// The variants follow the clockwise order of the sides, starting from the
/// top. The discriminants index into a cell's side array, and the population
/// pass draws random directions with [`Direction::from_repr`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum Direction {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

impl Direction {
    /// All the directions, in side-array order.
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Return the direction of the mirrored side on the neighboring cell.
    pub fn opposite(self) -> Self {
        Self::from_repr((self as u8 + 3) % 6).unwrap_or(Direction::North)
    }

    /// Index of the direction in a cell's side array.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_discriminants() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), i);
            assert_eq!(Direction::from_repr(i as u8), Some(*direction));
        }
        assert_eq!(Direction::from_repr(6), None);
    }

    #[test]
    fn opposite_pairs() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
        assert_eq!(Direction::SouthEast.opposite(), Direction::NorthWest);
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }
}
