/*
grid_index.rs

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

//! Cell addressing on the hexagonal offset grid.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Position of a cell on the hexagonal grid.
///
/// Rows are counted in half-steps: moving to a diagonal neighbor changes the
/// row by one, and moving straight north or south changes it by two. Whether
/// a diagonal move also changes the column depends on the row parity.
///
/// The components are signed because region growth can step below zero
/// before the level is normalized to a zero-based bounding box. The derived
/// ordering, by row and then by column, gives the deterministic iteration
/// order that the random draws of the generator rely on.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridIndex {
    pub row: i32,
    pub col: i32,
}

impl GridIndex {
    /// Create a grid index.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return the index of the neighboring cell in the given direction.
    ///
    /// The mapping is symmetric: if B is the neighbor of A in direction `d`,
    /// then A is the neighbor of B in `d.opposite()`.
    pub fn neighbor(&self, direction: Direction) -> Self {
        // 1 on odd rows, 0 on even rows, for negative rows too.
        let parity: i32 = self.row.rem_euclid(2);
        match direction {
            Direction::North => Self::new(self.row + 2, self.col),
            Direction::South => Self::new(self.row - 2, self.col),
            Direction::NorthEast => Self::new(self.row + 1, self.col + parity),
            Direction::SouthEast => Self::new(self.row - 1, self.col + parity),
            Direction::SouthWest => Self::new(self.row - 1, self.col - (1 - parity)),
            Direction::NorthWest => Self::new(self.row + 1, self.col - (1 - parity)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_symmetry() {
        // Both row parities, including negative rows.
        for index in [
            GridIndex::new(0, 0),
            GridIndex::new(1, 0),
            GridIndex::new(4, 3),
            GridIndex::new(5, 2),
            GridIndex::new(-1, -2),
            GridIndex::new(-2, 1),
        ] {
            for direction in Direction::ALL {
                let neighbor: GridIndex = index.neighbor(direction);
                assert_eq!(
                    neighbor.neighbor(direction.opposite()),
                    index,
                    "asymmetric neighbor for {index:?} {direction:?}"
                );
            }
        }
    }

    #[test]
    fn parity_shifts_columns() {
        // Even rows lean west on the diagonals, odd rows lean east.
        let even: GridIndex = GridIndex::new(2, 3);
        assert_eq!(even.neighbor(Direction::NorthEast), GridIndex::new(3, 3));
        assert_eq!(even.neighbor(Direction::NorthWest), GridIndex::new(3, 2));
        let odd: GridIndex = GridIndex::new(3, 3);
        assert_eq!(odd.neighbor(Direction::NorthEast), GridIndex::new(4, 4));
        assert_eq!(odd.neighbor(Direction::NorthWest), GridIndex::new(4, 3));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut indexes: Vec<GridIndex> = vec![
            GridIndex::new(1, 0),
            GridIndex::new(0, 2),
            GridIndex::new(0, 1),
        ];
        indexes.sort();
        assert_eq!(
            indexes,
            vec![
                GridIndex::new(0, 1),
                GridIndex::new(0, 2),
                GridIndex::new(1, 0),
            ]
        );
    }
}
