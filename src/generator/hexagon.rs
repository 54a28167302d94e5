/*
hexagon.rs

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

//! The hexagonal cell model.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::grid_index::GridIndex;
use super::side::{Side, SideColor};

/// One hexagonal cell of a level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Hexagon {
    /// Position of the cell on the grid.
    pub grid_index: GridIndex,

    /// Whether scrambling, and later the player, can move the cell colors.
    /// Immovable cells are the anchors of the puzzle.
    pub is_movable: bool,

    /// The six sides, indexed by [`Direction`].
    sides: [Side; 6],
}

impl Hexagon {
    /// Create a cell with six colorless sides.
    pub fn new(is_movable: bool, grid_index: GridIndex) -> Self {
        Self {
            grid_index,
            is_movable,
            sides: Direction::ALL.map(Side::new),
        }
    }

    /// Return the side in the given direction.
    pub fn side(&self, direction: Direction) -> &Side {
        &self.sides[direction.index()]
    }

    /// Return the side in the given direction for update.
    pub fn side_mut(&mut self, direction: Direction) -> &mut Side {
        &mut self.sides[direction.index()]
    }

    /// Iterate over the six sides in direction order.
    pub fn sides(&self) -> impl Iterator<Item = &Side> {
        self.sides.iter()
    }

    /// Number of sides that carry a color.
    pub fn total_colors(&self) -> usize {
        self.sides.iter().filter(|s| s.is_connectable()).count()
    }

    /// Number of sides whose connection is complete.
    pub fn total_connected(&self) -> usize {
        self.sides.iter().filter(|s| s.connected).count()
    }

    /// Whether every colored side of the cell is connected.
    pub fn is_fully_connected(&self) -> bool {
        self.total_colors() == self.total_connected()
    }

    /// Return the six side colors, in direction order.
    pub fn side_colors(&self) -> [Option<SideColor>; 6] {
        self.sides.map(|s| s.color)
    }

    /// Replace the six side colors, in direction order.
    ///
    /// Only the colors change: the neighbor bindings and the connected flags
    /// keep their current values. The scramble pass leaves the connected
    /// flags stale on purpose and reconciles them in a later pass.
    pub fn set_side_colors(&mut self, colors: [Option<SideColor>; 6]) {
        for (side, color) in self.sides.iter_mut().zip(colors) {
            side.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_has_no_colors() {
        let hexagon: Hexagon = Hexagon::new(true, GridIndex::new(0, 0));
        assert_eq!(hexagon.total_colors(), 0);
        assert_eq!(hexagon.total_connected(), 0);
        assert!(hexagon.is_fully_connected());
        for (i, side) in hexagon.sides().enumerate() {
            assert_eq!(side.direction.index(), i);
        }
    }

    #[test]
    fn side_lookup_by_direction() {
        let mut hexagon: Hexagon = Hexagon::new(true, GridIndex::new(1, 2));
        hexagon.side_mut(Direction::SouthWest).color = Some(SideColor::Red);
        assert_eq!(
            hexagon.side(Direction::SouthWest).color,
            Some(SideColor::Red)
        );
        assert_eq!(hexagon.side(Direction::NorthEast).color, None);
        assert_eq!(hexagon.total_colors(), 1);
        assert!(!hexagon.is_fully_connected());
    }

    #[test]
    fn color_swap_keeps_bindings() {
        let mut hexagon: Hexagon = Hexagon::new(true, GridIndex::new(0, 0));
        hexagon.side_mut(Direction::North).neighbor = Some(GridIndex::new(2, 0));
        hexagon.side_mut(Direction::North).color = Some(SideColor::Blue);

        let mut colors: [Option<SideColor>; 6] = [None; 6];
        colors[Direction::South.index()] = Some(SideColor::Green);
        hexagon.set_side_colors(colors);

        assert_eq!(hexagon.side(Direction::North).color, None);
        assert_eq!(hexagon.side(Direction::South).color, Some(SideColor::Green));
        assert_eq!(
            hexagon.side(Direction::North).neighbor,
            Some(GridIndex::new(2, 0))
        );
    }
}
