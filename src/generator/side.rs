/*
side.rs

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

//! One side of a hexagonal cell and its optional colored connection.

use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

use super::direction::Direction;
use super::grid_index::GridIndex;

/// Colors that a connection between two cells can take.
///
/// The discriminants start at 1 because the population pass draws color ids
/// in `1..=colors`, where `colors` comes from the level description.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr,
)]
#[repr(u8)]
pub enum SideColor {
    Blue = 1,
    Green,
    Red,
    Yellow,
    Orange,
    Purple,
}

/// One side of a hexagonal cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Side {
    /// Direction of the side on its owning cell.
    pub direction: Direction,

    /// Color of the connection attached to the side, if any.
    pub color: Option<SideColor>,

    /// Whether the side and its mirrored side carry the same color.
    ///
    /// The population pass maintains the flag while it builds the solved
    /// level. Scrambling relocates colors without touching it, so the flag
    /// goes stale until [`super::level::Level::refresh_connections`]
    /// reconciles it.
    pub connected: bool,

    /// Index of the neighboring cell, if the side does not border the edge
    /// of the region. Bound once when the level is grown, never reassigned;
    /// only side colors change afterwards.
    pub neighbor: Option<GridIndex>,
}

impl Side {
    /// Create a colorless, unbound side.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            color: None,
            connected: false,
            neighbor: None,
        }
    }

    /// Whether the side can take part in a connection.
    pub fn is_connectable(&self) -> bool {
        self.color.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_ids_are_one_based() {
        assert_eq!(SideColor::from_repr(0), None);
        assert_eq!(SideColor::from_repr(1), Some(SideColor::Blue));
        assert_eq!(SideColor::from_repr(6), Some(SideColor::Purple));
        assert_eq!(SideColor::from_repr(7), None);
    }

    #[test]
    fn new_side_is_not_connectable() {
        let side: Side = Side::new(Direction::South);
        assert!(!side.is_connectable());
        assert!(!side.connected);
        assert_eq!(side.neighbor, None);
    }
}
