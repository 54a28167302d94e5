/*
level.rs

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

//! The level container: every cell of a generated puzzle.
//!
//! The cells own their six sides, and a side refers to its neighboring cell
//! by grid index only. Neighbor lookups go through the level, so the model
//! holds no reference cycles.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::direction::Direction;
use super::grid_index::GridIndex;
use super::hexagon::Hexagon;
use super::side::SideColor;

/// Serialize and deserialize the cell map with Serde.
///
/// JSON object keys must be strings, so the map is flattened into a list of
/// cells sorted by grid index, and rebuilt from the cells' own indexes when
/// reading back.
mod hexagon_map {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;

    use super::super::grid_index::GridIndex;
    use super::super::hexagon::Hexagon;

    /// Serialize the cell map as a sorted cell list.
    pub fn serialize<S>(
        map: &HashMap<GridIndex, Hexagon>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut cells: Vec<&Hexagon> = map.values().collect();
        cells.sort_by_key(|h| h.grid_index);
        cells.serialize(serializer)
    }

    /// Deserialize a cell list back into the cell map.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<GridIndex, Hexagon>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cells: Vec<Hexagon> = Vec::deserialize(deserializer)?;
        Ok(cells.into_iter().map(|h| (h.grid_index, h)).collect())
    }
}

/// A generated level: the cell map and the grid bounding dimensions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Level {
    /// All the cells of the level, keyed by grid index.
    #[serde(with = "hexagon_map")]
    hexagons: HashMap<GridIndex, Hexagon>,

    /// Number of columns spanned by the cells.
    pub grid_width: i32,

    /// Number of rows, in half-steps, spanned by the cells.
    pub grid_height: i32,
}

impl Level {
    /// Create a level from an already normalized cell map.
    pub fn new(hexagons: HashMap<GridIndex, Hexagon>, grid_width: i32, grid_height: i32) -> Self {
        Self {
            hexagons,
            grid_width,
            grid_height,
        }
    }

    /// Return the cell at the given index.
    pub fn get_hexagon(&self, index: GridIndex) -> Option<&Hexagon> {
        self.hexagons.get(&index)
    }

    /// Return the cell at the given index for update.
    pub fn get_hexagon_mut(&mut self, index: GridIndex) -> Option<&mut Hexagon> {
        self.hexagons.get_mut(&index)
    }

    /// Number of cells in the level.
    pub fn len(&self) -> usize {
        self.hexagons.len()
    }

    /// Whether the level has no cells.
    pub fn is_empty(&self) -> bool {
        self.hexagons.is_empty()
    }

    /// Iterate over the cells, in map order.
    pub fn hexagons(&self) -> impl Iterator<Item = &Hexagon> {
        self.hexagons.values()
    }

    /// Cell indexes in ascending (row, col) order.
    ///
    /// Random draws index into this list so that a given draw sequence
    /// always selects the same cells, whatever the map iteration order.
    pub fn sorted_indexes(&self) -> Vec<GridIndex> {
        let mut indexes: Vec<GridIndex> = self.hexagons.keys().copied().collect();
        indexes.sort_unstable();
        indexes
    }

    /// Try to create a connection on the side of the given cell.
    ///
    /// The connection is created only when the side and the mirrored side on
    /// the neighboring cell are both free. A side that borders the edge of
    /// the region has no neighbor and never takes a connection.
    ///
    /// Return whether the connection was created.
    pub fn create_connection(
        &mut self,
        index: GridIndex,
        direction: Direction,
        color: SideColor,
    ) -> bool {
        let neighbor_index: GridIndex = match self.hexagons.get(&index) {
            Some(hexagon) => {
                let side = hexagon.side(direction);
                if side.color.is_some() {
                    return false;
                }
                match side.neighbor {
                    Some(n) => n,
                    None => return false,
                }
            }
            None => return false,
        };

        match self.hexagons.get_mut(&neighbor_index) {
            Some(neighbor) => {
                let side = neighbor.side_mut(direction.opposite());
                if side.color.is_some() {
                    return false;
                }
                side.color = Some(color);
                side.connected = true;
            }
            None => return false,
        }

        if let Some(hexagon) = self.hexagons.get_mut(&index) {
            let side = hexagon.side_mut(direction);
            side.color = Some(color);
            side.connected = true;
        }
        true
    }

    /// Whether the side of the given cell carries a color that the mirrored
    /// side on the neighboring cell matches.
    pub fn is_matched(&self, index: GridIndex, direction: Direction) -> bool {
        let Some(hexagon) = self.hexagons.get(&index) else {
            return false;
        };
        let side = hexagon.side(direction);
        let (Some(color), Some(neighbor_index)) = (side.color, side.neighbor) else {
            return false;
        };
        match self.hexagons.get(&neighbor_index) {
            Some(neighbor) => neighbor.side(direction.opposite()).color == Some(color),
            None => false,
        }
    }

    /// Recompute the connected flag of every side.
    ///
    /// This is the reconcile pass that runs after scrambling, or after the
    /// player moved a cell, since those only exchange colors and leave the
    /// flags stale.
    pub fn refresh_connections(&mut self) {
        for index in self.sorted_indexes() {
            for direction in Direction::ALL {
                let connected: bool = self.is_matched(index, direction);
                if let Some(hexagon) = self.hexagons.get_mut(&index) {
                    hexagon.side_mut(direction).connected = connected;
                }
            }
        }
    }

    /// Whether every colored side of every cell is connected.
    ///
    /// Call [`Level::refresh_connections`] first if colors moved since the
    /// flags were last computed.
    pub fn is_solved(&self) -> bool {
        self.hexagons.values().all(|h| h.is_fully_connected())
    }

    /// Exchange the six side colors of two movable cells.
    ///
    /// The exchange is a no-op when both indexes are the same cell, when
    /// either cell is missing, or when either cell is an anchor. The
    /// connected flags are not recomputed here.
    ///
    /// Return whether the exchange happened.
    pub fn switch_colors(&mut self, a: GridIndex, b: GridIndex) -> bool {
        if a == b {
            return false;
        }
        let (Some(hexagon_a), Some(hexagon_b)) = (self.hexagons.get(&a), self.hexagons.get(&b))
        else {
            return false;
        };
        if !hexagon_a.is_movable || !hexagon_b.is_movable {
            return false;
        }

        let colors_a: [Option<SideColor>; 6] = hexagon_a.side_colors();
        let colors_b: [Option<SideColor>; 6] = hexagon_b.side_colors();
        if let Some(hexagon) = self.hexagons.get_mut(&a) {
            hexagon.set_side_colors(colors_b);
        }
        if let Some(hexagon) = self.hexagons.get_mut(&b) {
            hexagon.set_side_colors(colors_a);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two cells side by side, neighbor handles bound, no colors.
    fn two_cell_level() -> (Level, GridIndex, GridIndex) {
        let a: GridIndex = GridIndex::new(0, 0);
        let b: GridIndex = a.neighbor(Direction::NorthEast);
        let mut hexagon_a: Hexagon = Hexagon::new(true, a);
        let mut hexagon_b: Hexagon = Hexagon::new(true, b);
        hexagon_a.side_mut(Direction::NorthEast).neighbor = Some(b);
        hexagon_b.side_mut(Direction::SouthWest).neighbor = Some(a);

        let mut hexagons: HashMap<GridIndex, Hexagon> = HashMap::new();
        hexagons.insert(a, hexagon_a);
        hexagons.insert(b, hexagon_b);
        (Level::new(hexagons, 1, 2), a, b)
    }

    #[test]
    fn lookup_missing_cell() {
        let (level, _, _) = two_cell_level();
        assert!(level.get_hexagon(GridIndex::new(9, 9)).is_none());
        assert_eq!(level.len(), 2);
        assert!(!level.is_empty());
    }

    #[test]
    fn connection_sets_both_sides() {
        let (mut level, a, b) = two_cell_level();
        assert!(level.create_connection(a, Direction::NorthEast, SideColor::Green));

        let side_a = level.get_hexagon(a).unwrap().side(Direction::NorthEast);
        let side_b = level.get_hexagon(b).unwrap().side(Direction::SouthWest);
        assert_eq!(side_a.color, Some(SideColor::Green));
        assert_eq!(side_b.color, Some(SideColor::Green));
        assert!(side_a.connected && side_b.connected);
        assert!(level.is_matched(a, Direction::NorthEast));
        assert!(level.is_matched(b, Direction::SouthWest));
        assert!(level.is_solved());
    }

    #[test]
    fn connection_rejected_on_occupied_side() {
        let (mut level, a, _) = two_cell_level();
        assert!(level.create_connection(a, Direction::NorthEast, SideColor::Green));
        assert!(!level.create_connection(a, Direction::NorthEast, SideColor::Red));
    }

    #[test]
    fn connection_rejected_without_neighbor() {
        let (mut level, a, _) = two_cell_level();
        // The south side borders the region edge: no neighbor was bound.
        assert!(!level.create_connection(a, Direction::South, SideColor::Blue));
    }

    #[test]
    fn refresh_clears_mismatched_sides() {
        let (mut level, a, b) = two_cell_level();
        assert!(level.create_connection(a, Direction::NorthEast, SideColor::Green));

        // Force a mismatch, as a scramble move would.
        level
            .get_hexagon_mut(b)
            .unwrap()
            .side_mut(Direction::SouthWest)
            .color = Some(SideColor::Red);
        level.refresh_connections();

        assert!(!level.get_hexagon(a).unwrap().side(Direction::NorthEast).connected);
        assert!(!level.get_hexagon(b).unwrap().side(Direction::SouthWest).connected);
        assert!(!level.is_solved());
    }

    #[test]
    fn switch_colors_skips_anchors_and_self() {
        let (mut level, a, b) = two_cell_level();
        assert!(level.create_connection(a, Direction::NorthEast, SideColor::Green));
        assert!(!level.switch_colors(a, a));

        level.get_hexagon_mut(b).unwrap().is_movable = false;
        assert!(!level.switch_colors(a, b));

        level.get_hexagon_mut(b).unwrap().is_movable = true;
        assert!(level.switch_colors(a, b));
        assert_eq!(
            level.get_hexagon(a).unwrap().side(Direction::SouthWest).color,
            Some(SideColor::Green)
        );
        assert_eq!(
            level.get_hexagon(a).unwrap().side(Direction::NorthEast).color,
            None
        );
    }

    #[test]
    fn json_round_trip() {
        let (mut level, a, _) = two_cell_level();
        assert!(level.create_connection(a, Direction::NorthEast, SideColor::Green));

        let json: String = serde_json::to_string(&level).expect("serialize");
        let restored: Level = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, level);
    }
}
