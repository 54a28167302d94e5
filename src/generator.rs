/*
generator.rs

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

//! Generate random Hexalink levels.
//!
//! A level is a connected region of hexagonal cells where some pairs of
//! mirrored cell sides share a color. The board is solved when every colored
//! side faces a side of the same color.
//!
//! [`level_generator::LevelGenerator`] builds a level in three passes:
//!
//! * Region growth draws random seed positions and expands a candidate list
//!   around the accepted cells until the level holds the number of cells
//!   that the [`descriptions::LevelDescription`] requests. The accepted
//!   cells are re-keyed to a zero-based bounding box, and the sides of
//!   adjacent cells are bound to each other.
//!
//! * Connection population draws random (cell, direction, color) triples
//!   and commits a connection when both mirrored sides are free, until the
//!   requested connection count is reached. The level is now in its solved
//!   state.
//!
//! * Scrambling walks the cells in grid order and exchanges the six side
//!   colors of each movable cell with those of another random movable cell.
//!   The cell topology never changes, so the solved state stays reachable.
//!
//! The first two passes draw from a generator seeded with the level seed
//! and are fully deterministic; scrambling draws from an independent source
//! so that replaying a seed replays the solved layout, not the shuffle.

pub mod descriptions;
pub mod direction;
pub mod grid_index;
pub mod hexagon;
pub mod level;
pub mod level_generator;
pub mod side;
