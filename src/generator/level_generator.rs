/*
level_generator.rs

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

//! Generate random levels: grow a region, populate connections, scramble.

use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::Instant;

use super::descriptions::{Difficulty, LevelDescription};
use super::direction::Direction;
use super::grid_index::GridIndex;
use super::hexagon::Hexagon;
use super::level::Level;
use super::side::SideColor;

// Max number of draws the population pass can spend before giving up. Failed
// draws are normal flow, so the budget only trips on parameter sets that
// request more connections than the region has free side pairs.
const MAX_CONNECTION_ATTEMPTS: usize = 100_000;

/// Type of errors.
///
/// Both variants are configuration errors: a well-formed parameter set never
/// produces them.
#[derive(Debug, PartialEq)]
pub enum GenerateError {
    /// Region growth ran out of candidate positions before reaching the
    /// requested cell count.
    FrontierExhausted,

    /// The population pass could not place the requested number of
    /// connections within its attempt budget.
    ConnectionsExhausted,
}

/// Level generator for one parameter set.
pub struct LevelGenerator {
    /// Generation parameters.
    description: LevelDescription,

    /// Number of random draws the last generation spent.
    pub iteration: usize,

    /// Duration in seconds of the last generation.
    pub duration: f32,

    /// Time when the generation started. Used to compute the
    /// [`LevelGenerator::duration`].
    start: Instant,
}

/// Generate a scrambled level for the given seed and difficulty.
pub fn create(seed: u64, difficulty: Difficulty) -> Result<Level, GenerateError> {
    LevelGenerator::new(difficulty).generate(seed)
}

impl LevelGenerator {
    /// Create a generator for the given difficulty level.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_description(difficulty.description())
    }

    /// Create a generator for an explicit parameter set.
    pub fn with_description(description: LevelDescription) -> Self {
        Self {
            description,
            iteration: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Generate a scrambled level.
    ///
    /// Growth and population draw from a generator seeded with `seed`, so
    /// the solved layout is reproducible. Scrambling draws from the thread
    /// generator on purpose: replaying a seed replays the solved puzzle,
    /// not the shuffle.
    ///
    /// # Errors
    ///
    /// The method returns an error if the parameter set requests more cells
    /// or more connections than the board can hold.
    pub fn generate(&mut self, seed: u64) -> Result<Level, GenerateError> {
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        self.generate_with(&mut rng, &mut rand::rng())
    }

    /// Generate a scrambled level from explicit random sources.
    ///
    /// The first source drives growth and population, the second one drives
    /// scrambling. Passing two seeded sources makes the whole generation
    /// reproducible, shuffle included.
    pub fn generate_with(
        &mut self,
        rng: &mut impl Rng,
        scramble_rng: &mut impl Rng,
    ) -> Result<Level, GenerateError> {
        self.iteration = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        let mut level: Level = self.generate_level_hexagons(rng)?;
        self.populate_connections(&mut level, rng)?;
        Self::scramble(&mut level, scramble_rng);

        self.duration = self.start.elapsed().as_secs_f32();
        debug!("Draws = {}  Duration = {}", self.iteration, self.duration);
        Ok(level)
    }

    /// Grow a connected region of cells with no connections.
    ///
    /// Candidate positions expand outward from the random seed positions:
    /// accepting a candidate appends its six neighbor indexes to the
    /// candidate list. The accepted cells are then re-keyed to a zero-based
    /// bounding box, and the neighbor handles of their sides are bound.
    pub fn generate_level_hexagons(
        &mut self,
        rng: &mut impl Rng,
    ) -> Result<Level, GenerateError> {
        let (width, height) = self.description.size;
        let mut hexagons: HashMap<GridIndex, Hexagon> = HashMap::new();

        // Candidate positions the region can grow into. Out-of-bounds
        // neighbors are appended too and only filtered at removal time;
        // dropping them earlier would change the draw sequence.
        let mut available: Vec<GridIndex> = Vec::new();

        for _ in 0..self.description.start_hexagons {
            available.push(GridIndex::new(
                rng.random_range(0..height),
                rng.random_range(0..width),
            ));
        }

        while hexagons.len() < self.description.total_hexagons {
            if available.is_empty() {
                return Err(GenerateError::FrontierExhausted);
            }
            self.iteration += 1;
            let new_index: GridIndex = available.remove(rng.random_range(0..available.len()));

            // Invalid position
            if new_index.row < 0
                || new_index.col < 0
                || new_index.row >= height
                || new_index.col >= width
            {
                continue;
            }
            // Already exists
            if hexagons.contains_key(&new_index) {
                continue;
            }

            let (numerator, denominator) = self.description.movable_odds;
            let is_movable: bool = rng.random_range(0..denominator) < numerator;
            hexagons.insert(new_index, Hexagon::new(is_movable, new_index));

            // Add the neighbors to the search space if not already there
            for direction in Direction::ALL {
                let neighbor: GridIndex = new_index.neighbor(direction);
                if !available.contains(&neighbor) {
                    available.push(neighbor);
                }
            }
        }

        if hexagons.is_empty() {
            return Ok(Level::new(hexagons, 0, 0));
        }

        // Get the extrema positions of the board
        let mut min_row: i32 = i32::MAX;
        let mut max_row: i32 = i32::MIN;
        let mut min_col: i32 = i32::MAX;
        let mut max_col: i32 = i32::MIN;
        for index in hexagons.keys() {
            min_row = min_row.min(index.row);
            max_row = max_row.max(index.row);
            min_col = min_col.min(index.col);
            max_col = max_col.max(index.col);
        }

        // Use the extrema to zero-position the board
        let mut simplified: HashMap<GridIndex, Hexagon> =
            HashMap::with_capacity(hexagons.len());
        for (index, mut hexagon) in hexagons {
            let new_index: GridIndex = GridIndex::new(index.row - min_row, index.col - min_col);
            hexagon.grid_index = new_index;
            simplified.insert(new_index, hexagon);
        }

        // Bind the neighbor handles. An absent neighbor means the side
        // borders the region edge and can never take a connection.
        let indexes: Vec<GridIndex> = simplified.keys().copied().collect();
        for index in &indexes {
            for direction in Direction::ALL {
                let neighbor: GridIndex = index.neighbor(direction);
                if simplified.contains_key(&neighbor)
                    && let Some(hexagon) = simplified.get_mut(index)
                {
                    hexagon.side_mut(direction).neighbor = Some(neighbor);
                }
            }
        }

        let level: Level =
            Level::new(simplified, max_col - min_col + 1, max_row - min_row + 1);
        debug!(
            "Region: {} cells on a {}x{} grid",
            level.len(),
            level.grid_width,
            level.grid_height
        );
        Ok(level)
    }

    /// Populate the level with random connections until the requested count
    /// is reached.
    ///
    /// Each attempt draws a cell, a direction, and a color; the attempt only
    /// counts when both mirrored sides are free. Failed attempts are normal
    /// flow and are silently redrawn.
    pub fn populate_connections(
        &mut self,
        level: &mut Level,
        rng: &mut impl Rng,
    ) -> Result<(), GenerateError> {
        let indexes: Vec<GridIndex> = level.sorted_indexes();
        if self.description.connections > 0 && indexes.is_empty() {
            return Err(GenerateError::ConnectionsExhausted);
        }

        let mut created: usize = 0;
        let mut attempts: usize = 0;
        while created < self.description.connections {
            attempts += 1;
            if attempts > MAX_CONNECTION_ATTEMPTS {
                return Err(GenerateError::ConnectionsExhausted);
            }
            self.iteration += 1;

            let index: GridIndex = indexes[rng.random_range(0..indexes.len())];
            let direction: Direction =
                Direction::from_repr(rng.random_range(0..6)).unwrap_or(Direction::North);
            let color: SideColor =
                SideColor::from_repr(rng.random_range(0..self.description.colors) + 1)
                    .unwrap_or(SideColor::Blue);

            if level.create_connection(index, direction, color) {
                created += 1;
                debug!("Connection {created}: {index:?} {direction:?} {color:?}");
            }
        }
        Ok(())
    }

    /// Scramble the level by exchanging side colors between movable cells.
    ///
    /// Colors only move between whole cells, never side by side, so the
    /// color multiset of the board is preserved and every connection of the
    /// solved layout can be restored. The connected flags are left stale;
    /// the caller reconciles them with
    /// [`Level::refresh_connections`](super::level::Level::refresh_connections).
    pub fn scramble(level: &mut Level, rng: &mut impl Rng) {
        let indexes: Vec<GridIndex> = level.sorted_indexes();
        for index in &indexes {
            // Only movable cells shuffle
            match level.get_hexagon(*index) {
                Some(hexagon) if hexagon.is_movable => (),
                _ => continue,
            }
            let other: GridIndex = indexes[rng.random_range(0..indexes.len())];
            // Self-pairs and anchor targets are skipped inside the exchange
            level.switch_colors(*index, other);
        }
    }
}
