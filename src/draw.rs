/*
draw.rs

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

//! Render a level as text for the command line and the debug log.
//!
//! Each cell becomes an eight-character token. The six inner characters are
//! the sides in direction order, north first and clockwise: `.` for a bare
//! side, the color initial in lowercase for a colored side, and in uppercase
//! when the side is connected. Movable cells use square brackets, anchors
//! use parentheses. Odd rows are shifted by half a token, following the
//! offset layout of the grid.

use crate::generator::direction::Direction;
use crate::generator::hexagon::Hexagon;
use crate::generator::level::Level;
use crate::generator::side::SideColor;

// Rendered width of one cell token, brackets included.
const TOKEN_WIDTH: usize = 8;

/// One letter per color.
fn color_char(color: SideColor) -> char {
    match color {
        SideColor::Blue => 'b',
        SideColor::Green => 'g',
        SideColor::Red => 'r',
        SideColor::Yellow => 'y',
        SideColor::Orange => 'o',
        SideColor::Purple => 'p',
    }
}

/// Render one cell as a token such as `[bG....]`.
pub fn hexagon_token(hexagon: &Hexagon) -> String {
    let mut token: String = String::with_capacity(TOKEN_WIDTH);
    token.push(if hexagon.is_movable { '[' } else { '(' });
    for direction in Direction::ALL {
        let side = hexagon.side(direction);
        token.push(match side.color {
            None => '.',
            Some(color) if side.connected => color_char(color).to_ascii_uppercase(),
            Some(color) => color_char(color),
        });
    }
    token.push(if hexagon.is_movable { ']' } else { ')' });
    token
}

/// Render the level, one text line per grid row, northmost row first.
pub fn render(level: &Level) -> String {
    let height: usize = level.grid_height.max(0) as usize;
    let mut lines: Vec<String> = vec![String::new(); height];

    let mut cells: Vec<&Hexagon> = level.hexagons().collect();
    cells.sort_by_key(|h| h.grid_index);

    for hexagon in cells {
        let index = hexagon.grid_index;
        // Row 0 is the southmost row; the text starts at the top.
        let y: usize = (level.grid_height - 1 - index.row) as usize;
        let x: usize =
            (2 * index.col + index.row.rem_euclid(2)) as usize * (TOKEN_WIDTH / 2);
        let line: &mut String = &mut lines[y];
        while line.len() < x {
            line.push(' ');
        }
        line.push_str(&hexagon_token(hexagon));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::grid_index::GridIndex;
    use std::collections::HashMap;

    #[test]
    fn token_shows_colors_and_movability() {
        let mut hexagon: Hexagon = Hexagon::new(true, GridIndex::new(0, 0));
        hexagon.side_mut(Direction::North).color = Some(SideColor::Blue);
        hexagon.side_mut(Direction::South).color = Some(SideColor::Green);
        hexagon.side_mut(Direction::South).connected = true;
        assert_eq!(hexagon_token(&hexagon), "[b..G..]");

        hexagon.is_movable = false;
        assert_eq!(hexagon_token(&hexagon), "(b..G..)");
    }

    #[test]
    fn render_offsets_odd_rows() {
        let mut hexagons: HashMap<GridIndex, Hexagon> = HashMap::new();
        for index in [GridIndex::new(0, 0), GridIndex::new(1, 0)] {
            hexagons.insert(index, Hexagon::new(true, index));
        }
        let level: Level = Level::new(hexagons, 1, 2);

        let text: String = render(&level);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        // Row 1 is printed first, shifted by half a token.
        assert_eq!(lines[0], "    [......]");
        assert_eq!(lines[1], "[......]");
    }
}
