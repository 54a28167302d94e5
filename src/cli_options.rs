/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command line generates scrambled levels and prints them, either as
//! text for a quick look or as JSON for a front end to consume.
//!
//! # Examples
//!
//! Generate the easy level for seed 42:
//!
//! ```
//! $ hexalink --seed 42 --difficulty easy
//! seed = 42  difficulty = easy
//!     [..b...]    [......]
//! [...B..](G.r...)
//! ...
//! ```
//!
//! Generate five hard levels with random seeds and print timing statistics:
//!
//! ```
//! $ hexalink -c 5 -f hard --summary
//! ```
//!
//! Export one level as JSON:
//!
//! ```
//! $ hexalink --seed 42 --json
//! ```

use clap::Parser;
use log::debug;
use rand::Rng;
use std::env;

use crate::draw;
use crate::generator::descriptions::Difficulty;
use crate::generator::level::Level;
use crate::generator::level_generator::{GenerateError, LevelGenerator};

const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPL-3.0-or-later: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Generate random Hexalink levels.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Seed for the level layout; random when not provided
    #[arg(short, long)]
    seed: Option<u64>,

    /// Difficulty level for the generated levels
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Number of levels to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the levels in JSON format instead of text
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the levels
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse the command-line options and run the generator.
///
/// Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut generator: LevelGenerator = LevelGenerator::new(args.difficulty);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut iterations: usize = 0;

    for i in 0..args.count {
        // One seed per level: consecutive seeds when one was requested,
        // random seeds otherwise.
        let seed: u64 = match args.seed {
            Some(s) => s.wrapping_add(i as u64),
            None => rand::rng().random(),
        };
        debug!("Level {i}: seed = {seed}");

        let mut level: Level = match generator.generate(seed) {
            Ok(level) => level,
            Err(GenerateError::FrontierExhausted) => {
                eprintln!(
                    "The {} parameters request more cells than their board can grow",
                    args.difficulty
                );
                return 1;
            }
            Err(GenerateError::ConnectionsExhausted) => {
                eprintln!(
                    "The {} parameters request more connections than their levels can hold",
                    args.difficulty
                );
                return 1;
            }
        };

        // Scrambling leaves the connected flags stale; reconcile them
        // before handing the level over.
        level.refresh_connections();
        debug!(
            "Level {i}: {} cells, already solved = {}",
            level.len(),
            level.is_solved()
        );

        total += generator.duration;
        if generator.duration > max {
            max = generator.duration;
        }
        iterations += generator.iteration;

        if args.json {
            match serde_json::to_string_pretty(&level) {
                Ok(s) => println!("{s}"),
                Err(e) => {
                    eprintln!("Cannot serialize the level: {e}");
                    return 1;
                }
            }
        } else {
            println!("seed = {seed}  difficulty = {}", args.difficulty);
            println!("{}", draw::render(&level));
            println!();
        }
    }

    // Print some stats
    if args.summary {
        println!(
            "
   total time = {}s
 average time = {}s
     max time = {}s
average draws = {}",
            total,
            total / args.count.max(1) as f32,
            max,
            iterations / args.count.max(1)
        );
    }
    0
}
