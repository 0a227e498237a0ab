// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixture placement heuristic
//!
//! Spreads fixtures over the floor plan on a uniform grid with interior
//! margins. This covers the room; it does not try to even out illuminance.

use crate::catalog::FixtureType;
use crate::recommend::fixture_count;
use serde::{Deserialize, Serialize};

/// Fixture location in room coordinates (meters, origin at a floor corner)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixturePosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl FixturePosition {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Upper bound on placed fixtures, far above what any accepted room needs
pub const MAX_PLACED_FIXTURES: u32 = 1024;

/// Rows run along the width, columns along the length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: u32,
    pub cols: u32,
}

impl GridLayout {
    /// Grid roughly matching the room aspect ratio for `num_fixtures`
    pub fn for_room(num_fixtures: u32, length: f64, width: f64) -> Self {
        let n = num_fixtures as f64;
        let rows = ((n * width / length).sqrt().floor() as u32).max(1);
        let cols = ((n / rows as f64).ceil() as u32).max(1);
        Self { rows, cols }
    }

    pub fn capacity(&self) -> u32 {
        self.rows * self.cols
    }
}

/// Place exactly `num_fixtures` ceiling positions, row-major, capped at
/// [`MAX_PLACED_FIXTURES`].
///
/// Cell centers are at `length * (c + 1) / (cols + 1)` and
/// `width * (r + 1) / (rows + 1)`, so no fixture ever touches a wall.
pub fn grid_positions(num_fixtures: u32, length: f64, width: f64, height: f64) -> Vec<FixturePosition> {
    if num_fixtures > MAX_PLACED_FIXTURES {
        tracing::warn!(
            requested = num_fixtures,
            placed = MAX_PLACED_FIXTURES,
            "Fixture count capped for placement"
        );
    }
    let num_fixtures = num_fixtures.min(MAX_PLACED_FIXTURES);
    let layout = GridLayout::for_room(num_fixtures, length, width);
    let mut positions = Vec::with_capacity(num_fixtures as usize);

    'rows: for row in 0..layout.rows {
        for col in 0..layout.cols {
            if positions.len() >= num_fixtures as usize {
                break 'rows;
            }
            let x = length * (col + 1) as f64 / (layout.cols + 1) as f64;
            let y = width * (row + 1) as f64 / (layout.rows + 1) as f64;
            positions.push(FixturePosition::new(x, y, height));
        }
    }

    positions
}

/// Positions for the chosen fixture type, sized exactly like the
/// recommendation table
pub fn fixture_positions(
    length: f64,
    width: f64,
    height: f64,
    fixture_type: FixtureType,
    required_lumens: f64,
) -> Vec<FixturePosition> {
    let num_fixtures = fixture_count(fixture_type.spec(), required_lumens);
    grid_positions(num_fixtures, length, width, height)
}
