// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room description as entered by the user

use crate::catalog::{
    Orientation, RoomType, MAX_WINDOWS, ROOM_HEIGHT_RANGE, ROOM_SIDE_RANGE, WINDOW_HEIGHT_RANGE,
    WINDOW_WIDTH_RANGE,
};
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::formulas;
use serde::{Deserialize, Serialize};

/// Room geometry, finishes and windows. Dimensions in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub room_type: RoomType,
    #[serde(default)]
    pub wall_color: Rgb,
    #[serde(default)]
    pub ceiling_color: Rgb,
    #[serde(default)]
    pub window_count: u32,
    /// Ignored when `window_count` is 0
    #[serde(default)]
    pub window_width: f64,
    /// Ignored when `window_count` is 0
    #[serde(default)]
    pub window_height: f64,
    #[serde(default)]
    pub window_orientation: Orientation,
}

impl RoomSpec {
    /// Room with white finishes and no windows
    pub fn new(length: f64, width: f64, height: f64, room_type: RoomType) -> Self {
        Self {
            length,
            width,
            height,
            room_type,
            wall_color: Rgb::WHITE,
            ceiling_color: Rgb::WHITE,
            window_count: 0,
            window_width: 0.0,
            window_height: 0.0,
            window_orientation: Orientation::default(),
        }
    }

    pub fn with_colors(mut self, wall_color: Rgb, ceiling_color: Rgb) -> Self {
        self.wall_color = wall_color;
        self.ceiling_color = ceiling_color;
        self
    }

    pub fn with_windows(
        mut self,
        count: u32,
        width: f64,
        height: f64,
        orientation: Orientation,
    ) -> Self {
        self.window_count = count;
        self.window_width = width;
        self.window_height = height;
        self.window_orientation = orientation;
        self
    }

    /// Check the room against the accepted input ranges: sides within
    /// [`ROOM_SIDE_RANGE`], height within [`ROOM_HEIGHT_RANGE`], at most
    /// [`MAX_WINDOWS`] windows and, when there are windows, window sizes
    /// within [`WINDOW_WIDTH_RANGE`] and [`WINDOW_HEIGHT_RANGE`].
    pub fn validate(&self) -> Result<()> {
        check_range("length", self.length, ROOM_SIDE_RANGE)?;
        check_range("width", self.width, ROOM_SIDE_RANGE)?;
        check_range("height", self.height, ROOM_HEIGHT_RANGE)?;

        if self.window_count > MAX_WINDOWS {
            return Err(Error::InvalidDimension {
                name: "window_count",
                value: self.window_count as f64,
            });
        }
        if self.has_windows() {
            check_range("window_width", self.window_width, WINDOW_WIDTH_RANGE)?;
            check_range("window_height", self.window_height, WINDOW_HEIGHT_RANGE)?;
        }

        Ok(())
    }

    pub fn has_windows(&self) -> bool {
        self.window_count > 0
    }

    pub fn area(&self) -> f64 {
        formulas::area(self.length, self.width)
    }

    pub fn volume(&self) -> f64 {
        formulas::volume(self.length, self.width, self.height)
    }

    pub fn window_area(&self) -> f64 {
        if !self.has_windows() {
            return 0.0;
        }
        formulas::window_area(self.window_count, self.window_width, self.window_height)
    }

    /// Daylight share; exactly 0 for a room without windows
    pub fn natural_light_factor(&self) -> f64 {
        if !self.has_windows() {
            return 0.0;
        }
        formulas::natural_light_factor(self.window_area(), self.area(), self.window_orientation)
    }

    pub fn average_reflectance(&self) -> f64 {
        formulas::average_reflectance(self.wall_color, self.ceiling_color)
    }

    pub fn required_lux(&self) -> f64 {
        self.room_type.illuminance_lux()
    }
}

/// NaN fails both comparisons and is rejected along with infinities
fn check_range(name: &'static str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(Error::InvalidDimension { name, value })
    }
}
