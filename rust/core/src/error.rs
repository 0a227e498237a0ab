// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for lighting calculations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating room input or resolving catalog keys
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid color format: {0:?} (expected #RRGGBB or #RGB)")]
    InvalidColorFormat(String),

    #[error("Unknown window orientation: {0:?}")]
    UnknownOrientation(String),

    #[error("Unknown room type: {0:?}")]
    UnknownRoomType(String),

    #[error("Unknown fixture type: {0:?}")]
    UnknownFixtureType(String),

    #[error("Unknown mounting type: {0:?}")]
    UnknownMountingType(String),

    #[error("Invalid {name}: {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("Invalid usage {name}: {value}")]
    InvalidUsage { name: &'static str, value: f64 },

    #[error("{fixture} cannot be installed as {mounting}")]
    MountingNotSupported { fixture: String, mounting: String },
}
