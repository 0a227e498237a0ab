// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reference tables for lighting estimates
//!
//! Everything in here is read-only process-wide data: recommended
//! illuminance per room type, daylight exposure per window orientation,
//! the fixture catalog with its mounting options and the reflectance bands
//! used to turn a surface color into a reflectance value.
//!
//! Keys (`RoomType`, `Orientation`, `FixtureType`, `MountingType`) travel
//! over the wire as their display names, e.g. `"Living Room"` or
//! `"LED Bulb"`. Parsing an unknown name is the only way these tables can
//! fail.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reflectance assumed for the floor (medium gray)
pub const FLOOR_REFLECTANCE: f64 = 0.3;

/// Installations needing more fixtures than this are left out of recommendations
pub const MAX_RECOMMENDED_FIXTURES: u32 = 8;

/// Default electricity tariff, in the catalog currency (INR) per kWh
pub const DEFAULT_ENERGY_COST_PER_KWH: f64 = 8.0;

/// Default daily usage of the installation, in hours
pub const DEFAULT_DAILY_USAGE_HOURS: f64 = 5.0;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Accepted room length and width in meters (inclusive)
pub const ROOM_SIDE_RANGE: (f64, f64) = (1.0, 20.0);
/// Accepted ceiling height in meters (inclusive)
pub const ROOM_HEIGHT_RANGE: (f64, f64) = (2.0, 5.0);
pub const MAX_WINDOWS: u32 = 10;
/// Accepted window width in meters, checked only when the room has windows
pub const WINDOW_WIDTH_RANGE: (f64, f64) = (0.3, 4.0);
/// Accepted window height in meters, checked only when the room has windows
pub const WINDOW_HEIGHT_RANGE: (f64, f64) = (0.3, 3.0);

/// Defines a closed set of catalog keys with display names.
///
/// Each generated enum gets `ALL` (declaration order), `as_str`, `Display`,
/// `FromStr` (case-insensitive on the display name) and serde support
/// through the display name.
macro_rules! catalog_key {
    (
        $(#[$meta:meta])*
        pub enum $name:ident / $err:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// All keys in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Display name, also used as the wire representation
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| Error::$err(s.to_string()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = Error;

            fn try_from(value: String) -> Result<Self> {
                value.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(key: $name) -> Self {
                key.as_str()
            }
        }
    };
}

catalog_key! {
    /// Room usage, selecting the target illuminance
    pub enum RoomType / UnknownRoomType {
        LivingRoom => "Living Room",
        Bedroom => "Bedroom",
        Kitchen => "Kitchen",
        HomeOffice => "Home Office",
        Bathroom => "Bathroom",
        DiningRoom => "Dining Room",
    }
}

impl RoomType {
    /// Recommended maintained illuminance in lux
    pub const fn illuminance_lux(self) -> f64 {
        match self {
            RoomType::LivingRoom => 300.0,
            RoomType::Bedroom => 200.0,
            RoomType::Kitchen => 500.0,
            RoomType::HomeOffice => 500.0,
            RoomType::Bathroom => 300.0,
            RoomType::DiningRoom => 300.0,
        }
    }
}

catalog_key! {
    /// Compass direction the windows face
    pub enum Orientation / UnknownOrientation {
        North => "North",
        South => "South",
        East => "East",
        West => "West",
    }
}

impl Orientation {
    /// Daylight attenuation: 1.0 is full exposure
    pub const fn exposure_factor(self) -> f64 {
        match self {
            Orientation::North => 0.65,
            Orientation::South => 1.0,
            Orientation::East | Orientation::West => 0.85,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::North
    }
}

catalog_key! {
    /// How a fixture is installed
    pub enum MountingType / UnknownMountingType {
        CeilingMounted => "Ceiling Mounted",
        WallMounted => "Wall Mounted",
        Pendant => "Pendant",
        RecessedCeiling => "Recessed Ceiling",
        SurfaceMounted => "Surface Mounted",
        CoveLighting => "Cove Lighting",
        UnderCabinet => "Under Cabinet",
    }
}

/// The three ways a mounting type is drawn in a room preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MountStyle {
    Ceiling,
    Wall,
    Pendant,
}

impl MountingType {
    /// Display mode keyed off the mounting name: anything mentioning
    /// "Ceiling" hangs from the ceiling, "Wall" sits on a wall, the rest is
    /// drawn like a pendant.
    pub fn style(self) -> MountStyle {
        let name = self.as_str();
        if name.contains("Ceiling") {
            MountStyle::Ceiling
        } else if name.contains("Wall") {
            MountStyle::Wall
        } else {
            MountStyle::Pendant
        }
    }
}

catalog_key! {
    /// Fixture families in the catalog
    pub enum FixtureType / UnknownFixtureType {
        LedBulb => "LED Bulb",
        LedPanel => "LED Panel",
        LedStrip => "LED Strip",
        LedDownlight => "LED Downlight",
    }
}

/// Catalog entry for one fixture family (prices in INR)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureSpec {
    /// Luminous efficacy in lumens per watt
    pub efficacy: f64,
    /// Available wattages (min, max)
    pub wattage_range: (f64, f64),
    pub lifetime_hours: f64,
    pub cost_per_unit: f64,
    /// Installation cost per unit
    pub installation_cost: f64,
    /// Maximum spacing to mounting height ratio
    pub spacing_factor: f64,
    pub description: &'static str,
}

impl FixtureSpec {
    /// Mean of the wattage range
    pub fn average_wattage(&self) -> f64 {
        (self.wattage_range.0 + self.wattage_range.1) / 2.0
    }

    /// Light output of one fixture at average wattage
    pub fn lumens_per_fixture(&self) -> f64 {
        self.efficacy * self.average_wattage()
    }
}

static LED_BULB: FixtureSpec = FixtureSpec {
    efficacy: 100.0,
    wattage_range: (5.0, 15.0),
    lifetime_hours: 25_000.0,
    cost_per_unit: 450.0,
    installation_cost: 200.0,
    spacing_factor: 1.5,
    description: "Energy-efficient, omnidirectional light",
};

static LED_PANEL: FixtureSpec = FixtureSpec {
    efficacy: 120.0,
    wattage_range: (20.0, 45.0),
    lifetime_hours: 50_000.0,
    cost_per_unit: 2500.0,
    installation_cost: 500.0,
    spacing_factor: 1.2,
    description: "Even light distribution, modern look",
};

static LED_STRIP: FixtureSpec = FixtureSpec {
    efficacy: 80.0,
    wattage_range: (10.0, 20.0),
    lifetime_hours: 30_000.0,
    cost_per_unit: 1200.0,
    installation_cost: 400.0,
    spacing_factor: 1.0,
    description: "Flexible installation, ambient lighting",
};

static LED_DOWNLIGHT: FixtureSpec = FixtureSpec {
    efficacy: 90.0,
    wattage_range: (8.0, 20.0),
    lifetime_hours: 35_000.0,
    cost_per_unit: 800.0,
    installation_cost: 300.0,
    spacing_factor: 1.3,
    description: "Directional lighting, clean appearance",
};

impl FixtureType {
    pub fn spec(self) -> &'static FixtureSpec {
        match self {
            FixtureType::LedBulb => &LED_BULB,
            FixtureType::LedPanel => &LED_PANEL,
            FixtureType::LedStrip => &LED_STRIP,
            FixtureType::LedDownlight => &LED_DOWNLIGHT,
        }
    }

    /// Mounting options offered for this fixture, first one is the default
    pub fn mounting_options(self) -> &'static [MountingType] {
        use MountingType::*;
        match self {
            FixtureType::LedBulb => &[CeilingMounted, WallMounted, Pendant],
            FixtureType::LedPanel => &[RecessedCeiling, SurfaceMounted],
            FixtureType::LedStrip => &[WallMounted, CoveLighting, UnderCabinet],
            FixtureType::LedDownlight => &[RecessedCeiling],
        }
    }

    pub fn default_mounting(self) -> MountingType {
        self.mounting_options()[0]
    }

    pub fn supports_mounting(self, mounting: MountingType) -> bool {
        self.mounting_options().contains(&mounting)
    }
}

/// Brightness band used for color reflectance interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectanceBand {
    Dark,
    Medium,
    Light,
}

impl ReflectanceBand {
    /// Band for a brightness in [0, 1]. Bounds are exclusive from below:
    /// exactly 0.7 is still medium, exactly 0.3 is still dark.
    pub fn for_brightness(brightness: f64) -> Self {
        if brightness > 0.7 {
            ReflectanceBand::Light
        } else if brightness > 0.3 {
            ReflectanceBand::Medium
        } else {
            ReflectanceBand::Dark
        }
    }

    pub const fn brightness_range(self) -> (f64, f64) {
        match self {
            ReflectanceBand::Dark => (0.0, 0.3),
            ReflectanceBand::Medium => (0.3, 0.7),
            ReflectanceBand::Light => (0.7, 1.0),
        }
    }

    pub const fn reflectance_range(self) -> (f64, f64) {
        match self {
            ReflectanceBand::Dark => (0.1, 0.3),
            ReflectanceBand::Medium => (0.3, 0.6),
            ReflectanceBand::Light => (0.6, 0.8),
        }
    }
}
