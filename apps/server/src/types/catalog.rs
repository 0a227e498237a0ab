// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Catalog response types.

use lux_lite_core::{
    FixtureSpec, FixtureType, MountingType, Orientation, RoomType, UsageProfile,
    MAX_RECOMMENDED_FIXTURES,
};
use serde::Serialize;

/// Room type with its target illuminance.
#[derive(Debug, Clone, Serialize)]
pub struct RoomTypeInfo {
    pub name: RoomType,
    pub illuminance_lux: f64,
}

/// Window orientation with its daylight exposure factor.
#[derive(Debug, Clone, Serialize)]
pub struct OrientationInfo {
    pub name: Orientation,
    pub exposure_factor: f64,
}

/// Fixture type with its specification and allowed mountings.
#[derive(Debug, Clone, Serialize)]
pub struct FixtureInfo {
    pub name: FixtureType,
    pub lumens_per_fixture: f64,
    pub specs: &'static FixtureSpec,
    pub mounting_options: &'static [MountingType],
}

/// Full catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub room_types: Vec<RoomTypeInfo>,
    pub orientations: Vec<OrientationInfo>,
    pub fixtures: Vec<FixtureInfo>,
    pub mounting_types: &'static [MountingType],
    /// Fixture types needing more units than this are not recommended.
    pub max_recommended_fixtures: u32,
    /// Usage assumptions this server applies to energy figures.
    pub usage: UsageProfile,
}

impl CatalogResponse {
    pub fn build(usage: UsageProfile) -> Self {
        Self {
            room_types: RoomType::ALL
                .iter()
                .map(|&name| RoomTypeInfo {
                    name,
                    illuminance_lux: name.illuminance_lux(),
                })
                .collect(),
            orientations: Orientation::ALL
                .iter()
                .map(|&name| OrientationInfo {
                    name,
                    exposure_factor: name.exposure_factor(),
                })
                .collect(),
            fixtures: FixtureType::ALL
                .iter()
                .map(|&name| FixtureInfo {
                    name,
                    lumens_per_fixture: name.spec().lumens_per_fixture(),
                    specs: name.spec(),
                    mounting_options: name.mounting_options(),
                })
                .collect(),
            mounting_types: MountingType::ALL,
            max_recommended_fixtures: MAX_RECOMMENDED_FIXTURES,
            usage,
        }
    }
}
