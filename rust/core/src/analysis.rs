// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One-pass lighting analysis
//!
//! Runs the whole chain for a single input change:
//! room formulas → fixture recommendations → placement of the preferred
//! fixture. Every call produces fresh values; nothing is cached between
//! calls.

use crate::catalog::{FixtureType, MountingType, RoomType};
use crate::error::{Error, Result};
use crate::formulas::{self, recommended_spacing};
use crate::placement::{fixture_positions, FixturePosition};
use crate::recommend::{fixture_count, recommend_fixtures, Recommendations, UsageProfile};
use crate::room::RoomSpec;
use serde::{Deserialize, Serialize};

/// Derived room figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomAnalysis {
    /// Floor area (m²)
    pub area: f64,
    /// Volume (m³)
    pub volume: f64,
    /// Glazed area (m²)
    pub window_area: f64,
    pub natural_light_factor: f64,
    /// Surface-weighted reflectance
    pub reflectance: f64,
    /// Target illuminance (lux)
    pub required_lux: f64,
    /// Artificial light still needed (lumens)
    pub required_lumens: f64,
}

/// Validate `room` and evaluate the light formulas
pub fn analyze(room: &RoomSpec) -> Result<RoomAnalysis> {
    room.validate()?;

    let area = room.area();
    let natural_light_factor = room.natural_light_factor();
    let reflectance = room.average_reflectance();
    let required_lux = room.required_lux();
    let required_lumens =
        formulas::required_lumens(area, required_lux, reflectance, natural_light_factor);

    if natural_light_factor > 1.0 {
        tracing::debug!(
            natural_light_factor,
            "Daylight exceeds requirement, no artificial light needed"
        );
    }

    Ok(RoomAnalysis {
        area,
        volume: room.volume(),
        window_area: room.window_area(),
        natural_light_factor,
        reflectance,
        required_lux,
        required_lumens,
    })
}

/// Everything needed for a full lighting plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(flatten)]
    pub room: RoomSpec,
    pub preferred_fixture: FixtureType,
    /// Defaults to the first mounting option of the preferred fixture
    #[serde(default)]
    pub mounting_type: Option<MountingType>,
}

impl PlanRequest {
    pub fn new(room: RoomSpec, preferred_fixture: FixtureType) -> Self {
        Self {
            room,
            preferred_fixture,
            mounting_type: None,
        }
    }

    pub fn with_mounting(mut self, mounting_type: MountingType) -> Self {
        self.mounting_type = Some(mounting_type);
        self
    }

    /// Chosen mounting, checked against the fixture's options
    pub fn resolved_mounting(&self) -> Result<MountingType> {
        match self.mounting_type {
            None => Ok(self.preferred_fixture.default_mounting()),
            Some(mounting) if self.preferred_fixture.supports_mounting(mounting) => Ok(mounting),
            Some(mounting) => Err(Error::MountingNotSupported {
                fixture: self.preferred_fixture.to_string(),
                mounting: mounting.to_string(),
            }),
        }
    }
}

/// Result of one analysis pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightingPlan {
    pub room: RoomSpec,
    pub analysis: RoomAnalysis,
    pub recommendations: Recommendations,
    pub preferred_fixture: FixtureType,
    pub mounting_type: MountingType,
    /// Number of preferred fixtures, also the number of positions
    pub fixture_count: u32,
    pub positions: Vec<FixturePosition>,
    /// Maximum spacing between preferred fixtures (m)
    pub recommended_spacing: f64,
}

/// Run analysis, recommendations and placement for `request`
pub fn plan(request: &PlanRequest, usage: &UsageProfile) -> Result<LightingPlan> {
    let mounting_type = request.resolved_mounting()?;
    usage.validate()?;
    let room = &request.room;

    let analysis = analyze(room)?;
    tracing::debug!(
        area = analysis.area,
        reflectance = analysis.reflectance,
        required_lumens = analysis.required_lumens,
        "Room analyzed"
    );

    let recommendations = recommend_fixtures(analysis.required_lumens, usage);
    tracing::debug!(count = recommendations.len(), "Fixture recommendations ready");

    let spec = request.preferred_fixture.spec();
    let positions = fixture_positions(
        room.length,
        room.width,
        room.height,
        request.preferred_fixture,
        analysis.required_lumens,
    );
    tracing::debug!(
        fixture = %request.preferred_fixture,
        mounting = %mounting_type,
        positions = positions.len(),
        "Fixtures placed"
    );

    Ok(LightingPlan {
        room: room.clone(),
        analysis,
        recommendations,
        preferred_fixture: request.preferred_fixture,
        mounting_type,
        fixture_count: fixture_count(spec, analysis.required_lumens),
        positions,
        recommended_spacing: recommended_spacing(room.height, spec.spacing_factor),
    })
}

/// Flat record handed to the report renderer, in display units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub room_type: RoomType,
    /// m²
    pub area: f64,
    /// lux
    pub required_illuminance: f64,
    /// lumens
    pub required_lumens: f64,
    /// Fraction, 0.25 means 25 %
    pub natural_light_factor: f64,
    pub reflectance: f64,
    pub mounting_type: MountingType,
}

impl LightingPlan {
    pub fn report_data(&self) -> ReportData {
        ReportData {
            length: self.room.length,
            width: self.room.width,
            height: self.room.height,
            room_type: self.room.room_type,
            area: self.analysis.area,
            required_illuminance: self.analysis.required_lux,
            required_lumens: self.analysis.required_lumens,
            natural_light_factor: self.analysis.natural_light_factor,
            reflectance: self.analysis.reflectance,
            mounting_type: self.mounting_type,
        }
    }
}
