// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Lux-Lite Core
//!
//! Interior lighting estimates from room geometry, surface colors and
//! windows.
//!
//! ## Overview
//!
//! - **Catalog**: illuminance targets, window orientation factors, fixture
//!   specs and mounting options as read-only tables
//! - **Formulas**: area, volume, daylight factor, color reflectance and
//!   required lumens
//! - **Recommendations**: fixture counts plus energy and cost figures for
//!   every catalog fixture type
//! - **Placement**: a uniform ceiling grid for the preferred fixture
//!
//! ## Quick Start
//!
//! ```rust
//! use lux_lite_core::{plan, FixtureType, PlanRequest, RoomSpec, RoomType, UsageProfile};
//!
//! let room = RoomSpec::new(4.0, 3.0, 2.4, RoomType::LivingRoom);
//! let request = PlanRequest::new(room, FixtureType::LedBulb);
//! let plan = plan(&request, &UsageProfile::default()).unwrap();
//!
//! assert_eq!(plan.positions.len() as u32, plan.fixture_count);
//! for entry in &plan.recommendations {
//!     println!("{}: {:.0}", entry.description, entry.energy_metrics.total_cost);
//! }
//! ```

pub mod analysis;
pub mod catalog;
pub mod color;
pub mod error;
pub mod formulas;
pub mod placement;
pub mod recommend;
pub mod room;

pub use analysis::{analyze, plan, LightingPlan, PlanRequest, ReportData, RoomAnalysis};
pub use catalog::{
    FixtureSpec, FixtureType, MountStyle, MountingType, Orientation, ReflectanceBand, RoomType,
    MAX_RECOMMENDED_FIXTURES, MAX_WINDOWS, ROOM_HEIGHT_RANGE, ROOM_SIDE_RANGE,
    WINDOW_HEIGHT_RANGE, WINDOW_WIDTH_RANGE,
};
pub use color::Rgb;
pub use error::{Error, Result};
pub use placement::{
    fixture_positions, grid_positions, FixturePosition, GridLayout, MAX_PLACED_FIXTURES,
};
pub use recommend::{
    energy_metrics, fixture_count, recommend_fixtures, EnergyMetrics, RecommendationEntry,
    Recommendations, UsageProfile,
};
pub use room::RoomSpec;
