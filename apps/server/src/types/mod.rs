// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Type definitions for API responses.
//!
//! Request bodies reuse `lux_lite_core::PlanRequest` directly.

mod catalog;

pub use catalog::{CatalogResponse, FixtureInfo, OrientationInfo, RoomTypeInfo};
