// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! PDF reports for lux-lite lighting plans
//!
//! Writes a paginated A4 "Room Illumination Analysis Report" with the room
//! specifications, the lighting analysis and one block per recommended
//! fixture type. Text uses the standard Helvetica fonts, so the output
//! needs no embedded font data.
//!
//! ```rust,ignore
//! use lux_lite_core::{plan, FixtureType, PlanRequest, RoomSpec, RoomType, UsageProfile};
//! use lux_lite_report::render_report;
//!
//! let request = PlanRequest::new(RoomSpec::new(4.0, 3.0, 2.4, RoomType::Kitchen), FixtureType::LedPanel);
//! let plan = plan(&request, &UsageProfile::default())?;
//! let pdf = render_report(&plan.report_data(), &plan.recommendations)?;
//! std::fs::write("report.pdf", pdf)?;
//! ```

pub mod error;
pub mod fonts;
pub mod format;
pub mod layout;
pub mod report;

pub use error::{ReportError, Result};
pub use layout::{Align, PageLayout};
pub use report::{render_report, REPORT_FILE_NAME, REPORT_TITLE};
