// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room illumination report
//!
//! Page 1 holds the room specifications and the lighting analysis, the
//! fixture recommendations start on page 2 and flow onto further pages as
//! needed.

use crate::error::Result;
use crate::fonts::FontStyle;
use crate::format::{meters, money, quantity};
use crate::layout::{Align, PageLayout, LINE_HEIGHT};
use lux_lite_core::{RecommendationEntry, Recommendations, ReportData};

pub const REPORT_TITLE: &str = "Room Illumination Analysis Report";
/// File name offered for download
pub const REPORT_FILE_NAME: &str = "room_illumination_report.pdf";

const SECTION_SIZE: f64 = 12.0;
const FIXTURE_SIZE: f64 = 11.0;
const BODY_SIZE: f64 = 10.0;
const FIXTURE_GAP: f64 = 5.0;

/// Render the report for `data` and its `recommendations` as PDF bytes
pub fn render_report(data: &ReportData, recommendations: &Recommendations) -> Result<Vec<u8>> {
    let mut layout = PageLayout::new(REPORT_TITLE);
    layout.add_page();

    section(&mut layout, "Room Specifications:");
    layout.line(&format!(
        "Dimensions: {}m x {}m x {}m",
        meters(data.length),
        meters(data.width),
        meters(data.height)
    ));
    layout.line(&format!("Room Type: {}", data.room_type));
    layout.line(&format!("Total Area: {:.1} m²", data.area));
    layout.line(&format!("Mounting Type: {}", data.mounting_type));

    section(&mut layout, "Lighting Analysis:");
    layout.line(&format!(
        "Required Illuminance: {} lux",
        quantity(data.required_illuminance)
    ));
    layout.line(&format!(
        "Required Artificial Light: {:.0} lumens",
        data.required_lumens
    ));
    layout.line(&format!(
        "Natural Light Contribution: {:.1}%",
        data.natural_light_factor * 100.0
    ));
    layout.line(&format!("Surface Reflectance: {:.2}", data.reflectance));

    layout.add_page();
    section(&mut layout, "Recommended Lighting Solutions:");
    if recommendations.is_empty() {
        layout.line("No fixture type covers this room with 8 or fewer units.");
    }
    for entry in recommendations {
        fixture_block(&mut layout, entry);
    }

    tracing::debug!(
        room_type = %data.room_type,
        fixtures = recommendations.len(),
        pages = layout.page_count(),
        "Rendered room report"
    );
    layout.finish()
}

fn section(layout: &mut PageLayout, title: &str) {
    layout.set_font(FontStyle::Bold, SECTION_SIZE);
    layout.line(title);
    layout.set_font(FontStyle::Regular, BODY_SIZE);
}

fn fixture_block(layout: &mut PageLayout, entry: &RecommendationEntry) {
    let metrics = &entry.energy_metrics;

    layout.ln(FIXTURE_GAP);
    layout.set_font(FontStyle::Bold, FIXTURE_SIZE);
    layout.cell(entry.fixture_type.as_str(), LINE_HEIGHT, Align::Left, true);
    layout.set_font(FontStyle::Regular, BODY_SIZE);

    layout.line(&format!("Configuration: {}", entry.description));
    layout.line(&format!("Initial Cost: {}", money(metrics.initial_cost)));
    layout.line(&format!(
        "Installation Cost: {}",
        money(metrics.installation_cost)
    ));
    layout.line(&format!(
        "Annual Energy Consumption: {:.1} kWh",
        metrics.annual_energy_kwh
    ));
    layout.line(&format!("Annual Energy Cost: {}", money(metrics.annual_cost)));
    layout.line(&format!(
        "Energy Efficiency: {} lumens/watt",
        quantity(entry.specs.efficacy)
    ));
    layout.line(&format!(
        "Expected Lifetime: {:.1} years",
        metrics.lifetime_years
    ));
    layout.line(&format!(
        "Total Cost of Ownership: {}",
        money(metrics.total_cost)
    ));
}
