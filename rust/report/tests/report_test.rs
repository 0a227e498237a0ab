// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use lopdf::Document;
use lux_lite_core::{
    plan, FixtureType, Orientation, PlanRequest, Recommendations, RoomSpec, RoomType,
    UsageProfile,
};
use lux_lite_report::render_report;

fn page_count(bytes: &[u8]) -> usize {
    Document::load_mem(bytes).unwrap().get_pages().len()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[test]
fn test_fixture_blocks_flow_onto_next_page() {
    let request = PlanRequest::new(
        RoomSpec::new(4.0, 3.0, 2.4, RoomType::LivingRoom),
        FixtureType::LedBulb,
    );
    let plan = plan(&request, &UsageProfile::default()).unwrap();
    assert_eq!(plan.recommendations.len(), 4);

    let bytes = render_report(&plan.report_data(), &plan.recommendations).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    // Four blocks do not fit below the section title on page 2
    assert_eq!(page_count(&bytes), 3);
    assert!(contains(&bytes, b"(Page 3)"));
    assert!(contains(&bytes, b"(LED Downlight)"));
}

#[test]
fn test_report_without_recommendations_has_two_pages() {
    let request = PlanRequest::new(
        RoomSpec::new(12.0, 10.0, 3.0, RoomType::Kitchen),
        FixtureType::LedPanel,
    );
    let plan = plan(&request, &UsageProfile::default()).unwrap();

    let bytes = render_report(&plan.report_data(), &Recommendations::default()).unwrap();
    assert_eq!(page_count(&bytes), 2);
    assert!(contains(&bytes, b"(Required Illuminance: 500 lux)"));
}

#[test]
fn test_daylight_shows_in_report() {
    let room = RoomSpec::new(5.0, 4.0, 2.7, RoomType::Bedroom).with_windows(
        2,
        1.2,
        1.5,
        Orientation::South,
    );
    let request = PlanRequest::new(room, FixtureType::LedDownlight);
    let plan = plan(&request, &UsageProfile::default()).unwrap();
    let data = plan.report_data();
    assert!(data.natural_light_factor > 0.0);

    let bytes = render_report(&data, &plan.recommendations).unwrap();
    let expected = format!(
        "(Natural Light Contribution: {:.1}%)",
        data.natural_light_factor * 100.0
    );
    assert!(contains(&bytes, expected.as_bytes()));
    assert!(contains(&bytes, b"(Room Type: Bedroom)"));
}
