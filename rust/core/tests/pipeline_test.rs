// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end checks of the analysis pipeline through the public API.

use approx::assert_relative_eq;
use lux_lite_core::{
    analyze, plan, Error, FixtureType, MountingType, Orientation, PlanRequest, Rgb, RoomSpec,
    RoomType, UsageProfile, MAX_RECOMMENDED_FIXTURES,
};

fn living_room() -> RoomSpec {
    RoomSpec::new(4.0, 3.0, 2.4, RoomType::LivingRoom)
}

#[test]
fn test_reference_living_room() {
    let analysis = analyze(&living_room()).unwrap();

    // (4 * 0.8 + 0.8 + 0.3) / 6 for white walls and ceiling
    assert_relative_eq!(analysis.reflectance, 0.716_666_666_666, epsilon = 1e-9);
    assert_relative_eq!(analysis.required_lumens, 3600.0 / (0.8 + 4.3 / 6.0), epsilon = 1e-9);
    assert_relative_eq!(analysis.volume, 28.8, epsilon = 1e-12);
}

#[test]
fn test_dark_walls_need_more_light() {
    let white = analyze(&living_room()).unwrap();
    let dark = analyze(&living_room().with_colors(Rgb::new(40, 30, 30), Rgb::WHITE)).unwrap();
    assert!(dark.reflectance < white.reflectance);
    assert!(dark.required_lumens > white.required_lumens);
}

#[test]
fn test_orientation_ordering() {
    let lumens = |orientation| {
        let room = living_room().with_windows(2, 1.2, 1.5, orientation);
        analyze(&room).unwrap().required_lumens
    };
    assert!(lumens(Orientation::South) < lumens(Orientation::East));
    assert_relative_eq!(lumens(Orientation::East), lumens(Orientation::West));
    assert!(lumens(Orientation::East) < lumens(Orientation::North));
}

#[test]
fn test_huge_windows_clamp_to_zero() {
    // 6 windows of 2 x 2 m in a 12 m² south room: factor 2.0
    let room = living_room().with_windows(6, 2.0, 2.0, Orientation::South);
    let request = PlanRequest::new(room, FixtureType::LedPanel);
    let plan = plan(&request, &UsageProfile::default()).unwrap();

    assert!(plan.analysis.natural_light_factor > 1.0);
    assert_eq!(plan.analysis.required_lumens, 0.0);
    assert_eq!(plan.recommendations.len(), FixtureType::ALL.len());
    for entry in &plan.recommendations {
        assert_eq!(entry.count, 1);
    }
    assert_eq!(plan.positions.len(), 1);
}

#[test]
fn test_big_kitchen_excludes_small_fixtures() {
    let room = RoomSpec::new(8.0, 6.0, 3.0, RoomType::Kitchen)
        .with_colors(Rgb::new(90, 90, 90), Rgb::new(200, 200, 200));
    let request = PlanRequest::new(room, FixtureType::LedBulb)
        .with_mounting(MountingType::Pendant);
    let plan = plan(&request, &UsageProfile::default()).unwrap();

    assert!(plan.analysis.required_lumens > 8000.0);
    assert!(!plan.recommendations.contains(FixtureType::LedBulb));
    for entry in &plan.recommendations {
        assert!(entry.count <= MAX_RECOMMENDED_FIXTURES);
    }

    // The preferred fixture is still placed even when it is not recommended
    assert!(plan.fixture_count > MAX_RECOMMENDED_FIXTURES);
    assert_eq!(plan.positions.len() as u32, plan.fixture_count);
    for p in &plan.positions {
        assert!(p.x > 0.0 && p.x < 8.0);
        assert!(p.y > 0.0 && p.y < 6.0);
        assert_eq!(p.z, 3.0);
    }
}

#[test]
fn test_usage_profile_scales_costs() {
    let request = PlanRequest::new(living_room(), FixtureType::LedDownlight);
    let base = plan(&request, &UsageProfile::default()).unwrap();
    let pricier = plan(
        &request,
        &UsageProfile {
            cost_per_kwh: 16.0,
            ..UsageProfile::default()
        },
    )
    .unwrap();

    let a = base.recommendations.get(FixtureType::LedDownlight).unwrap();
    let b = pricier.recommendations.get(FixtureType::LedDownlight).unwrap();
    assert_relative_eq!(b.energy_metrics.annual_cost, 2.0 * a.energy_metrics.annual_cost);
    assert_eq!(a.energy_metrics.initial_cost, b.energy_metrics.initial_cost);
}

#[test]
fn test_invalid_color_from_json() {
    let err = serde_json::from_str::<PlanRequest>(
        r#"{"length": 4, "width": 3, "height": 2.4, "room_type": "Bedroom",
            "wall_color": "not-a-color", "preferred_fixture": "LED Bulb"}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("Invalid color format"));

    assert_eq!(
        "#12".parse::<Rgb>(),
        Err(Error::InvalidColorFormat("#12".into()))
    );
}

#[test]
fn test_plan_serializes() {
    let plan = plan(
        &PlanRequest::new(living_room(), FixtureType::LedBulb),
        &UsageProfile::default(),
    )
    .unwrap();
    let value = serde_json::to_value(&plan).unwrap();

    assert_eq!(value["preferred_fixture"], "LED Bulb");
    assert_eq!(value["mounting_type"], "Ceiling Mounted");
    assert_eq!(value["room"]["wall_color"], "#FFFFFF");
    assert_eq!(value["positions"].as_array().unwrap().len(), 3);
    assert_eq!(value["recommendations"]["LED Bulb"]["description"], "3 x LED Bulbs");
}
