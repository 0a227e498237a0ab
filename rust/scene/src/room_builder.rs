// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room preview generation from a lighting plan

use crate::types::{
    FixtureMarker, LightCloud, LightShape, MarkerSymbol, Point3D, RoomBounds, RoomScene,
    SceneLayout, Surface, SurfaceFill, SurfaceKind,
};
use lux_lite_core::{FixturePosition, LightingPlan, MountStyle, MountingType, Rgb};
use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

const FLOOR_DARK: Rgb = Rgb::new(0x8B, 0x45, 0x13);
const FLOOR_LIGHT: Rgb = Rgb::new(0xDE, 0xB8, 0x87);
const MARKER_FILL: Rgb = Rgb::new(0xFF, 0xFF, 0x00);
const MARKER_OUTLINE: Rgb = Rgb::new(0xFF, 0xA5, 0x00);

const CONE_ANGLE_STEPS: usize = 30;
const CONE_RADIUS_STEPS: usize = 20;
/// Cone spread relative to the mounting height
const CONE_MAX_RADIUS: f64 = 1.2;
const BEAM_STEPS: usize = 20;
/// Beam sits this far in front of the fixture along x
const BEAM_OFFSET: f64 = 0.5;

/// Everything the preview needs, borrowed from the caller
#[derive(Debug, Clone, Copy)]
pub struct SceneInput<'a> {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub positions: &'a [FixturePosition],
    pub wall_color: Rgb,
    pub ceiling_color: Rgb,
    pub mounting_type: MountingType,
}

impl<'a> SceneInput<'a> {
    pub fn from_plan(plan: &'a LightingPlan) -> Self {
        Self {
            length: plan.room.length,
            width: plan.room.width,
            height: plan.room.height,
            positions: &plan.positions,
            wall_color: plan.room.wall_color,
            ceiling_color: plan.room.ceiling_color,
            mounting_type: plan.mounting_type,
        }
    }
}

/// Build the room preview: six surfaces, one marker per fixture and, for
/// mountings that have one, a light sketch per fixture.
pub fn build_room_scene(input: &SceneInput<'_>) -> RoomScene {
    let style = input.mounting_type.style();

    let mut markers = Vec::with_capacity(input.positions.len());
    let mut light = Vec::with_capacity(input.positions.len());

    for (index, position) in input.positions.iter().enumerate() {
        let marker = fixture_marker(position, style, input.height);
        light.extend(light_cloud(input.mounting_type, &marker.position, index));
        markers.push(marker);
    }

    tracing::debug!(
        markers = markers.len(),
        clouds = light.len(),
        mounting = %input.mounting_type,
        "Built room scene"
    );

    RoomScene {
        bounds: RoomBounds {
            length: input.length,
            width: input.width,
            height: input.height,
        },
        surfaces: room_surfaces(input),
        markers,
        light,
        layout: SceneLayout::default(),
    }
}

/// Shortcut for [`build_room_scene`] on a finished plan
pub fn scene_from_plan(plan: &LightingPlan) -> RoomScene {
    build_room_scene(&SceneInput::from_plan(plan))
}

/// Downward cone for ceiling and pendant fixtures, a flat beam for wall
/// fixtures. Surface, cove and under-cabinet fixtures get no sketch.
fn light_cloud(mounting: MountingType, at: &Point3D, index: usize) -> Option<LightCloud> {
    match mounting {
        MountingType::CeilingMounted | MountingType::RecessedCeiling | MountingType::Pendant => {
            Some(cone_cloud(at, index))
        }
        MountingType::WallMounted => Some(beam_cloud(at, index)),
        MountingType::SurfaceMounted | MountingType::CoveLighting | MountingType::UnderCabinet => {
            None
        }
    }
}

fn room_surfaces(input: &SceneInput<'_>) -> Vec<Surface> {
    let (l, w, h) = (input.length, input.width, input.height);
    let p = Point3D::new;
    let wall = SurfaceFill::Solid {
        color: input.wall_color,
    };

    vec![
        Surface {
            kind: SurfaceKind::Floor,
            corners: [p(0.0, 0.0, 0.0), p(l, 0.0, 0.0), p(l, w, 0.0), p(0.0, w, 0.0)],
            fill: SurfaceFill::Gradient {
                from: FLOOR_DARK,
                to: FLOOR_LIGHT,
            },
        },
        Surface {
            kind: SurfaceKind::Ceiling,
            corners: [p(0.0, 0.0, h), p(l, 0.0, h), p(l, w, h), p(0.0, w, h)],
            fill: SurfaceFill::Solid {
                color: input.ceiling_color,
            },
        },
        Surface {
            kind: SurfaceKind::FrontWall,
            corners: [p(0.0, 0.0, 0.0), p(l, 0.0, 0.0), p(l, 0.0, h), p(0.0, 0.0, h)],
            fill: wall,
        },
        Surface {
            kind: SurfaceKind::RightWall,
            corners: [p(l, 0.0, 0.0), p(l, w, 0.0), p(l, w, h), p(l, 0.0, h)],
            fill: wall,
        },
        Surface {
            kind: SurfaceKind::LeftWall,
            corners: [p(0.0, 0.0, 0.0), p(0.0, w, 0.0), p(0.0, w, h), p(0.0, 0.0, h)],
            fill: wall,
        },
        Surface {
            kind: SurfaceKind::BackWall,
            corners: [p(0.0, w, 0.0), p(l, w, 0.0), p(l, w, h), p(0.0, w, h)],
            fill: wall,
        },
    ]
}

/// Markers ignore the placed z and use the display height of the mounting:
/// ceiling at the ceiling, wall at 80 %, pendants at 90 % of room height.
fn fixture_marker(position: &FixturePosition, style: MountStyle, height: f64) -> FixtureMarker {
    let (z, symbol) = match style {
        MountStyle::Ceiling => (height, MarkerSymbol::Diamond),
        MountStyle::Wall => (height * 0.8, MarkerSymbol::Diamond),
        MountStyle::Pendant => (height * 0.9, MarkerSymbol::Circle),
    };

    FixtureMarker {
        position: Point3D::new(position.x, position.y, z),
        style,
        symbol,
        size: 12.0,
        color: MARKER_FILL,
        outline_color: MARKER_OUTLINE,
        outline_width: 2.0,
    }
}

/// `steps` evenly spaced samples over [start, end], both ends included
fn linspace(start: f64, end: f64, steps: usize) -> impl Iterator<Item = f64> {
    let span = end - start;
    let last = steps.saturating_sub(1).max(1) as f64;
    (0..steps).map(move |i| start + span * i as f64 / last)
}

/// Cone widening downward, radius proportional to the mounting height
fn cone_cloud(apex: &Point3D, fixture_index: usize) -> LightCloud {
    let origin = apex.to_nalgebra();
    let drop = apex.z;
    let mut points = Vec::with_capacity(CONE_ANGLE_STEPS * CONE_RADIUS_STEPS);

    for r in linspace(0.0, CONE_MAX_RADIUS, CONE_RADIUS_STEPS) {
        for theta in linspace(0.0, 2.0 * PI, CONE_ANGLE_STEPS) {
            let offset = Vector3::new(r * theta.cos() * drop, r * theta.sin() * drop, -r * drop);
            points.push(Point3D::from_nalgebra(&(origin + offset)));
        }
    }

    LightCloud {
        shape: LightShape::Cone,
        fixture_index,
        points,
        color: MARKER_FILL,
        opacity: 0.1,
        point_size: 2.0,
    }
}

/// Vertical sheet 2 m wide and 1 m tall in front of a wall fixture
fn beam_cloud(source: &Point3D, fixture_index: usize) -> LightCloud {
    let center: Point3<f64> = source.to_nalgebra() + Vector3::new(BEAM_OFFSET, 0.0, 0.0);
    let mut points = Vec::with_capacity(BEAM_STEPS * BEAM_STEPS);

    for dz in linspace(-0.5, 0.5, BEAM_STEPS) {
        for dy in linspace(-1.0, 1.0, BEAM_STEPS) {
            let p = center + Vector3::new(0.0, dy, dz);
            points.push(Point3D::from_nalgebra(&p));
        }
    }

    LightCloud {
        shape: LightShape::Beam,
        fixture_index,
        points,
        color: MARKER_FILL,
        opacity: 0.1,
        point_size: 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn input(positions: &[FixturePosition], mounting_type: MountingType) -> SceneInput<'_> {
        SceneInput {
            length: 4.0,
            width: 3.0,
            height: 2.4,
            positions,
            wall_color: Rgb::new(0xEE, 0xEE, 0xDD),
            ceiling_color: Rgb::WHITE,
            mounting_type,
        }
    }

    #[test]
    fn test_linspace_includes_ends() {
        let values: Vec<f64> = linspace(0.0, 1.2, 20).collect();
        assert_eq!(values.len(), 20);
        assert_eq!(values[0], 0.0);
        assert_relative_eq!(values[19], 1.2);
        assert_eq!(linspace(3.0, 5.0, 1).collect::<Vec<_>>(), vec![3.0]);
    }

    #[test]
    fn test_surfaces_use_room_colors() {
        let scene = build_room_scene(&input(&[], MountingType::CeilingMounted));
        assert_eq!(scene.surfaces.len(), 6);
        assert!(scene.markers.is_empty());

        let ceiling = scene
            .surfaces
            .iter()
            .find(|s| s.kind == SurfaceKind::Ceiling)
            .unwrap();
        assert_eq!(ceiling.fill, SurfaceFill::Solid { color: Rgb::WHITE });
        for corner in &ceiling.corners {
            assert_eq!(corner.z, 2.4);
        }

        let walls = scene
            .surfaces
            .iter()
            .filter(|s| s.fill == SurfaceFill::Solid { color: Rgb::new(0xEE, 0xEE, 0xDD) })
            .count();
        assert_eq!(walls, 4);
    }

    #[test]
    fn test_marker_heights_follow_mounting() {
        let positions = [FixturePosition::new(2.0, 1.5, 2.4)];
        let height = |mounting| build_room_scene(&input(&positions, mounting)).markers[0].position.z;

        assert_relative_eq!(height(MountingType::CeilingMounted), 2.4);
        assert_relative_eq!(height(MountingType::RecessedCeiling), 2.4);
        assert_relative_eq!(height(MountingType::WallMounted), 2.4 * 0.8);
        assert_relative_eq!(height(MountingType::Pendant), 2.4 * 0.9);
        assert_relative_eq!(height(MountingType::UnderCabinet), 2.4 * 0.9);
    }

    #[test]
    fn test_cone_and_beam_clouds() {
        let positions = [
            FixturePosition::new(1.0, 1.0, 2.4),
            FixturePosition::new(3.0, 2.0, 2.4),
        ];

        let ceiling = build_room_scene(&input(&positions, MountingType::CeilingMounted));
        assert_eq!(ceiling.light.len(), 2);
        let cone = &ceiling.light[1];
        assert_eq!(cone.shape, LightShape::Cone);
        assert_eq!(cone.fixture_index, 1);
        assert_eq!(cone.points.len(), 600);
        // r = 0 collapses onto the fixture
        assert_eq!(cone.points[0], Point3D::new(3.0, 2.0, 2.4));

        let wall = build_room_scene(&input(&positions, MountingType::WallMounted));
        let beam = &wall.light[0];
        assert_eq!(beam.shape, LightShape::Beam);
        assert_eq!(beam.points.len(), 400);
        for p in &beam.points {
            assert_relative_eq!(p.x, 1.5);
            assert!(p.y >= -1e-12 && p.y <= 2.0 + 1e-12);
        }
    }

    #[test]
    fn test_no_light_sketch_for_surface_cove_and_cabinet() {
        let positions = [
            FixturePosition::new(1.0, 1.0, 2.4),
            FixturePosition::new(3.0, 2.0, 2.4),
        ];
        for mounting in [
            MountingType::SurfaceMounted,
            MountingType::CoveLighting,
            MountingType::UnderCabinet,
        ] {
            let scene = build_room_scene(&input(&positions, mounting));
            assert_eq!(scene.markers.len(), 2, "{mounting}");
            assert!(scene.light.is_empty(), "{mounting}");
        }

        let recessed = build_room_scene(&input(&positions, MountingType::RecessedCeiling));
        assert_eq!(recessed.light.len(), 2);
        assert!(recessed.light.iter().all(|c| c.shape == LightShape::Cone));
        let pendant = build_room_scene(&input(&positions, MountingType::Pendant));
        assert!(pendant.light.iter().all(|c| c.shape == LightShape::Cone));
    }

    #[test]
    fn test_markers_stay_in_room() {
        let positions = lux_lite_core::grid_positions(7, 4.0, 3.0, 2.4);
        for mounting in MountingType::ALL {
            let scene = build_room_scene(&input(&positions, *mounting));
            assert_eq!(scene.markers.len(), 7);
            for marker in &scene.markers {
                let p = marker.position;
                assert!(p.x > 0.0 && p.x < 4.0);
                assert!(p.y > 0.0 && p.y < 3.0);
                assert!(p.z > 0.0 && p.z <= 2.4);
            }
        }
    }
}
