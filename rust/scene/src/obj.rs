// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wavefront OBJ export of a room scene
//!
//! Surfaces become quads with one normal each, fixture markers and light
//! clouds become point elements. Scene coordinates are Z-up and are
//! converted to the Y-up OBJ convention:
//!
//! - OBJ X =  scene X (length)
//! - OBJ Y =  scene Z (height)
//! - OBJ Z = -scene Y (width, negated so the plan is not mirrored)

use crate::types::{Point3D, RoomScene, SurfaceKind};
use nalgebra::Vector3;
use std::io::{self, Write};

fn y_up(p: &Point3D) -> (f64, f64, f64) {
    (p.x, p.z, -p.y)
}

fn surface_name(kind: SurfaceKind) -> &'static str {
    match kind {
        SurfaceKind::Floor => "floor",
        SurfaceKind::Ceiling => "ceiling",
        SurfaceKind::FrontWall => "wall_front",
        SurfaceKind::RightWall => "wall_right",
        SurfaceKind::LeftWall => "wall_left",
        SurfaceKind::BackWall => "wall_back",
    }
}

/// Write `scene` as OBJ text. Set `include_light` to also export the light
/// clouds (a few hundred points per fixture).
pub fn write_obj<W: Write>(scene: &RoomScene, out: &mut W, include_light: bool) -> io::Result<()> {
    writeln!(out, "# Generated by lux-lite")?;
    writeln!(
        out,
        "# Room: {:.2}m x {:.2}m x {:.2}m, {} fixtures",
        scene.bounds.length,
        scene.bounds.width,
        scene.bounds.height,
        scene.markers.len()
    )?;
    writeln!(out, "# Coordinate system: Y-up (OBJ convention)")?;
    writeln!(out)?;

    let mut vertex_offset = 0usize;
    let mut normal_offset = 0usize;

    for surface in &scene.surfaces {
        writeln!(out, "o {}", surface_name(surface.kind))?;
        for corner in &surface.corners {
            let (x, y, z) = y_up(corner);
            writeln!(out, "v {:.6} {:.6} {:.6}", x, y, z)?;
        }

        let [a, b, c, _] = surface.corners.map(|p| p.to_nalgebra());
        let normal: Vector3<f64> = (b - a).cross(&(c - a)).normalize();
        writeln!(out, "vn {:.6} {:.6} {:.6}", normal.x, normal.z, -normal.y)?;

        let n = normal_offset + 1;
        let i = vertex_offset + 1;
        // Reverse winding order to compensate for the axis flip (negated Z)
        writeln!(
            out,
            "f {}//{} {}//{} {}//{} {}//{}",
            i,
            n,
            i + 3,
            n,
            i + 2,
            n,
            i + 1,
            n
        )?;

        vertex_offset += 4;
        normal_offset += 1;
        writeln!(out)?;
    }

    if !scene.markers.is_empty() {
        writeln!(out, "o fixtures")?;
        for marker in &scene.markers {
            let (x, y, z) = y_up(&marker.position);
            writeln!(out, "v {:.6} {:.6} {:.6}", x, y, z)?;
        }
        for i in 0..scene.markers.len() {
            writeln!(out, "p {}", vertex_offset + i + 1)?;
        }
        vertex_offset += scene.markers.len();
        writeln!(out)?;
    }

    if include_light {
        for cloud in &scene.light {
            writeln!(out, "o light_{}", cloud.fixture_index)?;
            for point in &cloud.points {
                let (x, y, z) = y_up(point);
                writeln!(out, "v {:.6} {:.6} {:.6}", x, y, z)?;
            }
            for i in 0..cloud.points.len() {
                writeln!(out, "p {}", vertex_offset + i + 1)?;
            }
            vertex_offset += cloud.points.len();
            writeln!(out)?;
        }
    }

    Ok(())
}

/// OBJ text for `scene` without the light clouds
pub fn to_obj_string(scene: &RoomScene) -> String {
    let mut buffer = Vec::new();
    write_obj(scene, &mut buffer, false).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room_builder::{build_room_scene, SceneInput};
    use lux_lite_core::{grid_positions, MountingType, Rgb};

    fn scene(mounting_type: MountingType) -> RoomScene {
        let positions = grid_positions(3, 4.0, 3.0, 2.4);
        build_room_scene(&SceneInput {
            length: 4.0,
            width: 3.0,
            height: 2.4,
            positions: &positions,
            wall_color: Rgb::WHITE,
            ceiling_color: Rgb::WHITE,
            mounting_type,
        })
    }

    #[test]
    fn test_obj_counts() {
        let obj = to_obj_string(&scene(MountingType::CeilingMounted));
        let vertices = obj.lines().filter(|l| l.starts_with("v ")).count();
        let normals = obj.lines().filter(|l| l.starts_with("vn ")).count();
        let faces = obj.lines().filter(|l| l.starts_with("f ")).count();
        let points = obj.lines().filter(|l| l.starts_with("p ")).count();

        assert_eq!(vertices, 6 * 4 + 3);
        assert_eq!(normals, 6);
        assert_eq!(faces, 6);
        assert_eq!(points, 3);
        assert!(obj.contains("o ceiling"));
    }

    #[test]
    fn test_obj_is_y_up() {
        let obj = to_obj_string(&scene(MountingType::CeilingMounted));
        // Ceiling corners sit at OBJ y = room height
        let ceiling: Vec<&str> = obj
            .lines()
            .skip_while(|l| *l != "o ceiling")
            .skip(1)
            .take(4)
            .collect();
        for line in ceiling {
            let y: f64 = line.split_whitespace().nth(2).unwrap().parse().unwrap();
            assert!((y - 2.4).abs() < 1e-9, "{line}");
        }
    }

    #[test]
    fn test_obj_with_light_clouds() {
        let mut buffer = Vec::new();
        write_obj(&scene(MountingType::WallMounted), &mut buffer, true).unwrap();
        let obj = String::from_utf8(buffer).unwrap();
        assert_eq!(obj.lines().filter(|l| l.starts_with("o light_")).count(), 3);
        assert_eq!(obj.lines().filter(|l| l.starts_with("p ")).count(), 3 + 3 * 400);
    }
}
