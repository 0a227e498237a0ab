// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene description consumed by room viewers

use lux_lite_core::{MountStyle, Rgb};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A 3D point (simplified for serialization), Z is up
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_nalgebra(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn from_nalgebra(p: &Point3<f64>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

/// Which room boundary a surface represents
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceKind {
    Floor,
    Ceiling,
    /// Wall along y = 0
    FrontWall,
    /// Wall along x = length
    RightWall,
    /// Wall along x = 0
    LeftWall,
    /// Wall along y = width
    BackWall,
}

/// Surface paint: flat color or a two-stop gradient across the quad
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceFill {
    Solid { color: Rgb },
    Gradient { from: Rgb, to: Rgb },
}

/// Rectangular room surface, corners in winding order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Surface {
    pub kind: SurfaceKind,
    pub corners: [Point3D; 4],
    pub fill: SurfaceFill,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MarkerSymbol {
    Diamond,
    Circle,
}

/// Fixture marker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixtureMarker {
    pub position: Point3D,
    pub style: MountStyle,
    pub symbol: MarkerSymbol,
    pub size: f64,
    pub color: Rgb,
    pub outline_color: Rgb,
    pub outline_width: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LightShape {
    /// Downward cone from a ceiling or pendant fixture
    Cone,
    /// Flat beam in front of a wall fixture
    Beam,
}

/// Translucent point cloud sketching where a fixture throws its light
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightCloud {
    pub shape: LightShape,
    /// Index into the marker list
    pub fixture_index: usize,
    pub points: Vec<Point3D>,
    pub color: Rgb,
    pub opacity: f64,
    pub point_size: f64,
}

/// Viewer camera
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Camera {
    pub up: Point3D,
    pub center: Point3D,
    pub eye: Point3D,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            up: Point3D::new(0.0, 0.0, 1.0),
            center: Point3D::new(0.0, 0.0, 0.0),
            eye: Point3D::new(1.8, 1.8, 1.5),
        }
    }
}

/// Axis titles and camera
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneLayout {
    pub camera: Camera,
    /// x, y, z
    pub axis_titles: [String; 3],
    pub show_legend: bool,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            axis_titles: [
                "Length (m)".to_string(),
                "Width (m)".to_string(),
                "Height (m)".to_string(),
            ],
            show_legend: false,
        }
    }
}

/// Room extents in meters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RoomBounds {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Complete room preview
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomScene {
    pub bounds: RoomBounds,
    pub surfaces: Vec<Surface>,
    pub markers: Vec<FixtureMarker>,
    pub light: Vec<LightCloud>,
    pub layout: SceneLayout,
}
