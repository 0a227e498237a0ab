// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 3D room preview for lighting plans
//!
//! Turns room dimensions, surface colors and fixture positions into a
//! viewer-neutral scene: room surfaces, fixture markers and point clouds
//! sketching each fixture's light. The scene serializes to JSON for web
//! viewers and exports to Wavefront OBJ.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lux_lite_core::{plan, FixtureType, PlanRequest, RoomSpec, RoomType, UsageProfile};
//! use lux_lite_scene::{scene_from_plan, to_obj_string};
//!
//! let request = PlanRequest::new(RoomSpec::new(4.0, 3.0, 2.4, RoomType::Bedroom), FixtureType::LedBulb);
//! let plan = plan(&request, &UsageProfile::default())?;
//! let scene = scene_from_plan(&plan);
//! std::fs::write("room.obj", to_obj_string(&scene))?;
//! ```

pub mod obj;
pub mod room_builder;
pub mod types;

pub use obj::{to_obj_string, write_obj};
pub use room_builder::{build_room_scene, scene_from_plan, SceneInput};
pub use types::{
    Camera, FixtureMarker, LightCloud, LightShape, MarkerSymbol, Point3D, RoomBounds, RoomScene,
    SceneLayout, Surface, SurfaceFill, SurfaceKind,
};

/// Scene as JSON for web viewers
pub fn scene_to_json(scene: &RoomScene) -> serde_json::Result<String> {
    serde_json::to_string(scene)
}
