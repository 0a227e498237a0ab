// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lighting plan endpoints: analysis, room preview and PDF report.

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use lux_lite_core::{plan, LightingPlan, PlanRequest};
use lux_lite_report::{render_report, REPORT_FILE_NAME};
use lux_lite_scene::{scene_from_plan, RoomScene};

fn plan_for(
    state: &AppState,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<LightingPlan, ApiError> {
    let Json(request) = payload?;
    let plan = plan(&request, &state.usage)?;
    tracing::info!(
        room_type = %plan.room.room_type,
        area = plan.analysis.area,
        lumens = plan.analysis.required_lumens,
        preferred = %plan.preferred_fixture,
        fixtures = plan.fixture_count,
        "Planned lighting"
    );
    Ok(plan)
}

/// POST /api/v1/analyze - Analysis, recommendations and fixture layout.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<LightingPlan>, ApiError> {
    Ok(Json(plan_for(&state, payload)?))
}

/// POST /api/v1/scene - 3D room preview for the plan.
pub async fn scene(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<RoomScene>, ApiError> {
    let plan = plan_for(&state, payload)?;
    Ok(Json(scene_from_plan(&plan)))
}

/// POST /api/v1/report - PDF report as a download.
pub async fn report(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let plan = plan_for(&state, payload)?;

    // PDF layout is CPU work, keep it off the async workers
    let pdf = tokio::task::spawn_blocking(move || {
        render_report(&plan.report_data(), &plan.recommendations)
    })
    .await??;
    tracing::debug!(bytes = pdf.len(), "Rendered report");

    let disposition =
        HeaderValue::from_str(&format!("attachment; filename=\"{}\"", REPORT_FILE_NAME))
            .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    )
        .into_response())
}
