// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room configuration echo for front-end round trips.

use crate::error::ApiError;
use axum::{extract::rejection::JsonRejection, Json};
use serde_json::{Map, Value};

/// POST /api/v1/room-config - Return the posted JSON object unchanged.
///
/// Also mounted at `/get-room-config` for older clients.
pub async fn echo(
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Map<String, Value>>, ApiError> {
    let Json(config) = payload?;
    tracing::debug!(keys = config.len(), "Echoing room configuration");
    Ok(Json(config))
}
