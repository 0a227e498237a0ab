// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Catalog endpoint.

use crate::types::CatalogResponse;
use crate::AppState;
use axum::{extract::State, Json};

/// GET /api/v1/catalog - Lookup tables behind every estimate.
pub async fn list(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse::build(state.usage))
}
