//! API information endpoint.

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

/// Human-readable description of each route, keyed by `"METHOD /path"`.
const ENDPOINTS: &[(&str, &str)] = &[
    ("GET /", "API information"),
    ("GET /health", "Health check"),
    ("GET /photos", "List all photos"),
    ("GET /photos/{photo_id}", "Get a specific photo"),
    ("POST /photos", "Create a new photo"),
    ("PUT /photos/{photo_id}", "Update a photo"),
    ("DELETE /photos/{photo_id}", "Delete a photo"),
];

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API information", body = ApiInfo)
    )
)]
pub async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Welcome to Personal Photo Blog API".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        endpoints: ENDPOINTS
            .iter()
            .map(|(route, what)| ((*route).to_string(), (*what).to_string()))
            .collect(),
    })
}
