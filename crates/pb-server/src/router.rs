//! Axum router construction.
//!
//! Builds the application router with the photo routes, the info and health
//! endpoints, the OpenAPI document, and the middleware layers.

use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::context::AppContext;
use crate::error::ErrorBody;
use crate::middleware::request_id::request_id_middleware;
use crate::routes;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Personal Photo Blog API",
        description = "A REST API for managing a personal photo blog"
    ),
    paths(
        routes::root::api_info,
        routes::health::health_check,
        routes::photos::list_photos,
        routes::photos::get_photo,
        routes::photos::create_photo,
        routes::photos::update_photo,
        routes::photos::delete_photo,
    ),
    components(schemas(
        pb_core::PhotoRecord,
        routes::photos::PhotoPayload,
        routes::photos::DeletedPhotoResponse,
        routes::health::HealthResponse,
        routes::root::ApiInfo,
        ErrorBody,
    ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn route_not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            detail: "Not Found".to_string(),
        }),
    )
}

async fn method_not_allowed() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            detail: "Method Not Allowed".to_string(),
        }),
    )
}

/// Build the complete Axum router.
pub fn build_router(ctx: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root::api_info))
        .route("/health", get(routes::health::health_check))
        .route("/openapi.json", get(openapi_json))
        .route(
            "/photos",
            get(routes::photos::list_photos).post(routes::photos::create_photo),
        )
        .route(
            "/photos/{id}",
            get(routes::photos::get_photo)
                .put(routes::photos::update_photo)
                .delete(routes::photos::delete_photo),
        )
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
