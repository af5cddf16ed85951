//! Photo CRUD route handlers.
//!
//! Bodies are parsed into [`PhotoPayload`] and checked here before the store
//! is touched: a malformed body, a missing or empty `title`/`url`, or a path
//! id that is not a positive integer all become 422 responses. Lookups of
//! well-formed ids that do not exist surface as 404 from the store.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use pb_core::ids::ParsePhotoIdError;
use pb_core::{Error, PhotoId, PhotoInput, PhotoRecord};

use crate::context::AppContext;
use crate::error::{AppError, ErrorBody};

/// Request body for create and update.
///
/// Every field is optional at the serde level so that missing fields can be
/// reported by name instead of as a generic deserialization failure.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct PhotoPayload {
    #[schema(required = true)]
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(required = true)]
    pub url: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PhotoPayload {
    /// Check required fields and normalize defaults.
    pub fn into_input(self) -> pb_core::Result<PhotoInput> {
        let mut problems = Vec::new();
        let title = required("title", self.title, &mut problems);
        let url = required("url", self.url, &mut problems);

        if !problems.is_empty() {
            return Err(Error::validation(problems.join("; ")));
        }

        Ok(PhotoInput {
            title,
            description: self.description,
            url,
            tags: self.tags.unwrap_or_default(),
        })
    }
}

fn required(field: &str, value: Option<String>, problems: &mut Vec<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        Some(_) => {
            problems.push(format!("{field} must not be empty"));
            String::new()
        }
        None => {
            problems.push(format!("{field} is required"));
            String::new()
        }
    }
}

/// Response body for a successful delete.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DeletedPhotoResponse {
    pub message: String,
    pub deleted_photo: PhotoRecord,
}

fn parse_id(raw: &str) -> Result<PhotoId, AppError> {
    raw.parse()
        .map_err(|e: ParsePhotoIdError| AppError(Error::validation(e.to_string())))
}

fn parse_body(body: Result<Json<PhotoPayload>, JsonRejection>) -> Result<PhotoInput, AppError> {
    let Json(payload) = body.map_err(|rejection| {
        Error::validation(format!("invalid body: {}", rejection.body_text()))
    })?;
    Ok(payload.into_input()?)
}

/// GET /photos
#[utoipa::path(
    get,
    path = "/photos",
    params(("tag" = Option<String>, Query, description = "Only photos carrying this exact tag")),
    responses(
        (status = 200, description = "List photos", body = Vec<PhotoRecord>)
    )
)]
pub async fn list_photos(
    State(ctx): State<AppContext>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<Vec<PhotoRecord>> {
    Json(ctx.store.list(last_tag(&pairs)))
}

/// A repeated `tag` key resolves to its last value.
fn last_tag(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .rev()
        .find(|(key, _)| key == "tag")
        .map(|(_, value)| value.as_str())
}

/// GET /photos/{id}
#[utoipa::path(
    get,
    path = "/photos/{id}",
    params(("id" = u64, Path, description = "Photo ID")),
    responses(
        (status = 200, description = "Photo details", body = PhotoRecord),
        (status = 404, description = "Photo not found", body = ErrorBody),
        (status = 422, description = "Malformed id", body = ErrorBody)
    )
)]
pub async fn get_photo(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<PhotoRecord>, AppError> {
    let id = parse_id(&id)?;
    Ok(Json(ctx.store.get(id)?))
}

/// POST /photos
#[utoipa::path(
    post,
    path = "/photos",
    request_body = PhotoPayload,
    responses(
        (status = 201, description = "Photo created", body = PhotoRecord),
        (status = 422, description = "Invalid body", body = ErrorBody)
    )
)]
pub async fn create_photo(
    State(ctx): State<AppContext>,
    body: Result<Json<PhotoPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<PhotoRecord>), AppError> {
    let input = parse_body(body)?;
    let record = ctx.store.create(input);
    tracing::info!(photo_id = %record.id, "Created photo");
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /photos/{id}
#[utoipa::path(
    put,
    path = "/photos/{id}",
    params(("id" = u64, Path, description = "Photo ID")),
    request_body = PhotoPayload,
    responses(
        (status = 200, description = "Photo updated", body = PhotoRecord),
        (status = 404, description = "Photo not found", body = ErrorBody),
        (status = 422, description = "Invalid id or body", body = ErrorBody)
    )
)]
pub async fn update_photo(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
    body: Result<Json<PhotoPayload>, JsonRejection>,
) -> Result<Json<PhotoRecord>, AppError> {
    let id = parse_id(&id)?;
    let input = parse_body(body)?;
    let record = ctx.store.update(id, input)?;
    tracing::info!(photo_id = %id, "Updated photo");
    Ok(Json(record))
}

/// DELETE /photos/{id}
#[utoipa::path(
    delete,
    path = "/photos/{id}",
    params(("id" = u64, Path, description = "Photo ID")),
    responses(
        (status = 200, description = "Photo deleted", body = DeletedPhotoResponse),
        (status = 404, description = "Photo not found", body = ErrorBody),
        (status = 422, description = "Malformed id", body = ErrorBody)
    )
)]
pub async fn delete_photo(
    State(ctx): State<AppContext>,
    Path(id): Path<String>,
) -> Result<Json<DeletedPhotoResponse>, AppError> {
    let id = parse_id(&id)?;
    let deleted = ctx.store.delete(id)?;
    tracing::info!(photo_id = %id, "Deleted photo");
    Ok(Json(DeletedPhotoResponse {
        message: format!("Photo {id} deleted successfully"),
        deleted_photo: deleted,
    }))
}
