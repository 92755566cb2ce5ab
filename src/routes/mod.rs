pub mod api;
pub mod applications;
pub mod health;
pub mod interviews;
pub mod jobs;
pub mod login;
pub mod messages;
pub mod resource;
pub mod responses;
pub mod users;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use bytes::Bytes;
use serde::{de::DeserializeOwned, Serialize};

use crate::dto::api_dto::{ApiParams, IdPayload};
use crate::error::Result;
use crate::middleware::cors::portal_cors;
use crate::utils::validation::{non_blank, required};
use crate::AppState;

const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api", any(api::unified))
        .route("/api/:resource", any(api::standalone))
        .with_state(state)
        .layer(portal_cors())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

/// Decodes a JSON request body. An empty body decodes like `{}`.
pub(crate) fn parse_body<T>(body: &Bytes) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    Ok(serde_json::from_slice(body)?)
}

/// Id of a delete target: the body's `id` wins over the `id` query parameter.
pub(crate) fn target_id(params: &ApiParams, body: &Bytes) -> Result<String> {
    let payload: IdPayload = parse_body(body)?;
    required(
        non_blank(payload.id).or_else(|| non_blank(params.id.clone())),
        "id",
    )
}

pub(crate) fn json<T: Serialize>(status: StatusCode, value: T) -> Response {
    (status, Json(value)).into_response()
}
