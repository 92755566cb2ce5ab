use axum::{
    extract::{Path, Query, State},
    http::Method,
    response::Response,
};
use bytes::Bytes;

use crate::dto::api_dto::ApiParams;
use crate::error::Result;
use crate::routes::resource::Resource;
use crate::routes::{applications, interviews, jobs, login, messages, responses, users};
use crate::AppState;

/// `/api?resource=<name>`; the resource defaults to users.
pub async fn unified(
    State(state): State<AppState>,
    method: Method,
    Query(params): Query<ApiParams>,
    body: Bytes,
) -> Result<Response> {
    let resource = Resource::from_param(params.resource.as_deref())?;
    dispatch(&state, resource, &method, &params, body).await
}

/// `/api/<name>`, equivalent to the unified endpoint with `resource=<name>`.
pub async fn standalone(
    State(state): State<AppState>,
    Path(name): Path<String>,
    method: Method,
    Query(params): Query<ApiParams>,
    body: Bytes,
) -> Result<Response> {
    let resource: Resource = name.parse()?;
    dispatch(&state, resource, &method, &params, body).await
}

pub async fn dispatch(
    state: &AppState,
    resource: Resource,
    method: &Method,
    params: &ApiParams,
    body: Bytes,
) -> Result<Response> {
    tracing::debug!(%resource, %method, "dispatching request");
    match resource {
        Resource::Users => users::handle(state, method, params, body).await,
        Resource::Jobs => jobs::handle(state, method, params, body).await,
        Resource::Applications => applications::handle(state, method, params, body).await,
        Resource::Messages => messages::handle(state, method, params, body).await,
        Resource::Interviews => interviews::handle(state, method, params, body).await,
        Resource::Responses => responses::handle(state, method, params, body).await,
        Resource::Login => login::handle(state, method, params, body).await,
    }
}
