use axum::{
    http::{Method, StatusCode},
    response::Response,
};
use bytes::Bytes;
use tracing::info;

use crate::dto::api_dto::ApiParams;
use crate::dto::job_response_dto::{
    JobResponseItem, JobResponseListResponse, JobResponseRecorded, RecordResponsePayload,
};
use crate::error::{Error, Result};
use crate::routes::{json, parse_body};
use crate::AppState;

pub async fn handle(
    state: &AppState,
    method: &Method,
    _params: &ApiParams,
    body: Bytes,
) -> Result<Response> {
    match *method {
        Method::GET => list_responses(state).await,
        Method::POST => record_response(state, parse_body(&body)?).await,
        _ => Err(Error::MethodNotAllowed),
    }
}

async fn list_responses(state: &AppState) -> Result<Response> {
    let responses = state.job_response_service.list().await?;
    let responses = responses.into_iter().map(JobResponseItem::from).collect();
    Ok(json(StatusCode::OK, JobResponseListResponse { responses }))
}

async fn record_response(state: &AppState, payload: RecordResponsePayload) -> Result<Response> {
    let response = payload.into_new()?;
    let (user_id, job_id) = (response.user_id.clone(), response.job_id.clone());
    let id = state.job_response_service.record(response).await?;

    match id {
        Some(id) => info!(response_id = id, %user_id, %job_id, "job response recorded"),
        None => info!(%user_id, %job_id, "job response already recorded"),
    }
    Ok(json(
        StatusCode::CREATED,
        JobResponseRecorded { success: true, id },
    ))
}
