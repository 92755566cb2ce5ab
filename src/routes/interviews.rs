use axum::{
    http::{Method, StatusCode},
    response::Response,
};
use bytes::Bytes;
use tracing::info;

use crate::dto::api_dto::{ApiParams, StatusMessage};
use crate::dto::interview_dto::{
    CreateInterviewPayload, InterviewCreatedResponse, InterviewListResponse, InterviewResponse,
};
use crate::error::{Error, Result};
use crate::routes::{json, parse_body, target_id};
use crate::utils::validation::{non_blank, parse_uuid, validate};
use crate::AppState;

pub async fn handle(
    state: &AppState,
    method: &Method,
    params: &ApiParams,
    body: Bytes,
) -> Result<Response> {
    match *method {
        Method::GET => list_interviews(state, params).await,
        Method::POST => schedule_interview(state, parse_body(&body)?).await,
        Method::DELETE => delete_interview(state, &target_id(params, &body)?).await,
        _ => Err(Error::MethodNotAllowed),
    }
}

async fn list_interviews(state: &AppState, params: &ApiParams) -> Result<Response> {
    let user_id = non_blank(params.user_id.clone())
        .map(|raw| parse_uuid(&raw, "user_id"))
        .transpose()?;
    let job_id = non_blank(params.job_id.clone());

    let interviews = state
        .interview_service
        .list(user_id, job_id.as_deref())
        .await?;
    let interviews = interviews.into_iter().map(InterviewResponse::from).collect();
    Ok(json(StatusCode::OK, InterviewListResponse { interviews }))
}

async fn schedule_interview(state: &AppState, payload: CreateInterviewPayload) -> Result<Response> {
    validate(&payload)?;
    let interview = state.interview_service.create(payload.into_new()?).await?;

    info!(
        interview_id = interview.id,
        user_id = %interview.user_id,
        job_id = %interview.job_id,
        "interview scheduled"
    );
    Ok(json(StatusCode::CREATED, InterviewCreatedResponse::from(interview)))
}

async fn delete_interview(state: &AppState, raw_id: &str) -> Result<Response> {
    let id: i64 = raw_id
        .trim()
        .parse()
        .map_err(|_| Error::BadRequest(format!("Invalid id: {}", raw_id)))?;
    if !state.interview_service.delete(id).await? {
        return Err(Error::NotFound("Interview not found".to_string()));
    }

    info!(interview_id = id, "interview deleted");
    Ok(json(
        StatusCode::OK,
        StatusMessage::new("Interview deleted successfully"),
    ))
}
