use axum::{
    http::{Method, StatusCode},
    response::Response,
};
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::dto::api_dto::ApiParams;
use crate::dto::job_dto::{
    JobDeletedResponse, JobEnvelope, JobIdResponse, JobListResponse, JobPayload, JobResponse,
};
use crate::error::{Error, Result};
use crate::routes::{json, parse_body, target_id};
use crate::utils::validation::{non_blank, required, validate};
use crate::AppState;

pub async fn handle(
    state: &AppState,
    method: &Method,
    params: &ApiParams,
    body: Bytes,
) -> Result<Response> {
    match *method {
        Method::GET => match non_blank(params.id.clone()) {
            Some(id) => get_job(state, &id).await,
            None => list_jobs(state, params).await,
        },
        Method::POST => create_job(state, parse_body(&body)?).await,
        Method::PUT => update_job(state, parse_body(&body)?).await,
        Method::DELETE => delete_job(state, &target_id(params, &body)?).await,
        _ => Err(Error::MethodNotAllowed),
    }
}

fn job_not_found() -> Error {
    Error::NotFound("Job not found".to_string())
}

async fn list_jobs(state: &AppState, params: &ApiParams) -> Result<Response> {
    let employer_id = non_blank(params.employer_id.clone());
    let jobs = state.job_service.list(employer_id.as_deref()).await?;
    let jobs = jobs.into_iter().map(JobResponse::from).collect();
    Ok(json(StatusCode::OK, JobListResponse { jobs }))
}

async fn get_job(state: &AppState, id: &str) -> Result<Response> {
    let job = state
        .job_service
        .get_by_id(id)
        .await?
        .ok_or_else(job_not_found)?;
    Ok(json(StatusCode::OK, JobEnvelope { job: job.into() }))
}

async fn create_job(state: &AppState, payload: JobPayload) -> Result<Response> {
    validate(&payload)?;
    let (id, fields) = payload.into_parts()?;
    let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());

    let id = state.job_service.create(&id, &fields).await?;

    info!(job_id = %id, employer_id = ?fields.employer_id, "job created");
    Ok(json(StatusCode::CREATED, JobIdResponse { id }))
}

async fn update_job(state: &AppState, payload: JobPayload) -> Result<Response> {
    validate(&payload)?;
    let (id, fields) = payload.into_parts()?;
    let id = required(id, "id")?;

    let id = state
        .job_service
        .update(&id, &fields)
        .await?
        .ok_or_else(job_not_found)?;

    info!(job_id = %id, "job updated");
    Ok(json(StatusCode::OK, JobIdResponse { id }))
}

async fn delete_job(state: &AppState, id: &str) -> Result<Response> {
    let id = state
        .job_service
        .delete(id)
        .await?
        .ok_or_else(job_not_found)?;

    info!(job_id = %id, "job deleted");
    Ok(json(
        StatusCode::OK,
        JobDeletedResponse {
            id,
            message: "Job deleted".to_string(),
        },
    ))
}
