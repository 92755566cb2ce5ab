use axum::{
    http::{Method, StatusCode},
    response::Response,
};
use bytes::Bytes;
use tracing::info;

use crate::dto::api_dto::{ApiParams, StatusMessage};
use crate::dto::application_dto::{
    ApplicationListResponse, ApplicationResponse, CreateApplicationPayload,
    UpdateApplicationStatusPayload,
};
use crate::error::{Error, Result};
use crate::routes::{json, parse_body, target_id};
use crate::utils::validation::{non_blank, parse_uuid, required, validate};
use crate::AppState;

pub async fn handle(
    state: &AppState,
    method: &Method,
    params: &ApiParams,
    body: Bytes,
) -> Result<Response> {
    match *method {
        Method::GET => list_applications(state, params).await,
        Method::POST => create_application(state, parse_body(&body)?).await,
        Method::PUT => update_status(state, parse_body(&body)?).await,
        Method::DELETE => delete_application(state, &target_id(params, &body)?).await,
        _ => Err(Error::MethodNotAllowed),
    }
}

fn application_not_found() -> Error {
    Error::NotFound("Application not found".to_string())
}

async fn list_applications(state: &AppState, params: &ApiParams) -> Result<Response> {
    let job_id = non_blank(params.job_id.clone());
    let user_id = non_blank(params.user_id.clone())
        .map(|raw| parse_uuid(&raw, "user_id"))
        .transpose()?;

    let applications = state
        .application_service
        .list(job_id.as_deref(), user_id)
        .await?;
    let applications = applications
        .into_iter()
        .map(ApplicationResponse::from)
        .collect();
    Ok(json(StatusCode::OK, ApplicationListResponse { applications }))
}

async fn create_application(state: &AppState, payload: CreateApplicationPayload) -> Result<Response> {
    validate(&payload)?;
    let application = state.application_service.create(payload.into_new()?).await?;

    info!(
        application_id = %application.id,
        job_id = %application.job_id,
        user_id = %application.user_id,
        "application submitted"
    );
    Ok(json(StatusCode::CREATED, ApplicationResponse::from(application)))
}

async fn update_status(state: &AppState, payload: UpdateApplicationStatusPayload) -> Result<Response> {
    validate(&payload)?;
    let id = required(payload.id, "id")?;

    let application = state
        .application_service
        .update_status(id, payload.status.trim())
        .await?
        .ok_or_else(application_not_found)?;

    info!(application_id = %application.id, status = %application.status, "application status updated");
    Ok(json(StatusCode::OK, ApplicationResponse::from(application)))
}

async fn delete_application(state: &AppState, raw_id: &str) -> Result<Response> {
    let id = parse_uuid(raw_id, "id")?;
    if !state.application_service.delete(id).await? {
        return Err(application_not_found());
    }

    info!(application_id = %id, "application deleted");
    Ok(json(
        StatusCode::OK,
        StatusMessage::new("Application deleted successfully"),
    ))
}
