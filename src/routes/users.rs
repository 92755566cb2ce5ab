use axum::{
    http::{Method, StatusCode},
    response::Response,
};
use bytes::Bytes;
use tracing::info;

use crate::dto::api_dto::ApiParams;
use crate::dto::user_dto::{
    RegisterUserPayload, UpdateUserPayload, UserListResponse, UserResponse, DEFAULT_ROLE,
};
use crate::error::{Error, Result};
use crate::models::user::NewUser;
use crate::routes::{json, parse_body};
use crate::utils::crypto::hash_password_blocking;
use crate::utils::time::{birth_date_from_age, now};
use crate::utils::validation::{non_blank, required, validate};
use crate::AppState;

pub async fn handle(
    state: &AppState,
    method: &Method,
    _params: &ApiParams,
    body: Bytes,
) -> Result<Response> {
    match *method {
        Method::GET => list_users(state).await,
        Method::POST => register_user(state, parse_body(&body)?).await,
        Method::PUT => update_test_result(state, parse_body(&body)?).await,
        _ => Err(Error::MethodNotAllowed),
    }
}

async fn list_users(state: &AppState) -> Result<Response> {
    let users = state.user_service.list().await?;
    let users = users.into_iter().map(UserResponse::from).collect();
    Ok(json(StatusCode::OK, UserListResponse { users }))
}

async fn register_user(state: &AppState, mut payload: RegisterUserPayload) -> Result<Response> {
    payload.email = payload.email.trim().to_lowercase();
    validate(&payload)?;

    let date_of_birth = payload
        .age
        .and_then(|age| birth_date_from_age(age, now().date_naive()));
    let password_hash = hash_password_blocking(payload.password).await?;

    let user = state
        .user_service
        .create(NewUser {
            email: payload.email,
            password_hash,
            full_name: payload.name.trim().to_string(),
            date_of_birth,
            phone: non_blank(payload.phone),
            role: non_blank(payload.role).unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        })
        .await?;

    info!(user_id = %user.id, role = %user.role, "user registered");
    Ok(json(StatusCode::CREATED, UserResponse::from(user)))
}

async fn update_test_result(state: &AppState, payload: UpdateUserPayload) -> Result<Response> {
    let id = required(payload.id, "id")?;
    let user = state
        .user_service
        .update_test_result(id, payload.test_result.as_deref())
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    info!(user_id = %user.id, "test result recorded");
    Ok(json(StatusCode::OK, UserResponse::from(user)))
}
