use axum::{
    http::{Method, StatusCode},
    response::Response,
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::dto::api_dto::ApiParams;
use crate::dto::user_dto::{LoginPayload, LoginResponse, UserResponse};
use crate::error::{Error, Result};
use crate::routes::{json, parse_body};
use crate::utils::crypto::verify_password_blocking;
use crate::AppState;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub async fn handle(
    state: &AppState,
    method: &Method,
    _params: &ApiParams,
    body: Bytes,
) -> Result<Response> {
    match *method {
        Method::POST => login(state, parse_body(&body)?).await,
        _ => Err(Error::MethodNotAllowed),
    }
}

/// Unknown email and wrong password fail with the same 401 body, and both
/// run one argon2 verification.
async fn login(state: &AppState, payload: LoginPayload) -> Result<Response> {
    let email = payload.email.trim().to_lowercase();
    if email.is_empty() || payload.password.is_empty() {
        return Err(Error::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let credentials = state.user_service.find_credentials_by_email(&email).await?;
    let stored_hash = credentials.as_ref().map(|c| c.password_hash.clone());
    let verified = verify_password_blocking(payload.password, stored_hash).await?;

    match credentials {
        Some(credentials) if verified => {
            info!(user_id = %credentials.user.id, "login succeeded");
            Ok(json(
                StatusCode::OK,
                LoginResponse {
                    user: UserResponse::from(credentials.user),
                },
            ))
        }
        _ => {
            warn!("login failed");
            Err(Error::Unauthorized(INVALID_CREDENTIALS.to_string()))
        }
    }
}
