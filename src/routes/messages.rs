use axum::{
    http::{Method, StatusCode},
    response::Response,
};
use bytes::Bytes;
use tracing::info;

use crate::dto::api_dto::{ApiParams, StatusMessage};
use crate::dto::message_dto::{
    ConversationListResponse, ConversationResponse, MarkReadPayload, MessageListResponse,
    MessageResponse, SendMessagePayload,
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
        Method::GET => read_messages(state, params).await,
        Method::POST => send_message(state, parse_body(&body)?).await,
        Method::PUT => mark_read(state, parse_body(&body)?).await,
        Method::DELETE => delete_message(state, &target_id(params, &body)?).await,
        _ => Err(Error::MethodNotAllowed),
    }
}

/// A sender/receiver pair selects their thread; a lone user id selects that
/// user's conversation list.
async fn read_messages(state: &AppState, params: &ApiParams) -> Result<Response> {
    let sender = non_blank(params.sender_id.clone());
    let receiver = non_blank(params.receiver_id.clone());

    if let (Some(sender), Some(receiver)) = (sender, receiver) {
        let sender = parse_uuid(&sender, "sender_id")?;
        let receiver = parse_uuid(&receiver, "receiver_id")?;
        let job_id = non_blank(params.job_id.clone());

        let messages = state
            .message_service
            .thread(sender, receiver, job_id.as_deref())
            .await?;
        let messages = messages.into_iter().map(MessageResponse::from).collect();
        return Ok(json(StatusCode::OK, MessageListResponse { messages }));
    }

    if let Some(user_id) = non_blank(params.user_id.clone()) {
        let user_id = parse_uuid(&user_id, "user_id")?;
        let conversations = state.message_service.conversations(user_id).await?;
        let conversations = conversations
            .into_iter()
            .map(ConversationResponse::from)
            .collect();
        return Ok(json(StatusCode::OK, ConversationListResponse { conversations }));
    }

    Err(Error::BadRequest(
        "Either sender_id and receiver_id, or user_id is required".to_string(),
    ))
}

async fn send_message(state: &AppState, payload: SendMessagePayload) -> Result<Response> {
    validate(&payload)?;
    let message = state.message_service.create(payload.into_create()?).await?;

    info!(
        message_id = %message.id,
        sender_id = %message.sender_id,
        receiver_id = %message.receiver_id,
        "message sent"
    );
    Ok(json(StatusCode::CREATED, MessageResponse::from(message)))
}

async fn mark_read(state: &AppState, payload: MarkReadPayload) -> Result<Response> {
    let id = required(payload.id, "id")?;
    let is_read = payload.is_read.unwrap_or(true);

    let message = state
        .message_service
        .set_read(id, is_read)
        .await?
        .ok_or_else(|| Error::NotFound("Message not found".to_string()))?;

    Ok(json(StatusCode::OK, MessageResponse::from(message)))
}

async fn delete_message(state: &AppState, raw_id: &str) -> Result<Response> {
    let id = parse_uuid(raw_id, "id")?;
    if !state.message_service.delete(id).await? {
        return Err(Error::NotFound("Message not found".to_string()));
    }

    info!(message_id = %id, "message deleted");
    Ok(json(
        StatusCode::OK,
        StatusMessage::new("Message deleted successfully"),
    ))
}
