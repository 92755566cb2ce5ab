pub mod api_dto;
pub mod application_dto;
pub mod interview_dto;
pub mod job_dto;
pub mod job_response_dto;
pub mod message_dto;
pub mod user_dto;

use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value as JsonValue;

/// Accepts an id sent either as a JSON string or a JSON number.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<JsonValue>::deserialize(deserializer)? {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s)),
        Some(JsonValue::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number id, got {}",
            other
        ))),
    }
}
