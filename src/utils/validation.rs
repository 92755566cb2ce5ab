use validator::{Validate, ValidationError};

use crate::error::{Error, Result};

pub fn validate<T: Validate>(val: &T) -> Result<()> {
    val.validate()?;
    Ok(())
}

/// Treats blank strings the same as absent ones.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Field validator rejecting strings that are empty once trimmed.
pub fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

pub fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| Error::BadRequest(format!("Missing required field: {}", field)))
}

pub fn parse_uuid(value: &str, field: &str) -> Result<uuid::Uuid> {
    uuid::Uuid::parse_str(value.trim())
        .map_err(|_| Error::BadRequest(format!("Invalid {}: expected a UUID", field)))
}

pub fn check_coordinates([lat, lng]: [f64; 2]) -> Result<()> {
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(Error::BadRequest(format!(
            "Invalid coordinates: [{}, {}]",
            lat, lng
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_strings_are_absent() {
        assert_eq!(non_blank(Some("  ".into())), None);
        assert_eq!(non_blank(Some(" a ".into())), Some("a".into()));
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn whitespace_only_text_is_blank() {
        assert!(not_blank("   \t").is_err());
        assert!(not_blank("").is_err());
        assert!(not_blank(" Курьер ").is_ok());
    }

    #[test]
    fn required_reports_field_name() {
        let err = required::<u8>(None, "user_id").unwrap_err();
        match err {
            Error::BadRequest(msg) => assert!(msg.contains("user_id")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(required(Some(3), "x").unwrap(), 3);
    }

    #[test]
    fn uuid_parsing_is_bad_request() {
        assert!(matches!(parse_uuid("nope", "id"), Err(Error::BadRequest(_))));
        assert!(parse_uuid("2cd84131-6e83-4c98-91ba-f9b9a5f0a06c", "id").is_ok());
    }

    #[test]
    fn coordinates_must_be_on_the_globe() {
        assert!(check_coordinates([56.0184, 92.8672]).is_ok());
        assert!(check_coordinates([91.0, 0.0]).is_err());
        assert!(check_coordinates([0.0, -181.0]).is_err());
    }
}
