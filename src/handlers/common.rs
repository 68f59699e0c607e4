use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

use crate::errors::ServiceError;

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Validate request input before any database call is issued.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ServiceError> {
    input.validate().map_err(ServiceError::from)
}

/// Query parameters shared by every list endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Case-insensitive substring matched against the record's two search
    /// fields. Empty or absent returns the full list.
    #[serde(default)]
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1))]
        code: String,
    }

    #[test]
    fn blank_required_field_is_rejected() {
        let probe = Probe {
            code: String::new(),
        };
        assert!(matches!(
            validate_input(&probe),
            Err(ServiceError::ValidationError(_))
        ));
    }

    #[test]
    fn present_required_field_passes() {
        let probe = Probe {
            code: "C001".to_string(),
        };
        assert!(validate_input(&probe).is_ok());
    }
}
