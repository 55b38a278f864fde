use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{DriverId, RequestId, TripStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    InvalidTransition,
    Validation,
}

/// Per-field validation messages, keyed by form field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    #[error("trip request {0} not found")]
    RequestNotFound(RequestId),
    #[error("driver {0} not found")]
    DriverNotFound(DriverId),
    #[error("cannot {action} trip request {request_id} in state {from}")]
    InvalidTransition {
        request_id: RequestId,
        from: TripStatus,
        action: &'static str,
    },
    #[error("invalid booking: {}", format_field_errors(.0))]
    Validation(FieldErrors),
}

impl BookingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::RequestNotFound(_) | BookingError::DriverNotFound(_) => {
                ErrorCode::NotFound
            }
            BookingError::InvalidTransition { .. } => ErrorCode::InvalidTransition,
            BookingError::Validation(_) => ErrorCode::Validation,
        }
    }
}

pub type BookingResult<T> = Result<T, BookingError>;

fn format_field_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_variants() {
        assert_eq!(
            BookingError::RequestNotFound(RequestId::from("R9")).code(),
            ErrorCode::NotFound
        );
        assert_eq!(
            BookingError::DriverNotFound(DriverId::from("D9")).code(),
            ErrorCode::NotFound
        );
        let err = BookingError::InvalidTransition {
            request_id: RequestId::from("R1"),
            from: TripStatus::Pending,
            action: "complete",
        };
        assert_eq!(err.code(), ErrorCode::InvalidTransition);
        assert_eq!(
            err.to_string(),
            "cannot complete trip request R1 in state PENDING"
        );
    }

    #[test]
    fn validation_message_lists_fields_in_order() {
        let mut fields = FieldErrors::new();
        fields.insert("phone", "Contact number is required".into());
        fields.insert("name", "Name is required".into());
        let err = BookingError::Validation(fields);
        assert_eq!(err.code(), ErrorCode::Validation);
        assert_eq!(
            err.to_string(),
            "invalid booking: name: Name is required; phone: Contact number is required"
        );
    }
}
