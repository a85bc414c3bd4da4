//! Transport-agnostic controllers: validate typed requests, call the
//! service, classify the outcome into a [`Response`](crate::dto::response::Response).

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::UserId;
use crate::pagination::PaginationError;
use crate::services::ServiceError;

pub mod user;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EndpointError {
    #[error("invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("user '{0}' doesn't exist")]
    NotFound(UserId),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type EndpointResult<T> = Result<T, EndpointError>;

/// Settings the endpoints need from configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Page size used when the caller asks for none; must parse as a positive integer.
    pub default_limit: String,
}

impl EndpointConfig {
    pub fn new(default_limit: impl Into<String>) -> Self {
        Self {
            default_limit: default_limit.into(),
        }
    }
}

impl EndpointError {
    /// Reports the first failing field, walking `fields` in declaration order.
    ///
    /// Failures on fields missing from `fields` are reported by name order.
    pub(crate) fn from_validation(errors: &ValidationErrors, fields: &[&str]) -> Self {
        let by_field = errors.field_errors();
        let first = fields
            .iter()
            .find_map(|name| by_field.get(*name).map(|errs| (*name, *errs)))
            .or_else(|| {
                by_field
                    .iter()
                    .map(|(name, errs)| (&**name, *errs))
                    .min_by(|a, b| a.0.cmp(b.0))
            });

        match first {
            Some((field, errs)) => {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "is invalid".to_string());
                EndpointError::Validation {
                    field: field.to_string(),
                    message,
                }
            }
            None => EndpointError::Validation {
                field: String::new(),
                message: errors.to_string(),
            },
        }
    }
}

impl From<ServiceError> for EndpointError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(id) => EndpointError::NotFound(id),
            ServiceError::Repository(e) => EndpointError::Internal(e.to_string()),
        }
    }
}

impl From<PaginationError> for EndpointError {
    fn from(err: PaginationError) -> Self {
        EndpointError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use validator::ValidationError;

    fn failure(message: &'static str) -> ValidationError {
        ValidationError::new("length").with_message(message.into())
    }

    #[test]
    fn service_not_found_stays_not_found() {
        let err = EndpointError::from(ServiceError::NotFound(UserId::new("7")));
        assert_eq!(err, EndpointError::NotFound(UserId::new("7")));
    }

    #[test]
    fn repository_failures_become_internal() {
        let err = EndpointError::from(ServiceError::Repository(RepositoryError::Cancelled));
        assert_eq!(err, EndpointError::Internal("Operation cancelled".to_string()));
    }

    #[test]
    fn bad_default_limit_is_internal() {
        let err = EndpointError::from(PaginationError::InvalidDefaultLimit("x".to_string()));
        assert!(matches!(err, EndpointError::Internal(_)));
    }

    #[test]
    fn validation_reports_fields_in_declaration_order() {
        let mut errors = ValidationErrors::new();
        errors.add("last_name", failure("last name is required"));
        errors.add("first_name", failure("first name is required"));

        let err = EndpointError::from_validation(&errors, &["first_name", "last_name"]);
        assert_eq!(
            err,
            EndpointError::Validation {
                field: "first_name".to_string(),
                message: "first name is required".to_string(),
            }
        );
    }

    #[test]
    fn unlisted_fields_are_reported_by_name_order() {
        let mut errors = ValidationErrors::new();
        errors.add("zeta", failure("zeta is bad"));
        errors.add("alpha", failure("alpha is bad"));
        errors.add("mid", failure("mid is bad"));

        for _ in 0..5 {
            let err = EndpointError::from_validation(&errors, &[]);
            assert!(
                matches!(err, EndpointError::Validation { ref field, .. } if field == "alpha"),
                "{err:?}"
            );
        }
    }
}
