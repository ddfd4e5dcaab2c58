//! Shared validation helpers for inbound HTTP adapters.
//!
//! Failures become `invalid_request` errors whose details name the offending
//! field, the machine-readable code and, where useful, the rejected value.

use serde_json::json;

use crate::domain::{CashCardSort, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidInteger,
    InvalidSort,
    InvalidBody,
}

impl ErrorCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidInteger => "invalid_integer",
            Self::InvalidSort => "invalid_sort",
            Self::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    const fn as_str(self) -> &'static str {
        self.0
    }
}

struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field: field.as_str(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: &str) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value,
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    ValidationError::new(field, format!("missing required field: {name}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_body_error(message: impl std::fmt::Display) -> Error {
    ValidationError::new(FieldName::new("body"), format!("invalid request body: {message}"))
        .with_code(ErrorCode::InvalidBody)
}

/// Parse an optional non-negative integer query parameter.
pub(crate) fn parse_optional_u32(value: Option<&str>, field: FieldName) -> Result<Option<u32>, Error> {
    value
        .map(|raw| {
            raw.trim().parse::<u32>().map_err(|_| {
                let name = field.as_str();
                ValidationError::new(field, format!("{name} must be a non-negative integer"))
                    .with_value(ErrorCode::InvalidInteger, raw)
            })
        })
        .transpose()
}

/// Parse an optional `field,direction` sort parameter.
pub(crate) fn parse_optional_sort(value: Option<&str>) -> Result<Option<CashCardSort>, Error> {
    value
        .map(|raw| {
            raw.parse::<CashCardSort>().map_err(|err| {
                ValidationError::new(FieldName::new("sort"), format!("invalid sort: {err}"))
                    .with_value(ErrorCode::InvalidSort, raw)
            })
        })
        .transpose()
}
