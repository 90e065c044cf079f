//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper yields an `invalid_request` error whose details carry the
//! camelCase wire `field` and a machine `code`, plus the rejected `value`
//! where echoing it is safe.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidId,
    InvalidTimestamp,
    InvalidLabel,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidId => "invalid_id",
            Self::InvalidTimestamp => "invalid_timestamp",
            Self::InvalidLabel => "invalid_label",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) const fn as_str(self) -> &'static str {
        self.0
    }
}

fn rejected(field: FieldName, code: ValidationCode, message: String, value: Option<&str>) -> Error {
    let details = match value {
        Some(value) => json!({ "field": field.as_str(), "code": code.as_str(), "value": value }),
        None => json!({ "field": field.as_str(), "code": code.as_str() }),
    };
    Error::invalid_request(message).with_details(details)
}

/// Error for a domain validation failure with its own field and code.
pub(crate) fn field_error(field: &str, code: &str, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({ "field": field, "code": code }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    rejected(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {}", field.as_str()),
        None,
    )
}

pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

/// Parse an identifier such as `TourId` from a path segment or body field.
pub(crate) fn parse_id<T: FromStr>(raw: &str, field: FieldName) -> Result<T, Error> {
    raw.parse().map_err(|_| {
        rejected(
            field,
            ValidationCode::InvalidId,
            format!("{} must be a valid identifier", field.as_str()),
            Some(raw),
        )
    })
}

pub(crate) fn parse_optional_id<T: FromStr>(
    raw: Option<&str>,
    field: FieldName,
) -> Result<Option<T>, Error> {
    raw.map(|value| parse_id(value, field)).transpose()
}

/// Parse a closed label such as a booking status or tour category.
pub(crate) fn parse_label<T: FromStr>(raw: &str, field: FieldName) -> Result<T, Error> {
    raw.parse().map_err(|_| {
        rejected(
            field,
            ValidationCode::InvalidLabel,
            format!("{} has an unsupported value", field.as_str()),
            Some(raw),
        )
    })
}

pub(crate) fn parse_rfc3339_timestamp(value: &str, field: FieldName) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| {
            rejected(
                field,
                ValidationCode::InvalidTimestamp,
                format!("{} must be an RFC 3339 timestamp", field.as_str()),
                Some(value),
            )
        })
}

pub(crate) fn parse_optional_rfc3339_timestamp(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<DateTime<Utc>>, Error> {
    value
        .map(|raw| parse_rfc3339_timestamp(raw, field))
        .transpose()
}
