//! Input validation shared by the services.

use chrono::NaiveDateTime;
use shared::TIMESTAMP_FORMAT;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },
    #[error("{field} must be a valid number, got '{input}'")]
    InvalidNumber { field: &'static str, input: String },
    #[error("{field} cannot be negative")]
    NegativeValue { field: &'static str },
    #[error("quantity must be a whole number of zero or more, got '{input}'")]
    InvalidQuantity { input: String },
    #[error("date must look like YYYY-MM-DD HH:MM:SS, got '{input}'")]
    InvalidTimestamp { input: String },
}

/// Trimmed, non-empty text
pub fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// Any finite decimal; "-0" comes back as plain zero
pub fn parse_amount(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value + 0.0),
        _ => Err(ValidationError::InvalidNumber {
            field,
            input: input.to_string(),
        }),
    }
}

/// A finite decimal that is zero or more
pub fn parse_non_negative_amount(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    let value = parse_amount(field, input)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(value)
}

pub fn parse_quantity(input: &str) -> Result<u64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field: "quantity" });
    }

    trimmed
        .parse::<u64>()
        .map_err(|_| ValidationError::InvalidQuantity {
            input: input.to_string(),
        })
}

/// Use the given timestamp if it has the stored format, otherwise reject it.
/// `None` means "now".
pub fn resolve_timestamp(date: Option<&str>) -> Result<String, ValidationError> {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(date) => {
            // Round-trip through chrono so "2024-1-5 9:00:00" is rejected
            // rather than stored unpadded, which would break range filters.
            match NaiveDateTime::parse_from_str(date, TIMESTAMP_FORMAT) {
                Ok(parsed) if parsed.format(TIMESTAMP_FORMAT).to_string() == date => {
                    Ok(date.to_string())
                }
                _ => Err(ValidationError::InvalidTimestamp {
                    input: date.to_string(),
                }),
            }
        }
        None => Ok(shared::current_timestamp()),
    }
}
