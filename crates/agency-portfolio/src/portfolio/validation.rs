use super::property::PropertyType;

/// Raised when a portfolio value is built from input outside its bounds.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid {field}: missing")]
    Missing { field: &'static str },
    #[error("invalid {field} '{value}': {reason}")]
    OutOfRange {
        field: &'static str,
        value: String,
        reason: String,
    },
    #[error("property type '{tag}' does not describe a {expected} property")]
    TypeMismatch { tag: String, expected: PropertyType },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::OutOfRange { field, .. } => field,
            Self::TypeMismatch { .. } => "type",
        }
    }

    pub(crate) fn out_of_range(
        field: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Length is counted in characters, not bytes.
pub(crate) fn check_char_len(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::out_of_range(
            field,
            value,
            format!("length must be between {min} and {max} characters (found {len})"),
        ));
    }
    Ok(())
}

pub(crate) fn check_not_blank(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::out_of_range(
            field,
            value,
            "value cannot be blank",
        ));
    }
    check_char_len(field, value, 1, max)
}

pub(crate) fn check_range(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) -> Result<i64, ValidationError> {
    if value < min || value > max {
        return Err(ValidationError::out_of_range(
            field,
            value,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(value)
}

pub(crate) fn check_price(field: &'static str, value: f64, min: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::out_of_range(
            field,
            value,
            "must be a finite amount",
        ));
    }
    if value < min {
        return Err(ValidationError::out_of_range(
            field,
            value,
            format!("must be at least {min}"),
        ));
    }
    Ok(value)
}
