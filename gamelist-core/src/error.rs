use thiserror::Error;

use crate::Field;

/// Errors raised while reading or assigning canonical field values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Text could not be converted to the field's type
    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue { field: Field, value: String },
}

impl CoreError {
    pub fn invalid_value(field: Field, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}
