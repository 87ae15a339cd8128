use thiserror::Error;

use super::descriptor::Constraint;
use super::value::Value;

/// Field-scoped decode failures.
///
/// Every variant names the offending field and carries the raw or converted
/// value for diagnostics. A failure aborts the enclosing record decode; no
/// partial record is produced. `MissingLengthSpec` and `UnsupportedFieldType`
/// flag defects in a hand-authored catalog rather than bad input.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{field}: buffer too short: need {needed} bytes, got {actual}")]
    OutOfBounds {
        field: &'static str,
        needed: usize,
        actual: usize,
    },
    #[error("{field}: boolean byte must be 0 or 1, got {value}")]
    InvalidBoolean { field: &'static str, value: u8 },
    #[error("{field}: undefined {enum_name} code {code}")]
    UndefinedEnumValue {
        field: &'static str,
        enum_name: &'static str,
        code: u64,
    },
    #[error("{field}: value {value} violates {constraint}")]
    ConstraintViolation {
        field: &'static str,
        value: Value,
        constraint: Constraint,
    },
    #[error("{field}: text field is missing a declared length")]
    MissingLengthSpec { field: &'static str },
    #[error("{field}: unsupported field shape: {detail}")]
    UnsupportedFieldType {
        field: &'static str,
        detail: &'static str,
    },
}

impl DecodeError {
    /// Name of the field the failure is scoped to.
    pub fn field(&self) -> &'static str {
        match self {
            DecodeError::OutOfBounds { field, .. }
            | DecodeError::InvalidBoolean { field, .. }
            | DecodeError::UndefinedEnumValue { field, .. }
            | DecodeError::ConstraintViolation { field, .. }
            | DecodeError::MissingLengthSpec { field }
            | DecodeError::UnsupportedFieldType { field, .. } => field,
        }
    }
}
