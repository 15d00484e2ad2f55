use crate::error::{ErrorSeverity, TableLibError};

/// Errors raised while converting between delimited strings and records.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The raw string split into a different number of fields than the
    /// record type declares.
    #[error("expected {expected} fields, found {found}: {fields:?}")]
    FieldCount {
        expected: usize,
        found: usize,
        fields: Vec<String>,
    },

    /// A field could not be converted to its semantic type.
    #[error("invalid {field} field '{value}': {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// An encoded field contains the separator, which would break decoding.
    #[error("field {index} ('{value}') contains separator '{separator}'")]
    SeparatorInField {
        index: usize,
        value: String,
        separator: char,
    },
}

impl CodecError {
    pub(crate) fn invalid_field(
        field: &'static str,
        value: &str,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidField {
            field,
            value: value.to_owned(),
            reason: reason.to_string(),
        }
    }
}

impl TableLibError for CodecError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::FieldCount { .. } => "CODEC_FIELD_COUNT",
            Self::InvalidField { .. } => "CODEC_INVALID_FIELD",
            Self::SeparatorInField { .. } => "CODEC_SEPARATOR_IN_FIELD",
        }
    }
}
