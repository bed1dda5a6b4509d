#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The payload is not a JSON object holding a `blocks` array of typed objects.
    #[error("Malformed document: {reason}")]
    Malformed { reason: String },

    /// A block failed the validation rules of its tool.
    #[error("Validation failed for block {index}, field `{field}`: {reason}")]
    Validation {
        index: usize,
        field: String,
        reason: String,
    },
}

impl ParseError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ParseError::Malformed {
            reason: reason.into(),
        }
    }

    pub(crate) fn validation(
        index: usize,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ParseError::Validation {
            index,
            field: field.into(),
            reason: reason.into(),
        }
    }
}
