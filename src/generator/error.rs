use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The discriminant is not one of the kinds known for this slot.
    #[error("unknown {slot} kind: {kind}")]
    UnrecognizedVariant { slot: &'static str, kind: String },
    #[error("{slot} kind {kind} requires a `{kind}` section")]
    MissingPayload { slot: &'static str, kind: String },
    #[error("{bean} requires `{field}`")]
    MissingField {
        bean: &'static str,
        field: &'static str,
    },
    #[error("unknown event group: {0}")]
    UnknownEventGroup(String),
    #[error("could not read bean fields: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl GeneratorError {
    pub(crate) fn unrecognized(slot: &'static str, kind: &str) -> Self {
        GeneratorError::UnrecognizedVariant {
            slot,
            kind: kind.to_string(),
        }
    }

    pub(crate) fn missing_payload(slot: &'static str, kind: &str) -> Self {
        GeneratorError::MissingPayload {
            slot,
            kind: kind.to_string(),
        }
    }
}
