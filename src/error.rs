//! Error types for decoding and encoding payloads.

use thiserror::Error;

/// A payload could not be decoded into a model.
///
/// Unrecognized enum strings are not errors; they read as unset.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid {kind} value {value:?}")]
    InvalidFormat { kind: &'static str, value: String },

    #[error("{value} is out of range for {kind}")]
    OutOfRange { kind: &'static str, value: String },

    #[error("field `{field}`: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Attach the name of the property being decoded.
    pub fn in_field(self, field: &str) -> Self {
        DecodeError::Field {
            field: field.to_string(),
            source: Box::new(self),
        }
    }

    /// Dotted path of property names down to the innermost failure.
    pub fn field_path(&self) -> Option<String> {
        let mut parts = Vec::new();
        let mut current = self;
        while let DecodeError::Field { field, source } = current {
            parts.push(field.as_str());
            current = &**source;
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("."))
        }
    }

    /// The innermost error, skipping field context.
    pub fn root_cause(&self) -> &DecodeError {
        match self {
            DecodeError::Field { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// A model could not be written to the wire.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("{value} cannot be represented in JSON")]
    NonFiniteNumber { value: f64 },

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("field `{field}`: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<EncodeError>,
    },
}

impl EncodeError {
    /// Attach the name of the property being encoded.
    pub fn in_field(self, field: &str) -> Self {
        EncodeError::Field {
            field: field.to_string(),
            source: Box::new(self),
        }
    }
}
