//! Top-level payload detection.
//!
//! A response body is one of three shapes: an error envelope, a collection
//! page, or a single entity. [`Payload`] tells them apart by their keys and
//! decodes each through the matching type.

use crate::error::{DecodeError, EncodeError};
use crate::models::AnyEntity;
use crate::odata::{CollectionResponse, ODataError, VALUE_KEY};
use crate::parser::{json_kind, parse_value};
use crate::serialization::{AdditionalData, Parsable};
use crate::writer::{serialize_object, to_json_string_pretty};
use serde_json::Value;

/// A decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Entity(AnyEntity),
    Collection(CollectionResponse<AnyEntity>),
    Error(ODataError),
}

impl Payload {
    /// Classify and decode. An `error` object wins over everything else, then
    /// a `value` array; anything else is an entity.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let Some(object) = value.as_object() else {
            return Err(DecodeError::UnexpectedType {
                expected: "object",
                found: json_kind(value),
            });
        };
        if object.get("error").is_some_and(Value::is_object) {
            return Ok(Self::Error(parse_value(value)?));
        }
        if object.get(VALUE_KEY).is_some_and(Value::is_array) {
            return Ok(Self::Collection(parse_value(value)?));
        }
        Ok(Self::Entity(parse_value(value)?))
    }

    /// Short name of the payload shape and the concrete type it holds.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Entity(entity) => entity.type_name(),
            Self::Collection(_) => "CollectionResponse",
            Self::Error(_) => "ODataError",
        }
    }

    /// The `@odata.type` of a single entity.
    pub fn discriminator(&self) -> Option<&str> {
        match self {
            Self::Entity(entity) => entity.discriminator(),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn Parsable {
        match self {
            Self::Entity(m) => m,
            Self::Collection(m) => m,
            Self::Error(m) => m,
        }
    }

    pub fn additional_data(&self) -> &AdditionalData {
        self.inner().additional_data()
    }

    /// Normalized re-encoding of the payload.
    pub fn to_value(&self) -> Result<Value, EncodeError> {
        serialize_object(self.inner())
    }

    /// Normalized re-encoding as indented JSON text.
    pub fn to_json_pretty(&self) -> Result<String, EncodeError> {
        to_json_string_pretty(self.inner())
    }
}

impl std::str::FromStr for Payload {
    type Err = DecodeError;

    fn from_str(text: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }
}
