//! JSON parse nodes.
//!
//! [`JsonParseNode`] is a borrowed cursor over a `serde_json::Value` that the
//! generated models read their properties through. Sub-modules:
//!
//! - [`helpers`] – primitive wire-string decoders and JSON kind names

pub mod helpers;

pub use helpers::json_kind;

use crate::enums::WireEnum;
use crate::error::DecodeError;
use crate::serialization::{FieldValue, Parsable};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Wire key of the polymorphic discriminator.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Read-only view of one JSON value inside a payload.
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The raw JSON value under this node.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Child node for `key` when this node is an object that has it.
    pub(crate) fn child_node(&self, key: &str) -> Option<JsonParseNode<'a>> {
        self.value.as_object()?.get(key).map(JsonParseNode::new)
    }

    /// The `@odata.type` string of this object, if present.
    pub fn discriminator(&self) -> Result<Option<String>, DecodeError> {
        match self.child_node(ODATA_TYPE_KEY) {
            Some(node) => node
                .get_string_value()
                .map_err(|e| e.in_field(ODATA_TYPE_KEY)),
            None => Ok(None),
        }
    }

    pub(crate) fn as_object(&self) -> Result<&'a Map<String, Value>, DecodeError> {
        self.value
            .as_object()
            .ok_or_else(|| self.unexpected("object"))
    }

    fn unexpected(&self, expected: &'static str) -> DecodeError {
        DecodeError::UnexpectedType {
            expected,
            found: json_kind(self.value),
        }
    }

    /// Borrow the string under this node; `null` is `None`.
    fn str_value(&self) -> Result<Option<&'a str>, DecodeError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.as_str())),
            _ => Err(self.unexpected("string")),
        }
    }

    pub fn get_string_value(&self) -> Result<Option<String>, DecodeError> {
        Ok(self.str_value()?.map(str::to_string))
    }

    pub fn get_bool_value(&self) -> Result<Option<bool>, DecodeError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            _ => Err(self.unexpected("boolean")),
        }
    }

    pub fn get_i64_value(&self) -> Result<Option<i64>, DecodeError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    return Ok(Some(v));
                }
                let out_of_range = || DecodeError::OutOfRange {
                    kind: "64-bit integer",
                    value: n.to_string(),
                };
                // Integral floats such as `15.0` are integers on the wire
                match n.as_f64() {
                    Some(f) if n.is_f64() && f.fract() != 0.0 => Err(self.unexpected("integer")),
                    Some(f) if n.is_f64() && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                        Ok(Some(f as i64))
                    }
                    _ => Err(out_of_range()),
                }
            }
            _ => Err(self.unexpected("integer")),
        }
    }

    pub fn get_i32_value(&self) -> Result<Option<i32>, DecodeError> {
        match self.get_i64_value()? {
            None => Ok(None),
            Some(v) => i32::try_from(v)
                .map(Some)
                .map_err(|_| DecodeError::OutOfRange {
                    kind: "32-bit integer",
                    value: v.to_string(),
                }),
        }
    }

    pub fn get_f64_value(&self) -> Result<Option<f64>, DecodeError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            _ => Err(self.unexpected("number")),
        }
    }

    pub fn get_uuid_value(&self) -> Result<Option<Uuid>, DecodeError> {
        self.str_value()?.map(helpers::parse_uuid).transpose()
    }

    pub fn get_date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>, DecodeError> {
        self.str_value()?.map(helpers::parse_date_time).transpose()
    }

    pub fn get_date_value(&self) -> Result<Option<NaiveDate>, DecodeError> {
        self.str_value()?.map(helpers::parse_date).transpose()
    }

    pub fn get_time_value(&self) -> Result<Option<NaiveTime>, DecodeError> {
        self.str_value()?.map(helpers::parse_time).transpose()
    }

    pub fn get_byte_array_value(&self) -> Result<Option<Vec<u8>>, DecodeError> {
        self.str_value()?.map(helpers::parse_base64).transpose()
    }

    /// Enum lookup. A string the enum does not know reads as `None`.
    pub fn get_enum_value<E: WireEnum>(&self) -> Result<Option<E>, DecodeError> {
        let Some(raw) = self.str_value()? else {
            return Ok(None);
        };
        let parsed = E::parse(raw);
        if parsed.is_none() {
            tracing::trace!(
                value = raw,
                enum_type = std::any::type_name::<E>(),
                "unrecognized enum value"
            );
        }
        Ok(parsed)
    }

    /// Array of values of one kind. `null` elements and unknown enum members
    /// are skipped.
    pub fn get_collection_values<T: FieldValue>(
        &self,
    ) -> Result<Option<Vec<T>>, DecodeError> {
        let items = match self.value {
            Value::Null => return Ok(None),
            Value::Array(items) => items,
            _ => return Err(self.unexpected("array")),
        };
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if let Some(v) =
                T::read(&JsonParseNode::new(item)).map_err(|e| e.in_field(&index.to_string()))?
            {
                out.push(v);
            }
        }
        Ok(Some(out))
    }

    pub fn get_collection_of_enum_values<E: WireEnum + FieldValue>(
        &self,
    ) -> Result<Option<Vec<E>>, DecodeError> {
        self.get_collection_values::<E>()
    }

    /// Decode an object, letting `T` pick its concrete shape from the
    /// discriminator first.
    pub fn get_object_value<T: Parsable>(&self) -> Result<Option<T>, DecodeError> {
        if self.is_null() {
            return Ok(None);
        }
        self.as_object()?;
        let mut item = T::create_from_discriminator_value(self)?;
        item.deserialize_fields(self)?;
        Ok(Some(item))
    }

    pub fn get_collection_of_object_values<T: Parsable>(
        &self,
    ) -> Result<Option<Vec<T>>, DecodeError> {
        let items = match self.value {
            Value::Null => return Ok(None),
            Value::Array(items) => items,
            _ => return Err(self.unexpected("array")),
        };
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if let Some(v) = JsonParseNode::new(item)
                .get_object_value::<T>()
                .map_err(|e| e.in_field(&index.to_string()))?
            {
                out.push(v);
            }
        }
        Ok(Some(out))
    }

    /// Any JSON value, kept as-is; `null` is `None`.
    pub fn get_untyped_value(&self) -> Option<Value> {
        if self.is_null() {
            None
        } else {
            Some(self.value.clone())
        }
    }
}

/// Parse JSON text into a model.
pub fn parse<T: Parsable>(text: &str) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(text)?;
    parse_value(&value)
}

/// Decode an already-parsed JSON value into a model.
pub fn parse_value<T: Parsable>(value: &Value) -> Result<T, DecodeError> {
    JsonParseNode::new(value)
        .get_object_value::<T>()?
        .ok_or(DecodeError::UnexpectedType {
            expected: "object",
            found: "null",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OnlineMeetingProviderType;
    use serde_json::json;

    #[test]
    fn enum_collections_drop_unknown_members() {
        let value = json!(["skypeForConsumer", "fax", null, "unknown"]);
        let providers = JsonParseNode::new(&value)
            .get_collection_of_enum_values::<OnlineMeetingProviderType>()
            .expect("decode");
        assert_eq!(
            providers,
            Some(vec![OnlineMeetingProviderType::SkypeForConsumer, OnlineMeetingProviderType::Unknown])
        );

        let value = json!("skypeForConsumer");
        assert!(matches!(
            JsonParseNode::new(&value).get_collection_of_enum_values::<OnlineMeetingProviderType>(),
            Err(DecodeError::UnexpectedType { expected: "array", found: "string" })
        ));
    }

    #[test]
    fn child_node_only_looks_inside_objects() {
        let value = json!({ "id": "x" });
        let node = JsonParseNode::new(&value);
        let id = node.child_node("id").expect("child");
        assert_eq!(id.get_string_value().expect("string"), Some("x".to_string()));
        assert!(node.child_node("missing").is_none());

        let value = json!(["id"]);
        assert!(JsonParseNode::new(&value).child_node("id").is_none());
    }

    #[test]
    fn integral_floats_are_integers() {
        let value = json!(15.0);
        assert_eq!(JsonParseNode::new(&value).get_i64_value().expect("int"), Some(15));

        let value = json!(1.5);
        assert!(matches!(
            JsonParseNode::new(&value).get_i64_value(),
            Err(DecodeError::UnexpectedType { expected: "integer", found: "number" })
        ));

        let value = json!(u64::MAX);
        assert!(matches!(
            JsonParseNode::new(&value).get_i64_value(),
            Err(DecodeError::OutOfRange { .. })
        ));
    }
}
