//! Model contracts shared by every generated type.
//!
//! - [`Parsable`] – anything that can be created from a parse node and written
//!   back through a [`JsonSerializationWriter`]
//! - [`Model`] – a concrete struct with a static field-deserializer table
//! - [`FieldValue`] – a property value type (scalar, enum, object, collection)

use crate::error::{DecodeError, EncodeError};
use crate::parser::JsonParseNode;
use crate::parser::helpers;
use crate::writer::JsonSerializationWriter;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};
use indexmap::IndexMap;
use serde_json::{Number, Value};
use uuid::Uuid;

/// Payload properties with no modeled field, kept verbatim and in order.
pub type AdditionalData = IndexMap<String, Value>;

/// Decodes one wire property into a model.
pub type FieldDeserializer<T> =
    Box<dyn Fn(&mut T, &JsonParseNode<'_>) -> Result<(), DecodeError> + Send + Sync>;

/// Wire property name to deserializer, in declaration order (base first).
pub type FieldDeserializers<T> = IndexMap<&'static str, FieldDeserializer<T>>;

// ────────────────────────────────────────────────────────────────────────────
// Traits
// ────────────────────────────────────────────────────────────────────────────

/// A value that can be decoded from and written to the wire as an object.
pub trait Parsable {
    /// Pick the concrete shape to decode into, based on `@odata.type`.
    fn create_from_discriminator_value(node: &JsonParseNode<'_>) -> Result<Self, DecodeError>
    where
        Self: Sized;

    /// Assign every property of the object under `node`.
    fn deserialize_fields(&mut self, node: &JsonParseNode<'_>) -> Result<(), DecodeError>;

    /// Write modeled properties, base type first.
    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<(), EncodeError>;

    fn additional_data(&self) -> &AdditionalData;

    fn additional_data_mut(&mut self) -> &mut AdditionalData;

    /// Write modeled properties followed by additional data.
    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<(), EncodeError> {
        self.serialize_fields(writer)?;
        writer.write_additional_data(self.additional_data());
        Ok(())
    }
}

/// A concrete generated struct.
pub trait Model: Parsable + Default + 'static {
    /// Deserializers for every wire property this type models, inherited ones included.
    fn field_deserializers() -> &'static FieldDeserializers<Self>;
}

/// A property value type.
pub trait FieldValue: Sized {
    /// Decode the value under `node`; JSON `null` is `None`.
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>, DecodeError>;

    /// Encode as a JSON value.
    fn encode(&self) -> Result<Value, EncodeError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Field tables
// ────────────────────────────────────────────────────────────────────────────

fn boxed<T, F>(deserialize: F) -> FieldDeserializer<T>
where
    F: Fn(&mut T, &JsonParseNode<'_>) -> Result<(), DecodeError> + Send + Sync + 'static,
{
    Box::new(deserialize)
}

/// Deserializer that stores a decoded value into the slot `slot` selects.
pub fn field<T: 'static, V: FieldValue + 'static>(
    slot: fn(&mut T) -> &mut Option<V>,
) -> FieldDeserializer<T> {
    boxed(move |model, node| {
        if let Some(value) = V::read(node)? {
            *slot(model) = Some(value);
        }
        Ok(())
    })
}

/// Lift a base type's table onto a derived type through `base`.
pub fn inherit_deserializers<B: Model, T: 'static>(
    base: fn(&mut T) -> &mut B,
) -> FieldDeserializers<T> {
    B::field_deserializers()
        .iter()
        .map(|(key, deserialize)| (*key, boxed(move |model, node| deserialize(base(model), node))))
        .collect()
}

/// Walk the object under `node`: modeled keys go through the field table,
/// everything else lands in additional data.
pub fn assign_fields<T: Model>(model: &mut T, node: &JsonParseNode<'_>) -> Result<(), DecodeError> {
    let object = node.as_object()?;
    let table = T::field_deserializers();
    for (key, value) in object {
        match table.get(key.as_str()) {
            Some(deserialize) => {
                deserialize(model, &JsonParseNode::new(value)).map_err(|e| e.in_field(key))?;
            }
            None => {
                model
                    .additional_data_mut()
                    .insert(key.clone(), value.clone());
            }
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Scalar values
// ────────────────────────────────────────────────────────────────────────────

/// A byte sequence, base64 on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Base64Bytes(pub Vec<u8>);

impl From<Vec<u8>> for Base64Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Base64Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FieldValue for String {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>, DecodeError> {
        node.get_string_value()
    }
    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::String(self.clone()))
    }
}

impl FieldValue for bool {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>, DecodeError> {
        node.get_bool_value()
    }
    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::Bool(*self))
    }
}

impl FieldValue for i32 {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>, DecodeError> {
        node.get_i32_value()
    }
    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::from(*self))
    }
}

impl FieldValue for i64 {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>, DecodeError> {
        node.get_i64_value()
    }
    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::from(*self))
    }
}

impl FieldValue for f64 {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>, DecodeError> {
        node.get_f64_value()
    }
    fn encode(&self) -> Result<Value, EncodeError> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or(EncodeError::NonFiniteNumber { value: *self })
    }
}

impl FieldValue for Uuid {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>, DecodeError> {
        node.get_uuid_value()
    }
    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::String(self.hyphenated().to_string()))
    }
}

impl FieldValue for DateTime<FixedOffset> {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>, DecodeError> {
        node.get_date_time_value()
    }
    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
    }
}

impl FieldValue for NaiveDate {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>, DecodeError> {
        node.get_date_value()
    }
    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::String(self.format("%Y-%m-%d").to_string()))
    }
}

impl FieldValue for NaiveTime {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>, DecodeError> {
        node.get_time_value()
    }
    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::String(self.format("%H:%M:%S%.f").to_string()))
    }
}

impl FieldValue for Base64Bytes {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>, DecodeError> {
        Ok(node.get_byte_array_value()?.map(Base64Bytes))
    }
    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(Value::String(helpers::encode_base64(&self.0)))
    }
}

/// Untyped JSON, stored as-is.
impl FieldValue for Value {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>, DecodeError> {
        Ok(node.get_untyped_value())
    }
    fn encode(&self) -> Result<Value, EncodeError> {
        Ok(self.clone())
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn read(node: &JsonParseNode<'_>) -> Result<Option<Self>, DecodeError> {
        node.get_collection_values::<T>()
    }
    fn encode(&self) -> Result<Value, EncodeError> {
        self.iter()
            .enumerate()
            .map(|(index, item)| item.encode().map_err(|e| e.in_field(&index.to_string())))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}
