//! JSON serialization writer.
//!
//! Models write one property at a time into a [`JsonSerializationWriter`];
//! unset properties are skipped, so the output only carries what the model
//! holds. Key order is the order of the writes.

use crate::enums::{WireEnum, serialize_values};
use crate::error::EncodeError;
use crate::serialization::{AdditionalData, FieldValue, Parsable};
use serde_json::{Map, Value};

/// Accumulates the properties of one JSON object.
#[derive(Debug, Default)]
pub struct JsonSerializationWriter {
    object: Map<String, Value>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write any property value; `None` writes nothing.
    pub fn write_value<T: FieldValue>(
        &mut self,
        key: &str,
        value: Option<&T>,
    ) -> Result<(), EncodeError> {
        if let Some(value) = value {
            let encoded = value.encode().map_err(|e| e.in_field(key))?;
            self.object.insert(key.to_string(), encoded);
        }
        Ok(())
    }

    pub fn write_string_value(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.object
                .insert(key.to_string(), Value::String(value.to_string()));
        }
    }

    pub fn write_bool_value(&mut self, key: &str, value: Option<bool>) {
        if let Some(value) = value {
            self.object.insert(key.to_string(), Value::Bool(value));
        }
    }

    pub fn write_i64_value(&mut self, key: &str, value: Option<i64>) {
        if let Some(value) = value {
            self.object.insert(key.to_string(), Value::from(value));
        }
    }

    pub fn write_enum_value<E: WireEnum>(&mut self, key: &str, value: Option<E>) {
        if let Some(value) = value {
            self.object
                .insert(key.to_string(), Value::String(value.to_wire()));
        }
    }

    pub fn write_collection_of_enum_values<E: WireEnum>(&mut self, key: &str, values: Option<&[E]>) {
        if let Some(values) = values {
            let encoded = serialize_values(values)
                .into_iter()
                .map(Value::String)
                .collect();
            self.object.insert(key.to_string(), Value::Array(encoded));
        }
    }

    /// Write a nested object through its own `serialize`.
    pub fn write_object_value<T: Parsable + ?Sized>(
        &mut self,
        key: &str,
        value: Option<&T>,
    ) -> Result<(), EncodeError> {
        if let Some(value) = value {
            let encoded = serialize_object(value).map_err(|e| e.in_field(key))?;
            self.object.insert(key.to_string(), encoded);
        }
        Ok(())
    }

    pub fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> Result<(), EncodeError> {
        if let Some(values) = values {
            let mut encoded = Vec::with_capacity(values.len());
            for (index, value) in values.iter().enumerate() {
                encoded.push(
                    serialize_object(value)
                        .map_err(|e| e.in_field(&index.to_string()).in_field(key))?,
                );
            }
            self.object.insert(key.to_string(), Value::Array(encoded));
        }
        Ok(())
    }

    /// Append unmodeled properties verbatim.
    pub fn write_additional_data(&mut self, data: &AdditionalData) {
        for (key, value) in data {
            self.object.insert(key.clone(), value.clone());
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.object)
    }
}

/// Serialize a model into a JSON value.
pub fn serialize_object<T: Parsable + ?Sized>(item: &T) -> Result<Value, EncodeError> {
    let mut writer = JsonSerializationWriter::new();
    item.serialize(&mut writer)?;
    Ok(writer.into_value())
}

/// Serialize a model into compact JSON text.
pub fn to_json_string<T: Parsable + ?Sized>(item: &T) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(&serialize_object(item)?)?)
}

/// Serialize a model into indented JSON text.
pub fn to_json_string_pretty<T: Parsable + ?Sized>(item: &T) -> Result<String, EncodeError> {
    Ok(serde_json::to_string_pretty(&serialize_object(item)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmailAddress, Importance, WindowsUpdateForBusinessUpdateWeeks};
    use serde_json::json;

    #[test]
    fn typed_writes_skip_none() {
        let mut address = EmailAddress::new();
        address.set_name(Some("Ada".into()));

        let mut writer = JsonSerializationWriter::new();
        writer.write_string_value("a", None);
        writer.write_bool_value("b", Some(true));
        writer.write_i64_value("c", None);
        writer.write_enum_value("d", Some(Importance::Low));
        writer.write_enum_value(
            "e",
            Some(WindowsUpdateForBusinessUpdateWeeks::SECOND_WEEK | WindowsUpdateForBusinessUpdateWeeks::EVERY_WEEK),
        );
        writer.write_collection_of_enum_values("f", Some(&[Importance::High, Importance::Normal][..]));
        writer
            .write_object_value("g", Some(&address))
            .expect("object");
        writer
            .write_object_value::<EmailAddress>("h", None)
            .expect("absent object");

        assert_eq!(
            writer.into_value(),
            json!({
                "b": true,
                "d": "low",
                "e": "secondWeek,everyWeek",
                "f": ["high", "normal"],
                "g": { "name": "Ada" }
            })
        );
    }

    #[test]
    fn non_finite_numbers_name_their_field() {
        let mut writer = JsonSerializationWriter::new();
        let err = writer
            .write_value("score", Some(&vec![1.0, f64::NAN]))
            .expect_err("NaN");
        assert!(matches!(&err, EncodeError::Field { field, .. } if field == "score"));
        assert_eq!(err.to_string(), "field `score`: field `1`: NaN cannot be represented in JSON");
    }
}
