//! Typed models for the Microsoft Graph directory and device-management API.
//!
//! Every resource is a struct with one getter and one setter per property,
//! an additional-data bag for properties the model does not know, and the
//! `@odata.type` discriminator that selects concrete subtypes on decode.
//!
//! - [`models`] – the generated API surface (entities, complex types, enums)
//! - [`parser`] – [`JsonParseNode`](parser::JsonParseNode) and [`parse`]
//! - [`writer`] – [`JsonSerializationWriter`](writer::JsonSerializationWriter)
//!   and [`to_json_string`]
//! - [`odata`] – collection pages and error envelopes
//! - [`payload`] – classification of whole response bodies
//! - [`roundtrip`] – decode/encode conformance checks over files
//!
//! The binary `graph-models` wraps [`payload`] and [`roundtrip`] in a CLI.

#[macro_use]
mod macros;

pub mod enums;
pub mod error;
pub mod models;
pub mod odata;
pub mod parser;
pub mod payload;
pub mod roundtrip;
pub mod serialization;
pub mod writer;

pub use enums::{WireEnum, serialize_values};
pub use error::{DecodeError, EncodeError};
pub use parser::{parse, parse_value};
pub use payload::Payload;
pub use serialization::{AdditionalData, Base64Bytes, FieldValue, Model, Parsable};
pub use writer::{serialize_object, to_json_string, to_json_string_pretty};
