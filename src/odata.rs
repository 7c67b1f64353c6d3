//! OData envelopes around model payloads.
//!
//! - [`CollectionResponse`] – a page of items with paging links
//! - [`ODataError`] – the error body the service returns on failure

use crate::error::{DecodeError, EncodeError};
use crate::parser::JsonParseNode;
use crate::serialization::{AdditionalData, Parsable};
use crate::writer::JsonSerializationWriter;
use chrono::{DateTime, FixedOffset};
use std::fmt;

pub const COUNT_KEY: &str = "@odata.count";
pub const NEXT_LINK_KEY: &str = "@odata.nextLink";
pub const DELTA_LINK_KEY: &str = "@odata.deltaLink";
pub const VALUE_KEY: &str = "value";

// ────────────────────────────────────────────────────────────────────────────
// Collections
// ────────────────────────────────────────────────────────────────────────────

/// One page of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionResponse<T> {
    count: Option<i64>,
    next_link: Option<String>,
    delta_link: Option<String>,
    value: Option<Vec<T>>,
    additional_data: AdditionalData,
}

impl<T> Default for CollectionResponse<T> {
    fn default() -> Self {
        Self {
            count: None,
            next_link: None,
            delta_link: None,
            value: None,
            additional_data: AdditionalData::new(),
        }
    }
}

impl<T> CollectionResponse<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total item count, present when the request asked for `$count`.
    pub fn count(&self) -> Option<i64> {
        self.count
    }

    pub fn set_count(&mut self, value: Option<i64>) {
        self.count = value;
    }

    /// URL of the next page; `None` on the last page.
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref()
    }

    pub fn set_next_link(&mut self, value: Option<String>) {
        self.next_link = value;
    }

    pub fn delta_link(&self) -> Option<&str> {
        self.delta_link.as_deref()
    }

    pub fn set_delta_link(&mut self, value: Option<String>) {
        self.delta_link = value;
    }

    pub fn value(&self) -> Option<&[T]> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<Vec<T>>) {
        self.value = value;
    }

    /// Take the items out of the page.
    pub fn into_items(self) -> Vec<T> {
        self.value.unwrap_or_default()
    }
}

impl<T: Parsable> Parsable for CollectionResponse<T> {
    fn create_from_discriminator_value(_node: &JsonParseNode<'_>) -> Result<Self, DecodeError> {
        Ok(Self::new())
    }

    fn deserialize_fields(&mut self, node: &JsonParseNode<'_>) -> Result<(), DecodeError> {
        for (key, value) in node.as_object()? {
            let child = JsonParseNode::new(value);
            let res = match key.as_str() {
                COUNT_KEY => child.get_i64_value().map(|v| self.count = v),
                NEXT_LINK_KEY => child.get_string_value().map(|v| self.next_link = v),
                DELTA_LINK_KEY => child.get_string_value().map(|v| self.delta_link = v),
                VALUE_KEY => child
                    .get_collection_of_object_values::<T>()
                    .map(|v| self.value = v),
                _ => {
                    self.additional_data.insert(key.clone(), value.clone());
                    Ok(())
                }
            };
            res.map_err(|e| e.in_field(key))?;
        }
        Ok(())
    }

    fn serialize_fields(&self, writer: &mut JsonSerializationWriter) -> Result<(), EncodeError> {
        writer.write_i64_value(COUNT_KEY, self.count);
        writer.write_string_value(NEXT_LINK_KEY, self.next_link.as_deref());
        writer.write_string_value(DELTA_LINK_KEY, self.delta_link.as_deref());
        writer.write_collection_of_object_values(VALUE_KEY, self.value.as_deref())
    }

    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

graph_model! {
    /// Error body returned with a failed request.
    pub struct ODataError {
        "error" => error, set_error: MainError;
    }
}

graph_model! {
    pub struct MainError {
        /// Service-defined error code such as `Request_ResourceNotFound`.
        "code" => code, set_code: String;
        "details" => details, set_details: Vec<ErrorDetails>;
        "innerError" => inner_error, set_inner_error: InnerError;
        "message" => message, set_message: String;
        "target" => target, set_target: String;
    }
}

graph_model! {
    pub struct ErrorDetails {
        "code" => code, set_code: String;
        "message" => message, set_message: String;
        "target" => target, set_target: String;
    }
}

graph_model! {
    /// Diagnostics to quote when reporting a failure to the service owner.
    pub struct InnerError {
        "client-request-id" => client_request_id, set_client_request_id: String;
        "date" => date, set_date: DateTime<FixedOffset>;
        "request-id" => request_id, set_request_id: String;
    }
}

impl fmt::Display for ODataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(main) = self.error() else {
            return f.write_str("service returned an error without details");
        };
        let code = main.code().map(String::as_str).unwrap_or("unknown");
        match main.message() {
            Some(message) => write!(f, "{code}: {message}")?,
            None => f.write_str(code)?,
        }
        if let Some(request_id) = main.inner_error().and_then(InnerError::request_id) {
            write!(f, " (request-id {request_id})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ODataError {}

