//! Persistence hook that keeps an HTML attribute in sync with its JSON source.
//!
//! Storage layers call [`JsonToHtmlHook::handle`] before validating,
//! inserting or updating a record. A conversion failure blocks the save.

use serde_json::Value;

use crate::convert::{ConvertError, JsonToHtml};
use crate::parsing::RawInput;

/// Attribute access the hook needs from a stored record.
pub trait Record {
    fn attribute(&self, name: &str) -> Option<Value>;
    fn set_attribute(&mut self, name: &str, value: String);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveEvent {
    BeforeValidate,
    BeforeInsert,
    BeforeUpdate,
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("{attribute} could not convert before saving: {source}")]
    ConversionFailed {
        attribute: String,
        #[source]
        source: ConvertError,
    },

    #[error("Record has no attribute `{0}`")]
    MissingAttribute(String),

    #[error("JSON attribute `{0}` has no HTML attribute to write to")]
    AttributeMismatch(String),
}

#[derive(Debug, Clone)]
pub struct JsonToHtmlHook {
    json_attributes: Vec<String>,
    html_attributes: Vec<String>,
    converter: JsonToHtml,
}

impl Default for JsonToHtmlHook {
    fn default() -> Self {
        Self {
            json_attributes: vec!["content_json".to_string()],
            html_attributes: vec!["content".to_string()],
            converter: JsonToHtml::default(),
        }
    }
}

impl JsonToHtmlHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs each JSON attribute with the HTML attribute at the same position.
    pub fn with_attributes<J, H>(mut self, json_attributes: J, html_attributes: H) -> Self
    where
        J: IntoIterator,
        J::Item: Into<String>,
        H: IntoIterator,
        H::Item: Into<String>,
    {
        self.json_attributes = json_attributes.into_iter().map(Into::into).collect();
        self.html_attributes = html_attributes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_converter(mut self, converter: JsonToHtml) -> Self {
        self.converter = converter;
        self
    }

    /// Every pair is converted before any attribute is written, so a failed
    /// save leaves the record untouched.
    pub fn handle<R: Record>(&self, event: SaveEvent, record: &mut R) -> Result<(), SaveError> {
        log::debug!("Converting editor attributes on {event:?}");

        let mut converted = Vec::with_capacity(self.json_attributes.len());
        for (i, attribute) in self.json_attributes.iter().enumerate() {
            let target = self
                .html_attributes
                .get(i)
                .ok_or_else(|| SaveError::AttributeMismatch(attribute.clone()))?;
            let value = record
                .attribute(attribute)
                .ok_or_else(|| SaveError::MissingAttribute(attribute.clone()))?;

            let input = match value {
                Value::String(json) => RawInput::Json(json),
                other => RawInput::Value(other),
            };
            let html = self
                .converter
                .convert(input)
                .map_err(|source| SaveError::ConversionFailed {
                    attribute: attribute.clone(),
                    source,
                })?;

            converted.push((target, html));
        }

        for (target, html) in converted {
            record.set_attribute(target, html);
        }

        Ok(())
    }
}
