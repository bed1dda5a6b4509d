//! Block parser: turns an editor save payload into a [`Document`].
//!
//! Parsing is permissive unless a [`Schema`] is supplied, in which case every
//! block is also checked against the rules of its tool.

pub mod error;
pub mod schema;

use serde_json::Value;

use crate::models::{Block, BlockData, Document};

pub use error::ParseError;
pub use schema::{FieldRule, FieldType, Schema, SchemaError};

/// Raw save payload, either still encoded or already decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Json(String),
    Value(Value),
}

impl From<&str> for RawInput {
    fn from(json: &str) -> Self {
        RawInput::Json(json.to_string())
    }
}

impl From<String> for RawInput {
    fn from(json: String) -> Self {
        RawInput::Json(json)
    }
}

impl From<Value> for RawInput {
    fn from(value: Value) -> Self {
        RawInput::Value(value)
    }
}

impl From<&Value> for RawInput {
    fn from(value: &Value) -> Self {
        RawInput::Value(value.clone())
    }
}

impl RawInput {
    fn into_value(self) -> Result<Value, ParseError> {
        match self {
            RawInput::Json(json) => serde_json::from_str(&json)
                .map_err(|e| ParseError::malformed(format!("invalid JSON: {e}"))),
            RawInput::Value(value) => Ok(value),
        }
    }
}

/// Parse a save payload into an ordered document.
///
/// Without a schema only the structure is enforced. With one, the first rule
/// violation aborts the parse.
pub fn parse_document(
    input: impl Into<RawInput>,
    schema: Option<&Schema>,
) -> Result<Document, ParseError> {
    let document = parse_structure(input.into().into_value()?)?;

    if let Some(schema) = schema {
        for (index, block) in document.blocks.iter().enumerate() {
            schema.validate_block(index, block)?;
        }
    }

    log::debug!("Parsed document with {} blocks", document.len());
    Ok(document)
}

fn parse_structure(value: Value) -> Result<Document, ParseError> {
    let Value::Object(mut root) = value else {
        return Err(ParseError::malformed("document must be a JSON object"));
    };

    let blocks = match root.remove("blocks") {
        Some(Value::Array(blocks)) => blocks,
        Some(_) => return Err(ParseError::malformed("`blocks` must be an array")),
        None => return Err(ParseError::malformed("missing `blocks` array")),
    };

    blocks
        .into_iter()
        .enumerate()
        .map(|(index, block)| parse_block(index, block))
        .collect()
}

fn parse_block(index: usize, value: Value) -> Result<Block, ParseError> {
    let Value::Object(mut object) = value else {
        return Err(ParseError::malformed(format!(
            "block {index} must be a JSON object"
        )));
    };

    let block_type = match object.remove("type") {
        Some(Value::String(block_type)) => block_type,
        Some(_) => {
            return Err(ParseError::malformed(format!(
                "block {index} has a non-string `type`"
            )));
        }
        None => {
            return Err(ParseError::malformed(format!(
                "block {index} is missing `type`"
            )));
        }
    };

    let data = match object.remove("data") {
        None | Some(Value::Null) => BlockData::new(),
        Some(Value::Object(data)) => data,
        Some(_) => {
            return Err(ParseError::malformed(format!(
                "block {index} has a non-object `data`"
            )));
        }
    };

    Ok(Block::new(block_type, data))
}
