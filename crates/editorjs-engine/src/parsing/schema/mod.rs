//! Validation rules for block data.
//!
//! Rules use the JSON layout understood by the EditorJS server-side
//! validators: a `tools` object keyed by block type, each mapping field names
//! to a rule with a `type`, an optional `required` flag (defaults to true),
//! an optional `canBeOnly` list and, for arrays, nested `data` rules. The
//! nested key `-` applies to every element of a sequence.

mod validate;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rules for the fields of one tool.
pub type ToolRules = BTreeMap<String, FieldRule>;

/// Nested rule key that applies to every element of a sequence.
pub const EACH_ELEMENT: &str = "-";

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Invalid validation rules: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid rule for `{tool}.{field}`: {reason}")]
    InvalidRule {
        tool: String,
        field: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    #[serde(alias = "integer")]
    Int,
    #[serde(alias = "boolean")]
    Bool,
    /// A JSON array or object.
    Array,
    Any,
}

impl FieldType {
    fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Int => "int",
            FieldType::Bool => "bool",
            FieldType::Array => "array",
            FieldType::Any => "any",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Int => value.is_i64() || value.is_u64(),
            FieldType::Bool => value.is_boolean(),
            FieldType::Array => value.is_array() || value.is_object(),
            FieldType::Any => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldRule {
    #[serde(rename = "type")]
    pub kind: FieldType,
    #[serde(default = "default_required")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_be_only: Option<Vec<Value>>,
    /// Accepted for compatibility; text is always escaped when rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<BTreeMap<String, FieldRule>>,
}

fn default_required() -> bool {
    true
}

impl FieldRule {
    pub fn new(kind: FieldType) -> Self {
        Self {
            kind,
            required: true,
            can_be_only: None,
            allowed_tags: None,
            data: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn can_be_only(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.can_be_only = Some(values.into_iter().collect());
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = (String, FieldRule)>) -> Self {
        self.data = Some(fields.into_iter().collect());
        self
    }

    /// Shorthand for an array whose every element follows `rule`.
    pub fn each(rule: FieldRule) -> Self {
        FieldRule::new(FieldType::Array).with_fields([(EACH_ELEMENT.to_string(), rule)])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub tools: BTreeMap<String, ToolRules>,
}

impl Schema {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: Schema = serde_json::from_str(json)?;
        schema.check()?;
        Ok(schema)
    }

    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        let schema: Schema = serde_json::from_value(value)?;
        schema.check()?;
        Ok(schema)
    }

    pub fn with_tool(mut self, tool: impl Into<String>, rules: ToolRules) -> Self {
        self.tools.insert(tool.into(), rules);
        self
    }

    pub fn tool(&self, name: &str) -> Option<&ToolRules> {
        self.tools.get(name)
    }

    /// Nested rules are only meaningful on array fields.
    fn check(&self) -> Result<(), SchemaError> {
        fn walk(tool: &str, path: &str, rule: &FieldRule) -> Result<(), SchemaError> {
            let Some(nested) = &rule.data else {
                return Ok(());
            };
            if rule.kind != FieldType::Array {
                return Err(SchemaError::InvalidRule {
                    tool: tool.to_string(),
                    field: path.to_string(),
                    reason: format!("nested `data` requires type array, found {}", rule.kind.name()),
                });
            }
            for (name, child) in nested {
                walk(tool, &format!("{path}.{name}"), child)?;
            }
            Ok(())
        }

        for (tool, rules) in &self.tools {
            for (field, rule) in rules {
                walk(tool, field, rule)?;
            }
        }
        Ok(())
    }
}
