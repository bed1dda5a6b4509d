use serde_json::{Map, Value};

use super::{EACH_ELEMENT, FieldRule, FieldType, Schema, ToolRules};
use crate::models::{Block, Document};
use crate::parsing::ParseError;

impl Schema {
    /// Check every block of a document, stopping at the first violation.
    pub fn validate(&self, document: &Document) -> Result<(), ParseError> {
        document
            .iter()
            .enumerate()
            .try_for_each(|(index, block)| self.validate_block(index, block))
    }

    pub fn validate_block(&self, index: usize, block: &Block) -> Result<(), ParseError> {
        let Some(rules) = self.tool(&block.block_type) else {
            return Err(ParseError::validation(
                index,
                "type",
                format!("tool `{}` is not configured", block.block_type),
            ));
        };

        validate_fields(&block.data, rules, None)
            .map_err(|(field, reason)| ParseError::validation(index, field, reason))
    }
}

type Violation = (String, String);

fn join(parent: Option<&str>, key: &str) -> String {
    match parent {
        Some(parent) => format!("{parent}.{key}"),
        None => key.to_string(),
    }
}

fn validate_fields(
    data: &Map<String, Value>,
    rules: &ToolRules,
    parent: Option<&str>,
) -> Result<(), Violation> {
    if let Some(extra) = data.keys().find(|key| !rules.contains_key(*key)) {
        return Err((join(parent, extra), "unexpected field".to_string()));
    }

    for (name, rule) in rules {
        let path = join(parent, name);
        match data.get(name) {
            None | Some(Value::Null) if rule.required => {
                return Err((path, "required field is missing".to_string()));
            }
            None | Some(Value::Null) => {}
            Some(value) => validate_value(value, rule, &path)?,
        }
    }
    Ok(())
}

fn validate_value(value: &Value, rule: &FieldRule, path: &str) -> Result<(), Violation> {
    if !rule.kind.accepts(value) {
        return Err((path.to_string(), format!("expected {}", rule.kind.name())));
    }

    if let Some(allowed) = &rule.can_be_only
        && !allowed.contains(value)
    {
        return Err((path.to_string(), format!("value {value} is not allowed")));
    }

    let Some(nested) = &rule.data else {
        return Ok(());
    };
    debug_assert_eq!(rule.kind, FieldType::Array);

    if let Some(element_rule) = nested.get(EACH_ELEMENT) {
        let elements: Vec<(String, &Value)> = match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| (i.to_string(), item))
                .collect(),
            Value::Object(members) => members.iter().map(|(k, v)| (k.clone(), v)).collect(),
            _ => Vec::new(),
        };
        for (key, element) in elements {
            validate_value(element, element_rule, &join(Some(path), &key))?;
        }
        return Ok(());
    }

    match value {
        Value::Object(members) => validate_fields(members, nested, Some(path)),
        _ => Err((path.to_string(), "expected object with named fields".to_string())),
    }
}
