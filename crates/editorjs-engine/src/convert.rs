//! One-shot JSON to HTML conversion: parse, optionally validate, render.

use std::sync::Arc;

use crate::models::Document;
use crate::parsing::{ParseError, RawInput, Schema, parse_document};
use crate::rendering::{RenderError, RenderOptions, Renderer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Converter configured once and reused for many payloads.
#[derive(Debug, Clone, Default)]
pub struct JsonToHtml {
    schema: Option<Arc<Schema>>,
    renderer: Renderer,
}

impl JsonToHtml {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(Arc::new(schema));
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.renderer = Renderer::new(options);
        self
    }

    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_deref()
    }

    /// The parsed (and, with a schema, validated) blocks of a payload.
    pub fn blocks(&self, input: impl Into<RawInput>) -> Result<Document, ParseError> {
        parse_document(input, self.schema())
    }

    /// Parse errors abort the conversion; no partial HTML is produced.
    pub fn convert(&self, input: impl Into<RawInput>) -> Result<String, ConvertError> {
        let document = self.blocks(input)?;
        Ok(self.renderer.render(&document)?)
    }
}
