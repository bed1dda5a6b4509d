//! Block renderer: maps each block of a [`Document`] to an HTML fragment.
//!
//! Text is escaped; the markup emitted by the handlers is trusted. Blocks
//! whose type has no handler contribute nothing unless strict mode is on.

pub mod fields;
pub mod handlers;
pub mod html;

use crate::models::{BlockData, BlockKind, Document};

/// Renders the data payload of one block.
pub type Handler = fn(&BlockData) -> String;

/// The handler registered for a tool. Toolbar-only tools have none.
pub fn handler_for(kind: BlockKind) -> Option<Handler> {
    let handler: Handler = match kind {
        BlockKind::Header => handlers::header,
        BlockKind::Paragraph => handlers::paragraph,
        BlockKind::Image => handlers::image,
        BlockKind::List => handlers::list,
        BlockKind::Table => handlers::table,
        BlockKind::Quote => handlers::quote,
        BlockKind::Warning => handlers::warning,
        BlockKind::Code => handlers::code,
        BlockKind::Embed => handlers::embed,
        BlockKind::Delimiter => handlers::delimiter,
        BlockKind::InlineCode => return None,
    };
    Some(handler)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("Block {index} has unsupported type `{block_type}`")]
    UnknownBlockType { index: usize, block_type: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Fail on blocks without a handler instead of skipping them.
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn strict() -> Self {
        Self::new(RenderOptions { strict: true })
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn render(&self, document: &Document) -> Result<String, RenderError> {
        let mut html = String::new();

        for (index, block) in document.iter().enumerate() {
            match block.kind().and_then(handler_for) {
                Some(handler) => html.push_str(&handler(&block.data)),
                None if self.options.strict => {
                    return Err(RenderError::UnknownBlockType {
                        index,
                        block_type: block.block_type.clone(),
                    });
                }
                None => {
                    log::debug!(
                        "Skipping block {index} with unsupported type `{}`",
                        block.block_type
                    );
                }
            }
        }

        Ok(html)
    }
}

/// Lenient rendering: unknown blocks are skipped, so this cannot fail.
pub fn render_document(document: &Document) -> String {
    Renderer::default().render(document).unwrap_or_default()
}
