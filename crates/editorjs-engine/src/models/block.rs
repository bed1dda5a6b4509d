use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Handler-specific payload of a block.
pub type BlockData = Map<String, Value>;

/// The closed set of block tools the engine knows about.
///
/// Tags are matched case-sensitively against the `type` field of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `header`: heading with a level and text.
    Header,
    /// `paragraph`: plain paragraph text.
    Paragraph,
    /// `image`: uploaded or fetched image with display flags.
    Image,
    /// `list`: ordered or unordered list of text items.
    List,
    /// `table`: rows of text cells.
    Table,
    /// `quote`: quoted text with optional caption and alignment.
    Quote,
    /// `warning`: alert box with title and message.
    Warning,
    /// `code`: preformatted code snippet.
    Code,
    /// `embed`: third-party iframe embed (youtube, vimeo, ...).
    Embed,
    /// `delimiter`: visual separator with no data.
    Delimiter,
    /// `inline-code`: toolbar-only tool, never stored as a block of its own.
    InlineCode,
}

impl BlockKind {
    pub const ALL: [BlockKind; 11] = [
        BlockKind::Header,
        BlockKind::Paragraph,
        BlockKind::Image,
        BlockKind::List,
        BlockKind::Table,
        BlockKind::Quote,
        BlockKind::Warning,
        BlockKind::Code,
        BlockKind::Embed,
        BlockKind::Delimiter,
        BlockKind::InlineCode,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Header => "header",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Image => "image",
            BlockKind::List => "list",
            BlockKind::Table => "table",
            BlockKind::Quote => "quote",
            BlockKind::Warning => "warning",
            BlockKind::Code => "code",
            BlockKind::Embed => "embed",
            BlockKind::Delimiter => "delimiter",
            BlockKind::InlineCode => "inline-code",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// One content unit of a document: a type tag and its data payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub data: BlockData,
}

impl Block {
    pub fn new(block_type: impl Into<String>, data: BlockData) -> Self {
        Self {
            block_type: block_type.into(),
            data,
        }
    }

    /// The known tool for this block, if its tag is registered.
    pub fn kind(&self) -> Option<BlockKind> {
        BlockKind::from_tag(&self.block_type)
    }
}
