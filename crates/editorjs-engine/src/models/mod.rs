pub mod block;
pub mod document;

pub use block::{Block, BlockData, BlockKind};
pub use document::Document;
