pub mod convert;
pub mod hooks;
pub mod models;
pub mod parsing;
pub mod rendering;
pub mod upload;

// Re-export key types for easier usage
pub use convert::{ConvertError, JsonToHtml};
pub use hooks::{JsonToHtmlHook, Record, SaveError, SaveEvent};
pub use models::{Block, BlockData, BlockKind, Document};
pub use parsing::{ParseError, RawInput, Schema, SchemaError, parse_document};
pub use rendering::{RenderError, RenderOptions, Renderer, render_document};
pub use upload::{ImageLimits, ImageUploader, UploadMode, UploadResponse, UploadSettings, UploadedFile};
