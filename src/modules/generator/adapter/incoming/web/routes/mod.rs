mod create_preview;
mod export;
mod generate;
mod get_preview;

pub use create_preview::{
    __path_create_preview_handler, create_preview_handler, CreatePreviewRequest,
    CreatePreviewResponse,
};
pub use export::{__path_export_markdown_handler, export_markdown_handler};
pub use generate::{__path_generate_markdown_handler, generate_markdown_handler, GenerateMarkdownResponse};
pub use get_preview::{__path_get_preview_handler, get_preview_handler, PreviewResponse};
