pub mod create_preview;
pub mod fetch_preview;
