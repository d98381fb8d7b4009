mod block;
mod context;
mod document;
mod profile;
mod styles;
mod youtube;

pub use block::render_block;
pub use context::{RenderContext, RenderMode};
pub use document::{render_document, render_preview};
pub use styles::{stylesheet, swatch};
