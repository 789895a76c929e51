//! mscgen output: attribute rendering and the final document.

pub mod attributes;
pub mod document;

pub use attributes::{AttributeRenderer, Attributes};
pub use document::{render_document, write_document};
