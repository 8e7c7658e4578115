//! Binary rendering of generated résumés.

mod pdf;

pub use pdf::PdfRenderer;

use thiserror::Error;

/// Failure modes of the binary renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("document too large to render: {lines} lines exceeds the {limit}-line limit")]
    TooLarge { lines: usize, limit: usize },
}

/// Capability for rendering a generated document to a binary artifact.
///
/// The composer treats this capability as optional: when no renderer is wired
/// in, or a render fails, the text outputs are still produced and persisted.
pub trait ResumeRenderer: Send + Sync {
    fn render(&self, document: &str) -> Result<Vec<u8>, RenderError>;
}
