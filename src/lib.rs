//! Per-character geometry for block-level OCR output, plus the point-group
//! similarity scores used to validate marker layouts against a reference
//! template before a perspective transform.
//!
//! Recognition itself is an external collaborator: implement
//! [`TextRecognizer`] over any engine that reports a transcription and one
//! quadrilateral per block, and this crate reconstructs the per-character
//! boxes the engine did not provide.

use image::DynamicImage;

mod error;
pub mod layout;
mod result;
pub mod similarity;
pub mod staging;
mod util;

pub use error::Error;
pub use result::*;

pub use geo;

/// Contract for an upstream recognition engine.
///
/// Implementations return one [`TextBlock`] per recognized line or phrase,
/// with `text` and `position` populated and `characters` left empty. The
/// crate never performs recognition itself and does not validate what the
/// engine reports beyond the preconditions of the operations applied later.
pub trait TextRecognizer {
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<TextBlock>, Error>;

    /// Runs recognition, fills in per-character geometry for every block,
    /// and assembles the document-level result.
    fn recognize_document(&self, image: &DynamicImage) -> Result<Document, Error> {
        let mut blocks = self.recognize(image)?;
        for block in &mut blocks {
            block.synthesize_characters()?;
        }
        Document::from_blocks(blocks)
    }
}
