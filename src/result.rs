use geo::{LineString, Polygon};
use tracing::instrument;

use crate::{layout, Error};

/// Planar point in image coordinates.
pub type Point = geo::Point<f32>;

/// Four-corner region reported by a recognizer for a line or phrase of text.
///
/// Corners are ordered top-left, top-right, bottom-right, bottom-left. A
/// quadrilateral is complete iff all four corners are present; no convexity
/// or ordering check is made, callers supply geometrically sane corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quadrilateral {
    pub top_left: Option<Point>,
    pub top_right: Option<Point>,
    pub bottom_right: Option<Point>,
    pub bottom_left: Option<Point>,
}

impl Quadrilateral {
    pub fn new(top_left: Point, top_right: Point, bottom_right: Point, bottom_left: Point) -> Self {
        Self {
            top_left: Some(top_left),
            top_right: Some(top_right),
            bottom_right: Some(bottom_right),
            bottom_left: Some(bottom_left),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.top_left.is_some()
            && self.top_right.is_some()
            && self.bottom_right.is_some()
            && self.bottom_left.is_some()
    }

    /// The corners in order, when all four are present.
    pub fn corners(&self) -> Option<[Point; 4]> {
        Some([
            self.top_left?,
            self.top_right?,
            self.bottom_right?,
            self.bottom_left?,
        ])
    }

    /// Bridge to the polygon representation consumed by perspective mapping.
    pub fn to_polygon(&self) -> Option<Polygon<f32>> {
        let corners = self.corners()?;
        Some(Polygon::new(
            LineString::new(corners.iter().map(|p| p.0).collect()),
            vec![],
        ))
    }
}

/// A single character of a recognized block together with its synthesized
/// quadrilateral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharInfo {
    pub character: char,
    pub position: Quadrilateral,
}

impl CharInfo {
    pub fn new(character: char, position: Quadrilateral) -> Self {
        Self {
            character,
            position,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.position.is_complete()
    }
}

/// One recognized unit of text: the transcription, the block-level position
/// the engine reported for it, and the derived per-character list.
///
/// Recognizers return blocks with `characters` empty; synthesis fills it so
/// that `characters.len() == text.chars().count()`, in text order.
#[derive(Debug, Clone, Default)]
pub struct TextBlock {
    pub text: String,
    pub position: Option<Quadrilateral>,
    pub characters: Vec<CharInfo>,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, position: Quadrilateral) -> Self {
        Self {
            text: text.into(),
            position: Some(position),
            characters: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        if self.text.trim().is_empty() {
            return true;
        }
        if !self.position.is_some_and(|p| p.is_complete()) {
            return true;
        }
        self.characters.is_empty() || self.characters.iter().all(CharInfo::is_empty)
    }

    /// Derives per-character geometry from the transcription and block
    /// position. Only meant for engines without character-level output.
    ///
    /// The block is left untouched when synthesis fails; on success the
    /// previous `characters` content is fully replaced.
    #[instrument(level = "debug", skip(self))]
    pub fn synthesize_characters(&mut self) -> Result<(), Error> {
        self.characters = layout::synthesize(&self.text, self.position.as_ref())?;
        Ok(())
    }
}

/// Template-side counterpart of a [`TextBlock`]: the same recognized unit
/// plus the landmark region it anchors on the reference image.
#[derive(Debug, Clone, Default)]
pub struct ReferenceBlock {
    pub block: TextBlock,
    pub reference_position: Option<Quadrilateral>,
}

impl ReferenceBlock {
    pub fn new(block: TextBlock, reference_position: Quadrilateral) -> Self {
        Self {
            block,
            reference_position: Some(reference_position),
        }
    }

    /// Landmark corners used for similarity validation.
    pub fn reference_points(&self) -> Option<[Point; 4]> {
        self.reference_position?.corners()
    }
}

/// Document-level result: every recognized block of one image, in reading
/// order, ready for the downstream perspective-mapping stage.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub blocks: Vec<TextBlock>,
}

impl Document {
    /// Assembles a document from fully populated blocks.
    ///
    /// Fails with [`Error::NullInput`] when the list is empty or any block
    /// is still empty (blank text, incomplete position, or characters not
    /// yet synthesized).
    #[instrument(level = "debug", skip(blocks))]
    pub fn from_blocks(blocks: Vec<TextBlock>) -> Result<Self, Error> {
        if blocks.is_empty() || blocks.iter().any(TextBlock::is_empty) {
            return Err(Error::NullInput);
        }
        log::debug!("document assembled from {} recognized blocks", blocks.len());
        Ok(Self { blocks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> Quadrilateral {
        Quadrilateral::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        )
    }

    #[test]
    fn default_quadrilateral_is_incomplete() {
        let quad = Quadrilateral::default();
        assert!(!quad.is_complete());
        assert!(quad.corners().is_none());
        assert!(quad.to_polygon().is_none());
    }

    #[test]
    fn dropping_a_corner_breaks_completeness() {
        let mut quad = unit_quad();
        assert!(quad.is_complete());
        quad.bottom_right = None;
        assert!(!quad.is_complete());
        assert!(CharInfo::new('a', quad).is_empty());
    }

    #[test]
    fn block_is_empty_until_characters_are_synthesized() {
        let mut block = TextBlock::new("hi", unit_quad());
        assert!(block.is_empty());
        block.synthesize_characters().expect("synthesis failed");
        assert!(!block.is_empty());
        assert_eq!(block.characters.len(), 2);
    }

    #[test]
    fn document_requires_populated_blocks() {
        assert!(matches!(
            Document::from_blocks(Vec::new()),
            Err(Error::NullInput)
        ));

        let unsynthesized = TextBlock::new("hi", unit_quad());
        assert!(matches!(
            Document::from_blocks(vec![unsynthesized]),
            Err(Error::NullInput)
        ));

        let mut block = TextBlock::new("hi", unit_quad());
        block.synthesize_characters().expect("synthesis failed");
        let document = Document::from_blocks(vec![block]).expect("document rejected");
        assert_eq!(document.blocks.len(), 1);
    }

    #[test]
    fn reference_points_come_from_the_reference_position() {
        let reference = ReferenceBlock::new(TextBlock::default(), unit_quad());
        let points = reference.reference_points().expect("incomplete reference");
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[2], Point::new(1.0, 1.0));
        assert!(ReferenceBlock::default().reference_points().is_none());
    }
}
