//! Character layout synthesis.
//!
//! Recognition engines in front of this crate report a transcription and one
//! block-level quadrilateral, with no per-character geometry. [`synthesize`]
//! reconstructs that geometry heuristically: characters tile the block along
//! its reading axis, with wide scripts claiming proportionally wider cells.

use tracing::instrument;

use crate::util::{axis_box, rotate_about};
use crate::{CharInfo, Error, Point, Quadrilateral};

/// Width of a CJK cell relative to a lowercase Latin cell.
const IDEOGRAPH_FACTOR: f32 = 2.0;
/// Width of an uppercase Latin cell relative to a lowercase one.
const UPPERCASE_FACTOR: f32 = 1.3;

const WIDE_PUNCTUATION: &[char] = &[
    '；', '、', '，', '。', '：', '！', '？', '～', '【', '】', '《', '》', '…', '（', '）',
];
const NARROW_PUNCTUATION: &[char] = &[
    '!', '?', '.', '‘', '’', ':', '“', '”', '@', '*', '<', '>', ';', '"', '\'', ',', '-',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Ideograph,
    Uppercase,
    Lowercase,
    WidePunctuation,
    NarrowPunctuation,
    Other,
}

impl CharClass {
    /// Classifies by character-set membership, tested in priority order.
    /// The final character of a block never classifies as wide punctuation;
    /// it falls through to the narrower classes instead.
    fn of(character: char, is_last: bool) -> Self {
        if matches!(character, '\u{4e00}'..='\u{9fa5}') {
            CharClass::Ideograph
        } else if character.is_ascii_uppercase() {
            CharClass::Uppercase
        } else if character.is_ascii_lowercase() {
            CharClass::Lowercase
        } else if !is_last && WIDE_PUNCTUATION.contains(&character) {
            CharClass::WidePunctuation
        } else if NARROW_PUNCTUATION.contains(&character) {
            CharClass::NarrowPunctuation
        } else {
            CharClass::Other
        }
    }

    fn width_factor(self) -> f32 {
        match self {
            CharClass::Ideograph | CharClass::WidePunctuation => IDEOGRAPH_FACTOR,
            CharClass::Uppercase => UPPERCASE_FACTOR,
            CharClass::Lowercase | CharClass::NarrowPunctuation | CharClass::Other => 1.0,
        }
    }
}

/// Folds a measured block orientation for the rotation step. Angles beyond
/// ±90° collapse toward upright, milder tilts pass through signed. Only
/// behaves for near-upright or near-inverted text; an exact ±180° input
/// stays at 180. Kept as measured from the source data, not generalized.
fn fold_angle(degrees: f32) -> f32 {
    let abs = degrees.abs();
    if abs >= 180.0 {
        360.0 - abs
    } else if abs >= 90.0 {
        180.0 - abs
    } else {
        degrees
    }
}

/// Derives one quadrilateral per character of `text`, tiling the block along
/// its reading axis with no gap and no overlap.
///
/// Pure function of `(text, position)`: identical inputs produce identical
/// output, and no partial result is built on failure. Fails with
/// [`Error::EmptyText`] for blank text and [`Error::InvalidPosition`] for a
/// missing or incomplete quadrilateral.
#[instrument(level = "debug", skip(position))]
pub fn synthesize(text: &str, position: Option<&Quadrilateral>) -> Result<Vec<CharInfo>, Error> {
    if text.trim().is_empty() {
        return Err(Error::EmptyText);
    }
    let [top_left, top_right, _, bottom_left] = position
        .and_then(Quadrilateral::corners)
        .ok_or(Error::InvalidPosition)?;

    let raw = (top_right.y() - top_left.y())
        .atan2(top_right.x() - top_left.x())
        .to_degrees();
    let angle = fold_angle(raw);

    // Proxies, not true edge lengths under rotation.
    let region_width = top_right.x() - top_left.x();
    let region_height = bottom_left.y() - top_left.y();
    let vertical = region_height > region_width;

    let characters: Vec<char> = text.chars().collect();
    let count = characters.len();
    let classes: Vec<CharClass> = characters
        .iter()
        .enumerate()
        .map(|(i, &c)| CharClass::of(c, i + 1 == count))
        .collect();

    // Lowercase-equivalent cell width; wider classes scale up from it.
    let unit_width = region_width
        / classes
            .iter()
            .map(|class| class.width_factor())
            .sum::<f32>();

    let mut infos = Vec::with_capacity(count);
    let mut offset_x = top_left.x();
    let mut offset_y = top_left.y();
    for (&character, &class) in characters.iter().zip(&classes) {
        let (width, height) = if vertical {
            (region_width, region_height / count as f32)
        } else {
            (unit_width * class.width_factor(), region_height)
        };
        let center = rotate_about(
            Point::new(offset_x + width / 2.0, offset_y + height / 2.0),
            top_left,
            angle,
        );
        if vertical {
            offset_y += height;
        } else {
            offset_x += width;
        }
        infos.push(CharInfo::new(character, axis_box(center, width, height)));
    }

    log::trace!(
        "laid out {count} characters over a {region_width}x{region_height} block (angle {angle})"
    );
    Ok(infos)
}
