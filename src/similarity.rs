//! Similarity scores over corresponding landmark-point groups.
//!
//! Both scorers assume correspondence by index: element `i` of one group
//! stands for the same landmark as element `i` of the other. Neither
//! searches for matches, and permuting one group without the other
//! invalidates the result.

use itertools::Itertools;
use tracing::instrument;

use crate::util::{bearing, distance};
use crate::{Error, Point};

/// Translation-sensitive score over corresponding point pairs.
///
/// `1 / (1 + mean offset distance + mean offset bearing)`, with bearings in
/// radians as `atan2` reports them. Scores 1 exactly when every pair
/// coincides, and decreases with both average offset and average bearing.
#[instrument(level = "trace", skip(a, b))]
pub fn spatial_similarity(a: &[Point], b: &[Point]) -> Result<f32, Error> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(Error::EmptyInput);
    }

    let count = a.len() as f32;
    let mean_distance = a
        .iter()
        .zip(b)
        .map(|(&p, &q)| distance(p, q))
        .sum::<f32>()
        / count;
    let mean_bearing = a.iter().zip(b).map(|(&p, &q)| bearing(p, q)).sum::<f32>() / count;

    Ok(1.0 / (1.0 + mean_distance + mean_bearing))
}

/// Shape score over every unordered landmark pair: captures similarity up to
/// uniform scale and rotation, independent of absolute translation.
///
/// Pair distances are normalized against the mean pairwise distance within
/// `a` on both sides of the ratio. The double division is kept as stated:
/// cancelling it changes the result for groups with zero mean distance.
#[instrument(level = "trace", skip(a, b))]
pub fn matched_group_similarity(a: &[Point], b: &[Point]) -> Result<f32, Error> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.len() < 2 {
        return Err(Error::DegenerateInput { got: a.len() });
    }

    let mean_a = mean_pairwise_distance(a);

    let mut ratio_sum = 0.0f32;
    let mut angle_sum = 0.0f32;
    for (i, j) in (0..a.len()).tuple_combinations::<(_, _)>() {
        let dist_a = distance(a[i], a[j]);
        let dist_b = distance(b[i], b[j]);
        ratio_sum += (dist_a / mean_a) / (dist_b / mean_a);
        angle_sum += (bearing(a[i], a[j]) - bearing(b[i], b[j])).abs();
    }

    let pairs = (a.len() * (a.len() - 1) / 2) as f32;
    let mean_ratio = ratio_sum / pairs;
    let mean_angle = angle_sum / pairs;
    Ok(1.0 / (1.0 + (1.0 - mean_ratio).abs() + mean_angle))
}

fn mean_pairwise_distance(group: &[Point]) -> f32 {
    let mut total = 0.0f32;
    let mut count = 0u32;
    for (&p, &q) in group.iter().tuple_combinations::<(_, _)>() {
        total += distance(p, q);
        count += 1;
    }
    if count > 0 {
        total / count as f32
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn square(side: f32) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(side, 0.0),
            Point::new(side, side),
            Point::new(0.0, side),
        ]
    }

    fn shifted(group: &[Point], dx: f32, dy: f32) -> Vec<Point> {
        group
            .iter()
            .map(|p| Point::new(p.x() + dx, p.y() + dy))
            .collect()
    }

    #[test]
    fn identical_groups_score_one() {
        let group = square(10.0);
        assert_eq!(spatial_similarity(&group, &group).unwrap(), 1.0);
        assert_eq!(matched_group_similarity(&group, &group).unwrap(), 1.0);
    }

    #[test]
    fn offset_lowers_the_pairwise_score() {
        let group = square(10.0);
        let moved = shifted(&group, 3.0, 4.0);
        let score = spatial_similarity(&group, &moved).unwrap();

        // Every pair is 5 apart on a bearing of atan2(4, 3).
        let expected = 1.0 / (1.0 + 5.0 + 4.0f32.atan2(3.0));
        assert_relative_eq!(score, expected, epsilon = 1e-6);
    }

    #[test]
    fn group_score_ignores_translation() {
        let group = square(10.0);
        let moved = shifted(&group, 3.0, 4.0);
        assert!(spatial_similarity(&group, &moved).unwrap() < 1.0);
        assert_eq!(matched_group_similarity(&group, &moved).unwrap(), 1.0);
    }

    #[test]
    fn uniform_scale_shifts_the_distance_ratios() {
        let group = square(10.0);
        let doubled = square(20.0);

        // Each pair ratio is 1/2, bearings are unchanged.
        let score = matched_group_similarity(&group, &doubled).unwrap();
        assert_relative_eq!(score, 1.0 / 1.5, epsilon = 1e-5);
    }

    #[test]
    fn permuting_one_group_changes_the_score() {
        let group = square(10.0);
        let mut permuted = group.clone();
        permuted.swap(0, 2);
        assert!(spatial_similarity(&group, &permuted).unwrap() < 1.0);
        assert!(matched_group_similarity(&group, &permuted).unwrap() < 1.0);
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let group = square(10.0);
        let short = &group[..3];
        assert!(matches!(
            spatial_similarity(&group, short),
            Err(Error::LengthMismatch { left: 4, right: 3 })
        ));
        assert!(matches!(
            matched_group_similarity(short, &group),
            Err(Error::LengthMismatch { left: 3, right: 4 })
        ));
    }

    #[test]
    fn empty_and_degenerate_groups_are_rejected() {
        assert!(matches!(
            spatial_similarity(&[], &[]),
            Err(Error::EmptyInput)
        ));

        let single = [Point::new(1.0, 1.0)];
        assert!(matches!(
            matched_group_similarity(&single, &single),
            Err(Error::DegenerateInput { got: 1 })
        ));
    }

    #[test]
    fn single_pair_offset_still_scores() {
        let a = [Point::new(0.0, 0.0)];
        let b = [Point::new(1.0, 0.0)];
        assert_relative_eq!(spatial_similarity(&a, &b).unwrap(), 0.5, epsilon = 1e-6);
    }
}
