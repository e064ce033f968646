// Copyright 2026 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional partitioning, scoring, and candidate selection.

use kurbo::{Point, Size};

use crate::types::{Direction, FocusEntry};

/// Centers closer than this along the relevant axis never qualify as
/// directional candidates. Keeps elements at (near-)identical coordinates
/// from qualifying through float rounding. The boundary is exclusive.
pub(crate) const DEAD_ZONE: f64 = 2.0;

/// Multiplier applied to cross-axis alignment: vertical moves weight
/// horizontal proximity five times vertical proximity, and symmetrically
/// for horizontal moves.
pub(crate) const DOMINANCE_WEIGHT: f64 = 5.0;

/// Whether `other` lies strictly on the `direction` side of `from`,
/// beyond the dead zone.
pub(crate) fn qualifies(direction: Direction, from: Point, other: Point) -> bool {
    match direction {
        Direction::Up => other.y - from.y < -DEAD_ZONE,
        Direction::Down => other.y - from.y > DEAD_ZONE,
        Direction::Left => other.x - from.x < -DEAD_ZONE,
        Direction::Right => other.x - from.x > DEAD_ZONE,
    }
}

/// Combined proximity score of `other` as a `direction` candidate of `from`.
///
/// Each axis contributes `1 - |delta| / extent`, so candidates beyond the
/// extent score negative on that axis. Higher is better.
pub(crate) fn score(direction: Direction, from: Point, other: Point, extent: Size) -> f64 {
    let horiz = 1.0 - (from.x - other.x).abs() / extent.width;
    let vert = 1.0 - (from.y - other.y).abs() / extent.height;
    match direction {
        Direction::Up | Direction::Down => horiz * DOMINANCE_WEIGHT + vert,
        Direction::Left | Direction::Right => horiz + vert * DOMINANCE_WEIGHT,
    }
}

/// Best-scoring qualifying candidate for `direction` from the entry at
/// `origin`, or `None` when every candidate fails the partition or scores
/// at or below zero.
///
/// Exactly equal scores prefer the candidate whose center is nearest to the
/// origin's (squared distance); remaining ties keep the earliest entry in
/// map order.
pub(crate) fn best_link<K: Copy>(
    origin: usize,
    direction: Direction,
    entries: &[FocusEntry<K>],
    extent: Size,
) -> Option<K> {
    let from = entries[origin].center;
    let mut best: Option<K> = None;
    let mut best_score = 0.0;
    let mut best_dist2 = f64::INFINITY;

    for (i, other) in entries.iter().enumerate() {
        if i == origin || !qualifies(direction, from, other.center) {
            continue;
        }
        let s = score(direction, from, other.center, extent);
        let d2 = from.distance_squared(other.center);
        // The zero baseline means a candidate scoring <= 0 never wins,
        // even when it is the only one on the correct side.
        let wins = s > best_score || (best.is_some() && s == best_score && d2 < best_dist2);
        if wins {
            best = Some(other.key);
            best_score = s;
            best_dist2 = d2;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Rect;

    use super::*;

    const EXTENT: Size = Size::new(100.0, 100.0);

    fn entries(centers: &[(f64, f64)]) -> Vec<FocusEntry<usize>> {
        centers
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| {
                FocusEntry::new(i, Rect::new(x - 1.0, y - 1.0, x + 1.0, y + 1.0))
            })
            .collect()
    }

    #[test]
    fn dead_zone_boundary_is_exclusive() {
        let from = Point::new(10.0, 10.0);
        // Exactly 2 units away fails in every direction.
        assert!(!qualifies(Direction::Right, from, Point::new(12.0, 10.0)));
        assert!(!qualifies(Direction::Left, from, Point::new(8.0, 10.0)));
        assert!(!qualifies(Direction::Down, from, Point::new(10.0, 12.0)));
        assert!(!qualifies(Direction::Up, from, Point::new(10.0, 8.0)));
        // Just past the dead zone qualifies.
        assert!(qualifies(Direction::Right, from, Point::new(12.5, 10.0)));
        // The wrong side never qualifies, regardless of distance.
        assert!(!qualifies(Direction::Right, from, Point::new(-50.0, 10.0)));
    }

    #[test]
    fn score_weights_cross_axis_alignment() {
        let from = Point::new(0.0, 0.0);
        // 20 units right, perfectly row-aligned.
        let aligned = Point::new(20.0, 0.0);
        // 20 units right, 10 units off-row.
        let askew = Point::new(20.0, 10.0);
        const EPSILON: f64 = 1e-12;
        let s_aligned = score(Direction::Right, from, aligned, EXTENT);
        let s_askew = score(Direction::Right, from, askew, EXTENT);
        assert!((s_aligned - 5.8).abs() < EPSILON);
        assert!(s_aligned > s_askew);
        // The same 10-unit misalignment costs five times the normalized
        // proximity it would cost on the travel axis.
        assert!((s_aligned - s_askew - 0.5).abs() < EPSILON);
    }

    #[test]
    fn score_can_go_negative() {
        let from = Point::new(0.0, 0.0);
        let far = Point::new(150.0, 150.0);
        assert!(score(Direction::Right, from, far, EXTENT) < 0.0);
    }

    #[test]
    fn best_link_rejects_nonpositive_scores() {
        // The only rightward candidate sits exactly one extent away on both
        // axes: horiz and vert proximity are both 0, so the score is 0 and
        // must not be selected.
        let list = entries(&[(0.0, 0.0), (100.0, 100.0)]);
        assert_eq!(best_link(0, Direction::Right, &list, EXTENT), None);

        // Far off-screen candidates score negative and are also rejected.
        let list = entries(&[(0.0, 0.0), (150.0, 150.0)]);
        assert_eq!(best_link(0, Direction::Right, &list, EXTENT), None);
    }

    #[test]
    fn best_link_prefers_highest_score() {
        // Both candidates are below; the column-aligned one wins.
        let list = entries(&[(50.0, 0.0), (50.0, 40.0), (80.0, 20.0)]);
        assert_eq!(best_link(0, Direction::Down, &list, EXTENT), Some(1));
    }

    #[test]
    fn equal_scores_prefer_nearer_candidate() {
        // With a 128x128 extent, (dx, dy) pairs (32, 16) and (72, 8) produce
        // exactly equal rightward scores (all deltas are exact in binary):
        //   1 - 32/128 + 5 * (1 - 16/128) = 5.125
        //   1 - 72/128 + 5 * (1 -  8/128) = 5.125
        // The first is nearer, so it wins from either input position.
        let extent = Size::new(128.0, 128.0);
        let near = (42.0, 26.0);
        let far = (82.0, 18.0);

        let list = entries(&[(10.0, 10.0), near, far]);
        assert_eq!(best_link(0, Direction::Right, &list, extent), Some(1));

        let list = entries(&[(10.0, 10.0), far, near]);
        assert_eq!(best_link(0, Direction::Right, &list, extent), Some(2));
    }

    #[test]
    fn full_ties_keep_input_order() {
        // Mirrored candidates: equal score and equal distance. The earlier
        // entry wins, deterministically for a fixed input order.
        let extent = Size::new(128.0, 128.0);
        let above = (42.0, -6.0);
        let below = (42.0, 26.0);

        let list = entries(&[(10.0, 10.0), below, above]);
        assert_eq!(best_link(0, Direction::Right, &list, extent), Some(1));

        let list = entries(&[(10.0, 10.0), above, below]);
        assert_eq!(best_link(0, Direction::Right, &list, extent), Some(1));
    }

    #[test]
    fn lone_entry_has_no_candidates() {
        let list = entries(&[(50.0, 50.0)]);
        for dir in Direction::ALL {
            assert_eq!(best_link(0, dir, &list, EXTENT), None);
        }
    }
}
