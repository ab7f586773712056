//! Sort-and-sweep broadphase
//!
//! Narrows the all-pairs collision check to a small candidate set: bodies
//! are kept sorted by the left edge of their bounding box and a forward
//! sweep emits pairs whose margin-expanded bounding circles may overlap.
//! Candidates over-report by construction; exact contact is the
//! narrowphase's job.

use std::cmp::Ordering;

use crate::simulation::states::Body;

/// Unordered candidate pair, as indices into the sorted collection.
/// Carries no state; consumed by the narrowphase and discarded.
pub type CandidatePair = (usize, usize);

// Left-edge comparator. total_cmp so equal keys compare equal and the sort
// never sees an incomparable pair.
fn compare_left_edges(a: &Body, b: &Body) -> Ordering {
    a.left_edge().total_cmp(&b.left_edge())
}

/// Stable full sort by the left edge of each body's bounding box.
pub fn sort_bodies(bodies: &mut [Body]) {
    bodies.sort_by(compare_left_edges);
}

/// Conservative overlap test between two bounding circles: the surface
/// separation must not exceed the sum of the doubled-radius margins.
pub fn bounding_overlap(a: &Body, b: &Body) -> bool {
    a.distance_from(b) <= a.bounding_radius() + b.bounding_radius()
}

/// Sweep a sorted collection and collect candidate pairs.
///
/// For each body the forward scan stops as soon as the x-axis gap to the
/// next body exceeds the combined bounding margin: the axis is sorted, so
/// no body further right can still be in contact.
pub fn sweep(bodies: &[Body]) -> Vec<CandidatePair> {
    let mut pairs = Vec::new();

    for (i, bi) in bodies.iter().enumerate() {
        for (j, bj) in bodies.iter().enumerate().skip(i + 1) {
            let x_gap = (bj.x.x - bi.x.x) - bi.radius - bj.radius;
            if x_gap > bi.bounding_radius() + bj.bounding_radius() {
                break;
            }
            if bounding_overlap(bi, bj) {
                pairs.push((i, j));
            }
        }
    }

    pairs
}

/// Insert one body at its sorted position via binary search on the left-edge
/// comparator, returning the insertion index. Landing on an equal key
/// inserts adjacent to it.
pub fn insert_sorted(bodies: &mut Vec<Body>, body: Body) -> usize {
    let index = match bodies.binary_search_by(|probe| compare_left_edges(probe, &body)) {
        Ok(found) => found,
        Err(insertion) => insertion,
    };
    bodies.insert(index, body);
    index
}

/// Full resort followed by a sweep. This is the per-frame entry point: the
/// caller re-sorts after integration moves bodies, then hands the candidate
/// pairs to the narrowphase.
pub fn find_candidate_pairs(bodies: &mut [Body]) -> Vec<CandidatePair> {
    sort_bodies(bodies);
    sweep(bodies)
}

/// Insert each new body at its sorted position, then sweep the combined
/// collection.
pub fn add_and_sweep(bodies: &mut Vec<Body>, new_bodies: Vec<Body>) -> Vec<CandidatePair> {
    for body in new_bodies {
        insert_sorted(bodies, body);
    }
    sweep(bodies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::params::Parameters;
    use crate::simulation::states::NVec2;

    fn body_at(x: f64, y: f64, radius: f64) -> Body {
        Body::new(NVec2::new(x, y), radius, true, &Parameters::default()).unwrap()
    }

    #[test]
    fn empty_and_single_yield_no_pairs() {
        assert!(sweep(&[]).is_empty());
        assert!(sweep(&[body_at(0.0, 0.0, 1.0)]).is_empty());
    }

    #[test]
    fn sweep_separated_bodies_no_pairs() {
        let mut bodies = vec![body_at(0.0, 0.0, 1.0), body_at(50.0, 0.0, 1.0)];
        assert!(find_candidate_pairs(&mut bodies).is_empty());
    }

    #[test]
    fn sweep_touching_bodies_one_pair() {
        let mut bodies = vec![body_at(3.0, 0.0, 1.0), body_at(0.0, 0.0, 1.0)];
        assert_eq!(find_candidate_pairs(&mut bodies), vec![(0, 1)]);
    }

    #[test]
    fn vertical_neighbours_are_candidates() {
        // Same x: the sweep axis cannot separate them
        let mut bodies = vec![body_at(0.0, 0.0, 1.0), body_at(0.0, 4.0, 1.0)];
        assert_eq!(find_candidate_pairs(&mut bodies), vec![(0, 1)]);
    }

    #[test]
    fn insert_sorted_keeps_left_edge_order() {
        let mut bodies = Vec::new();
        for x in [7.0, -2.0, 31.0, 0.5, -2.0] {
            insert_sorted(&mut bodies, body_at(x, 0.0, 1.0));
        }
        for pair in bodies.windows(2) {
            assert!(pair[0].left_edge() <= pair[1].left_edge());
        }
    }

    #[test]
    fn remove_then_sweep_is_consistent() {
        let mut bodies = vec![
            body_at(0.0, 0.0, 1.0),
            body_at(3.0, 0.0, 1.0),
            body_at(10.0, 0.0, 1.0),
        ];
        sort_bodies(&mut bodies);
        assert_eq!(sweep(&bodies), vec![(0, 1)]);
        bodies.remove(1);
        // Remaining separation is beyond the combined margin
        assert!(sweep(&bodies).is_empty());
    }
}
