//! Euclidean nearest-neighbor search over the training index.
use crate::classifier::TrainingIndex;

/// Result of a nearest-neighbor lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Match {
    /// Position of the winning descriptor in the training index.
    pub index: usize,
    /// Euclidean distance between query and winner.
    pub distance: f64,
}

/// Euclidean distance between two descriptors of equal length.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "descriptor length mismatch: {} vs {}",
        a.len(),
        b.len()
    );
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Finds the training descriptor closest to `query`.
///
/// Candidates are visited in index order with a strictly-less comparison, so
/// when several candidates share the minimum distance the lowest index wins.
/// The index must be non-empty and its descriptors must match the query
/// length.
pub fn nearest_neighbor(query: &[f64], index: &TrainingIndex) -> Match {
    assert!(
        !index.is_empty(),
        "nearest-neighbor lookup requires a non-empty training index"
    );
    let mut best = Match {
        index: 0,
        distance: f64::MAX,
    };
    for (i, candidate) in index.descriptors().iter().enumerate() {
        let distance = euclidean_distance(query, candidate);
        if distance < best.distance {
            best = Match { index: i, distance };
        }
    }
    best
}
