//! Single-pass pair-sum search
//!
//! Scans the sequence once, left to right, keeping a map from each value seen
//! so far to the first position it appeared at. For each element the
//! complement `target - value` is looked up before the element is recorded, so
//! an element never pairs with itself.
//!
//! Time: O(n). Space: O(n) for the seen-map.

use std::collections::HashMap;

use super::pair::PairIndices;

/// Find two distinct positions whose values sum to `target`.
///
/// Returns the first match discovered by the forward scan, or `None` if no
/// such pair exists. When a value repeats, the earliest occurrence is kept as
/// the complement source.
///
/// # Example
///
/// ```
/// use dr_01_two_sum::{find_pair_indices, PairIndices};
///
/// assert_eq!(find_pair_indices(&[2, 7, 11, 15], 9), Some(PairIndices::new(0, 1)));
/// assert_eq!(find_pair_indices(&[1, 2, 3], 100), None);
/// ```
pub fn find_pair_indices(sequence: &[i64], target: i64) -> Option<PairIndices> {
    let mut seen = HashMap::with_capacity(sequence.len());
    scan(sequence, target, &mut seen)
}

/// Same search, but the seen-map grows on demand instead of being sized to the
/// input up front.
pub fn find_pair_indices_lazy(sequence: &[i64], target: i64) -> Option<PairIndices> {
    let mut seen = HashMap::new();
    scan(sequence, target, &mut seen)
}

fn scan(sequence: &[i64], target: i64, seen: &mut HashMap<i64, usize>) -> Option<PairIndices> {
    for (position, &value) in sequence.iter().enumerate() {
        // Overflow means the complement lies outside i64, so nothing can match.
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&first) = seen.get(&complement) {
                return Some(PairIndices::new(first, position));
            }
        }
        seen.entry(value).or_insert(position);
    }
    None
}

/// Reference O(n^2) search with the same tie-breaking as [`find_pair_indices`].
///
/// Minimises the second position first, then the first position, which is
/// exactly the pair the single-pass scan reports.
pub fn find_pair_indices_brute_force(sequence: &[i64], target: i64) -> Option<PairIndices> {
    for second in 1..sequence.len() {
        for first in 0..second {
            if sequence[first].checked_add(sequence[second]) == Some(target) {
                return Some(PairIndices::new(first, second));
            }
        }
    }
    None
}
