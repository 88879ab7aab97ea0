//! # DR-03 Int Sequence
//!
//! Counters that hand out consecutive integers, one per call.
//!
//! - [`int_seq`]: a closure capturing its own counter
//! - [`IntSeq`]: the same counter as an `Iterator`
//!
//! Every generator owns its state; two generators never share a count.
//!
//! ```
//! use dr_03_int_sequence::int_seq;
//!
//! let mut next = int_seq();
//! assert_eq!(next(), 1);
//! assert_eq!(next(), 2);
//!
//! let mut other = int_seq();
//! assert_eq!(other(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Return a closure yielding 1, 2, 3, ... on successive calls.
pub fn int_seq() -> impl FnMut() -> i64 {
    let mut i = 0;
    move || {
        i += 1;
        i
    }
}

/// Iterator yielding consecutive integers.
///
/// Stops instead of wrapping once `i64::MAX` has been yielded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntSeq {
    next: Option<i64>,
}

impl IntSeq {
    /// Sequence starting at 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Sequence starting at `start`
    pub fn starting_at(start: i64) -> Self {
        Self { next: Some(start) }
    }

    /// Value the next call to `next()` will yield, if any
    pub fn peek(&self) -> Option<i64> {
        self.next
    }
}

impl Default for IntSeq {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for IntSeq {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(n) => {
                let remaining = (i64::MAX as i128 - n as i128 + 1) as u128;
                match usize::try_from(remaining) {
                    Ok(len) => (len, Some(len)),
                    Err(_) => (usize::MAX, None),
                }
            }
        }
    }
}

impl std::iter::FusedIterator for IntSeq {}
