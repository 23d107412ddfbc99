//! Left scans that collect into non-empty sequences.

#![cfg(feature = "alloc")]
#![cfg_attr(docsrs, doc(cfg(feature = "alloc")))]

use crate::iter1::IteratorExt as _;
use crate::vec1::Vec1;

/// Folds the items of a sequence from left to right and collects the seed followed by every
/// intermediate accumulation.
///
/// The output has exactly one more item than `items`: its head is `seed` and each item after the
/// head is `f` applied to the preceding output and the corresponding input. The output is
/// non-empty even if `items` is empty. A panic in `f` propagates to the caller.
///
/// # Examples
///
/// ```rust
/// use seq1::scan;
///
/// let sums = scan::scan_left1([1, 2, 3], 0, |sum, x| sum + x);
/// assert_eq!(sums.as_slice(), &[0, 1, 3, 6]);
///
/// let seed = scan::scan_left1(Vec::<u8>::new(), 0, |sum, x| sum + x);
/// assert_eq!(seed.as_slice(), &[0]);
/// ```
pub fn scan_left1<T, B, I, F>(items: I, seed: B, f: F) -> Vec1<B>
where
    B: Clone,
    I: IntoIterator<Item = T>,
    F: FnMut(B, T) -> B,
{
    items.into_iter().scan_left1(seed, f).collect1()
}

/// Folds the items of a sequence from left to right with a fallible function.
///
/// This function stops at the first error returned by `f` and returns that error. Otherwise, it
/// behaves like [`scan_left1`].
pub fn try_scan_left1<T, B, E, I, F>(items: I, seed: B, mut f: F) -> Result<Vec1<B>, E>
where
    B: Clone,
    I: IntoIterator<Item = T>,
    F: FnMut(B, T) -> Result<B, E>,
{
    let mut accumulations = Vec1::from_one(seed);
    for item in items {
        let accumulation = f(accumulations.last().clone(), item)?;
        accumulations.push(accumulation);
    }
    Ok(accumulations)
}
