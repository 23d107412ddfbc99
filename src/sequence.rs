//! Conversions and derived operations over ordinary sequences.
//!
//! The functions in this module and the [`SequenceExt`] extension trait accept any
//! [`IntoIterator`], such as `Vec`s, arrays, slices (by reference) and iterators.

#![cfg(feature = "alloc")]
#![cfg_attr(docsrs, doc(cfg(feature = "alloc")))]

use crate::chain1::Chain1;
use crate::cmp::Compare;
use crate::group;
use crate::ordered_map::OrderedMap;
use crate::scan;
use crate::vec1::Vec1;

/// Converts a sequence into a [`Vec1`] if it has at least one item.
///
/// Returns `None` if and only if `items` is empty. Item order is preserved.
///
/// # Examples
///
/// ```rust
/// use seq1::sequence;
///
/// assert_eq!(sequence::to_non_empty(Vec::<u8>::new()), None);
/// assert_eq!(
///     sequence::to_non_empty([1, 2]).map(|xs| xs.into_vec()),
///     Some(vec![1, 2]),
/// );
/// ```
pub fn to_non_empty<I>(items: I) -> Option<Vec1<I::Item>>
where
    I: IntoIterator,
{
    Vec1::try_from_iter(items).ok()
}

/// Converts a sequence into a [`Chain1`] if it has at least one item.
pub fn to_non_empty_chain<I>(items: I) -> Option<Chain1<I::Item>>
where
    I: IntoIterator,
{
    Chain1::try_from_iter(items).ok()
}

/// Derived operations on any sequence.
///
/// These methods are implemented for all [`IntoIterator`] types and delegate to the functions in
/// [`sequence`][`crate::sequence`], [`group`] and [`scan`].
pub trait SequenceExt: IntoIterator + Sized {
    /// See [`to_non_empty`].
    fn to_non_empty(self) -> Option<Vec1<Self::Item>> {
        to_non_empty(self)
    }

    /// See [`to_non_empty_chain`].
    fn to_non_empty_chain(self) -> Option<Chain1<Self::Item>> {
        to_non_empty_chain(self)
    }

    /// Groups items into [`Vec1`] buckets.
    ///
    /// See [`group::group_by_ordered_key`].
    fn group_by_ordered_key<K, C, F>(self, f: F, compare: C) -> OrderedMap<K, Vec1<Self::Item>, C>
    where
        C: Compare<K>,
        F: FnMut(&Self::Item) -> K,
    {
        group::group_by_ordered_key_vec1(self, f, compare)
    }

    /// Groups items into [`Chain1`] buckets.
    ///
    /// See [`group::group_by_ordered_key`].
    fn group_by_ordered_key_chain1<K, C, F>(
        self,
        f: F,
        compare: C,
    ) -> OrderedMap<K, Chain1<Self::Item>, C>
    where
        C: Compare<K>,
        F: FnMut(&Self::Item) -> K,
    {
        group::group_by_ordered_key_chain1(self, f, compare)
    }

    /// See [`scan::scan_left1`].
    ///
    /// For a lazy scan over an iterator, see
    /// [`IteratorExt::scan_left1`][`crate::iter1::IteratorExt::scan_left1`].
    fn scan_left_vec1<B, F>(self, seed: B, f: F) -> Vec1<B>
    where
        B: Clone,
        F: FnMut(B, Self::Item) -> B,
    {
        scan::scan_left1(self, seed, f)
    }
}

impl<I> SequenceExt for I where I: IntoIterator {}
