//! Stable grouping of sequences into key-ordered, non-empty buckets.
//!
//! [`group_by_ordered_key`] partitions the items of a sequence by a key projection. The output is
//! an [`OrderedMap`] iterated in ascending key order under an explicit comparator, and each value
//! is a non-empty bucket holding the items with that key in the order that they were encountered.
//! A bucket exists only because some item produced its key, so no bucket is ever empty.
//!
//! The bucket type is any [`Bucket1`]. [`Vec1`] (list) and [`Chain1`] (chain) buckets are
//! provided, along with [`group_by_ordered_key_vec1`] and [`group_by_ordered_key_chain1`], which
//! fix the bucket type. Every bucket type groups identically.

#![cfg(feature = "alloc")]
#![cfg_attr(docsrs, doc(cfg(feature = "alloc")))]

use alloc::vec::Vec;
use core::convert::Infallible;

use crate::chain1::Chain1;
use crate::cmp::Compare;
use crate::iter1::Iterator1;
use crate::ordered_map::OrderedMap;
use crate::vec1::Vec1;

/// A non-empty collection that can be started from one item and grown by pushing more.
pub trait Bucket1<T> {
    fn from_one(item: T) -> Self;

    fn push(&mut self, item: T);
}

impl<T> Bucket1<T> for Vec1<T> {
    fn from_one(item: T) -> Self {
        Vec1::from_one(item)
    }

    fn push(&mut self, item: T) {
        Vec1::push(self, item)
    }
}

impl<T> Bucket1<T> for Chain1<T> {
    fn from_one(item: T) -> Self {
        Chain1::from_one(item)
    }

    fn push(&mut self, item: T) {
        Chain1::push(self, item)
    }
}

/// Groups the items of a sequence into non-empty buckets keyed by `f` and ordered by `compare`.
///
/// Keys are equal when `compare` orders them as equal. Each bucket keeps the first key that was
/// computed for it, and its items are in input order. If `items` is empty, then the output is
/// empty and neither `f` nor `compare` is called.
///
/// `f` is called exactly once per item, in input order. The keyed items are then stably sorted
/// with `compare` and adjacent runs of equal keys are merged into buckets, so grouping is
/// `O(n log n)` in the number of items. A panic in `f` or `compare` propagates to the caller. See
/// [`try_group_by_ordered_key`] for fallible projections.
///
/// # Examples
///
/// ```rust
/// use seq1::cmp::Natural;
/// use seq1::group;
/// use seq1::prelude::*;
///
/// let groups: OrderedMap<_, Chain1<_>, _> =
///     group::group_by_ordered_key([12, -2, 3, -5], |x| *x >= 0, Natural);
/// assert!(groups.keys().copied().eq([false, true]));
/// assert!(groups.get(&false).unwrap().iter().copied().eq([-2, -5]));
/// ```
pub fn group_by_ordered_key<T, K, C, G, I, F>(items: I, mut f: F, compare: C) -> OrderedMap<K, G, C>
where
    C: Compare<K>,
    G: Bucket1<T>,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    match try_group_by_ordered_key(items, move |item| Ok::<_, Infallible>(f(item)), compare) {
        Ok(groups) => groups,
        Err(never) => match never {},
    }
}

/// Groups the items of a sequence by a fallible key projection.
///
/// This function stops at the first error returned by `f` and returns that error. Otherwise, it
/// behaves like [`group_by_ordered_key`].
pub fn try_group_by_ordered_key<T, K, C, G, E, I, F>(
    items: I,
    mut f: F,
    compare: C,
) -> Result<OrderedMap<K, G, C>, E>
where
    C: Compare<K>,
    G: Bucket1<T>,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Result<K, E>,
{
    let items = match Iterator1::try_from_iter(items) {
        Ok(items) => items,
        _ => return Ok(OrderedMap::new(compare)),
    };
    let mut entries = Vec::with_capacity(items.size_hint().0.get());
    for item in items {
        let key = f(&item)?;
        entries.push((key, item));
    }
    Ok(OrderedMap::from_unsorted_entries_with(
        entries,
        compare,
        G::from_one,
        |bucket: &mut G, item| bucket.push(item),
    ))
}

/// Groups the items of a sequence into [`Vec1`] buckets.
///
/// See [`group_by_ordered_key`].
pub fn group_by_ordered_key_vec1<T, K, C, I, F>(
    items: I,
    f: F,
    compare: C,
) -> OrderedMap<K, Vec1<T>, C>
where
    C: Compare<K>,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    group_by_ordered_key(items, f, compare)
}

/// Groups the items of a sequence into [`Chain1`] buckets.
///
/// See [`group_by_ordered_key`].
pub fn group_by_ordered_key_chain1<T, K, C, I, F>(
    items: I,
    f: F,
    compare: C,
) -> OrderedMap<K, Chain1<T>, C>
where
    C: Compare<K>,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> K,
{
    group_by_ordered_key(items, f, compare)
}
