//! A segmented sequence with cheap concatenation and its non-empty counterpart.
//!
//! [`Chain`] stores its items in a list of segments, so pushing an item is amortized constant
//! time and appending another chain moves segments rather than items. This makes it a good
//! accumulator when many large sequences are concatenated. [`Chain1`] is the chain flavor of
//! non-empty sequence. See also [`Vec1`].
//!
//! Equality, ordering and hashing of chains are defined over their items in order and do not
//! depend on how those items are segmented.
//!
//! [`Vec1`]: crate::vec1::Vec1

#![cfg(feature = "alloc")]
#![cfg_attr(docsrs, doc(cfg(feature = "alloc")))]

use alloc::vec::{self, Vec};
#[cfg(feature = "arbitrary")]
use arbitrary::{Arbitrary, Unstructured};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::{Flatten, Peekable, Skip};
use core::num::NonZeroUsize;
use core::slice;
#[cfg(feature = "serde")]
use ::serde::{ser::SerializeSeq as _, Deserialize, Deserializer, Serialize, Serializer};

use crate::iter1::{FromIterator1, IntoIterator1, Iterator1};
use crate::safety::{NonZeroExt as _, OptionExt as _};
use crate::vec1::Vec1;
#[cfg(feature = "serde")]
use crate::{serde::Serde, EmptyError};
use crate::NonEmpty;

pub type Iter<'a, T> = Flatten<slice::Iter<'a, Vec<T>>>;

pub type IntoIter<T> = Flatten<vec::IntoIter<Vec<T>>>;

/// A possibly empty sequence of segments.
///
/// No segment of a `Chain` is ever empty.
#[derive(Clone)]
pub struct Chain<T> {
    segments: Vec<Vec<T>>,
    len: usize,
}

impl<T> Chain<T> {
    pub const fn new() -> Self {
        Chain {
            segments: Vec::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn push(&mut self, item: T) {
        match self.segments.last_mut() {
            Some(segment) => segment.push(item),
            _ => self.segments.push(alloc::vec![item]),
        }
        self.len += 1;
    }

    /// Moves the segments of `other` onto the end of the chain.
    ///
    /// This does not move or copy any items.
    pub fn append(&mut self, mut other: Self) {
        self.len += other.len;
        self.segments.append(&mut other.segments);
    }

    pub fn first(&self) -> Option<&T> {
        self.segments.first().and_then(|segment| segment.first())
    }

    pub fn last(&self) -> Option<&T> {
        self.segments.last().and_then(|segment| segment.last())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.segments.iter().flatten()
    }

    pub fn into_vec(mut self) -> Vec<T> {
        if self.segments.len() == 1 {
            // SAFETY: `self` has exactly one segment.
            unsafe { self.segments.pop().unwrap_maybe_unchecked() }
        }
        else {
            let mut items = Vec::with_capacity(self.len);
            for mut segment in self.segments {
                items.append(&mut segment);
            }
            items
        }
    }
}

impl<T> Debug for Chain<T>
where
    T: Debug,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Chain::new()
    }
}

impl<T> Eq for Chain<T> where T: Eq {}

impl<T> Extend<T> for Chain<T> {
    fn extend<I>(&mut self, extension: I)
    where
        I: IntoIterator<Item = T>,
    {
        let segment: Vec<T> = extension.into_iter().collect();
        self.append(Chain::from(segment));
    }
}

impl<T> From<Vec<T>> for Chain<T> {
    fn from(items: Vec<T>) -> Self {
        let len = items.len();
        Chain {
            segments: if len == 0 {
                Vec::new()
            }
            else {
                alloc::vec![items]
            },
            len,
        }
    }
}

impl<T> FromIterator<T> for Chain<T> {
    fn from_iter<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Chain::from(items.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Hash for Chain<T>
where
    T: Hash,
{
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.len.hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T> IntoIterator for Chain<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter().flatten()
    }
}

impl<'a, T> IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Ord for Chain<T>
where
    T: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> PartialEq for Chain<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> PartialOrd for Chain<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<'de, T> Deserialize<'de> for Chain<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::deserialize(deserializer).map(Chain::from)
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<T> Serialize for Chain<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut sequence = serializer.serialize_seq(Some(self.len))?;
        for item in self.iter() {
            sequence.serialize_element(item)?;
        }
        sequence.end()
    }
}

/// A [`Chain`] that contains at least one item.
///
/// # Examples
///
/// ```rust
/// use seq1::chain1::Chain1;
///
/// let mut xs = Chain1::from_one(0);
/// xs.append(Chain1::from_head_and_tail(1, [2, 3]));
/// assert_eq!(*xs.last(), 3);
/// assert_eq!(xs.into_vec1().as_slice(), &[0, 1, 2, 3]);
/// ```
pub type Chain1<T> = NonEmpty<Chain<T>>;

impl<T> Chain1<T> {
    pub fn from_one(item: T) -> Self {
        Chain1 {
            items: Chain::from(alloc::vec![item]),
        }
    }

    pub fn from_head_and_tail<I>(head: T, tail: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Chain1::from(Vec1::from_head_and_tail(head, tail))
    }

    pub fn try_from_iter<I>(items: I) -> Result<Self, Peekable<I::IntoIter>>
    where
        I: IntoIterator<Item = T>,
    {
        Iterator1::try_from_iter(items).map(Chain1::from_iter1)
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item)
    }

    pub fn append(&mut self, other: Self) {
        self.items.append(other.items)
    }

    pub fn append_chain(&mut self, other: Chain<T>) {
        self.items.append(other)
    }

    pub fn len(&self) -> NonZeroUsize {
        // SAFETY: `self` must be non-empty.
        unsafe { NonZeroUsize::new_maybe_unchecked(self.items.len()) }
    }

    pub fn head(&self) -> &T {
        // SAFETY: `self` must be non-empty.
        unsafe { self.items.first().unwrap_maybe_unchecked() }
    }

    pub fn tail(&self) -> Skip<Iter<'_, T>> {
        self.items.iter().skip(1)
    }

    pub fn last(&self) -> &T {
        // SAFETY: `self` must be non-empty.
        unsafe { self.items.last().unwrap_maybe_unchecked() }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter1(&self) -> Iterator1<Iter<'_, T>> {
        Iterator1::from_iter_unchecked(self.items.iter())
    }

    pub fn into_chain(self) -> Chain<T> {
        self.items
    }

    pub fn into_vec1(self) -> Vec1<T> {
        NonEmpty {
            items: self.items.into_vec(),
        }
    }

    pub fn as_chain(&self) -> &Chain<T> {
        &self.items
    }
}

#[cfg(feature = "arbitrary")]
#[cfg_attr(docsrs, doc(cfg(feature = "arbitrary")))]
impl<'a, T> Arbitrary<'a> for Chain1<T>
where
    T: Arbitrary<'a>,
{
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        Vec1::arbitrary(unstructured).map(Chain1::from)
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        (T::size_hint(depth).0, None)
    }
}

impl<T> Debug for Chain1<T>
where
    T: Debug,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> Extend<T> for Chain1<T> {
    fn extend<I>(&mut self, extension: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(extension)
    }
}

impl<T> From<Chain1<T>> for Chain<T> {
    fn from(items: Chain1<T>) -> Self {
        items.items
    }
}

impl<T> From<Vec1<T>> for Chain1<T> {
    fn from(items: Vec1<T>) -> Self {
        Chain1 {
            items: Chain::from(items.into_vec()),
        }
    }
}

impl<T> FromIterator1<T> for Chain1<T> {
    fn from_iter1<I>(items: I) -> Self
    where
        I: IntoIterator1<Item = T>,
    {
        Chain1 {
            items: items.into_iter1().into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Chain1<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Chain1<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator1 for Chain1<T> {
    fn into_iter1(self) -> Iterator1<Self::IntoIter> {
        Iterator1::from_iter_unchecked(self.items)
    }
}

impl<T> TryFrom<Chain<T>> for Chain1<T> {
    type Error = Chain<T>;

    fn try_from(items: Chain<T>) -> Result<Self, Self::Error> {
        match items.len() {
            0 => Err(items),
            _ => Ok(Chain1 { items }),
        }
    }
}

impl<T> TryFrom<Vec<T>> for Chain1<T> {
    type Error = Vec<T>;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Vec1::try_from(items).map(Chain1::from)
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<T> TryFrom<Serde<Chain<T>>> for Chain1<T> {
    type Error = EmptyError;

    fn try_from(serde: Serde<Chain<T>>) -> Result<Self, Self::Error> {
        Chain1::try_from(serde.items).map_err(|_| EmptyError)
    }
}

#[cfg(test)]
pub mod harness {
    use rstest::fixture;

    use crate::chain1::{Chain, Chain1};
    use crate::iter1::{self, FromIterator1};

    #[fixture]
    pub fn xs1(#[default(4)] end: u8) -> Chain1<u8> {
        Chain1::from_iter1(iter1::harness::xs1(end))
    }

    /// A chain of `0..=end` with one segment per item.
    pub fn segmented(end: u8) -> Chain<u8> {
        let mut chain = Chain::new();
        for x in 0..=end {
            chain.append(Chain::from(alloc::vec![x]));
        }
        chain
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    #[cfg(feature = "std")]
    use core::hash::{BuildHasher, Hash, Hasher};
    use rstest::rstest;
    #[cfg(feature = "serde")]
    use serde_test::Token;
    #[cfg(feature = "std")]
    use std::collections::hash_map::RandomState;

    use crate::chain1::harness::{self, xs1};
    use crate::chain1::{Chain, Chain1};
    #[cfg(feature = "serde")]
    use crate::serde::{self, harness::sequence};
    use crate::vec1::Vec1;

    #[cfg(feature = "std")]
    fn hash_of<T>(state: &RandomState, item: &T) -> u64
    where
        T: Hash,
    {
        let mut hasher = state.build_hasher();
        item.hash(&mut hasher);
        hasher.finish()
    }

    #[rstest]
    fn push_into_empty_chain_then_one_segment() {
        let mut chain = Chain::new();
        chain.push(0u8);
        chain.push(1);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.segment_count(), 1);
        assert_eq!(chain.first(), Some(&0));
        assert_eq!(chain.last(), Some(&1));
    }

    #[rstest]
    fn append_chain_then_segments_are_moved() {
        let mut chain: Chain<u8> = (0..3).collect();
        chain.append((3..5).collect());
        chain.append(Chain::new());
        assert_eq!(chain.segment_count(), 2);
        assert_eq!(chain.len(), 5);
        assert_eq!(chain.into_vec(), (0..5).collect::<Vec<_>>());
    }

    #[cfg(feature = "std")]
    #[rstest]
    #[case::one(0)]
    #[case::many(4)]
    fn segmented_chain_then_eq_and_hash_eq_contiguous_chain(#[case] end: u8) {
        let segmented = harness::segmented(end);
        let contiguous: Chain<u8> = (0..=end).collect();
        let state = RandomState::new();
        assert_eq!(segmented, contiguous);
        assert_eq!(segmented.cmp(&contiguous), core::cmp::Ordering::Equal);
        assert_eq!(hash_of(&state, &segmented), hash_of(&state, &contiguous));
    }

    #[rstest]
    #[case::empty(Chain::new(), None)]
    #[case::one(harness::segmented(0), Some(1))]
    #[case::many(harness::segmented(3), Some(4))]
    fn try_from_chain_then_len_eq(#[case] chain: Chain<u8>, #[case] expected: Option<usize>) {
        assert_eq!(
            Chain1::try_from(chain).ok().map(|xs1| xs1.len().get()),
            expected,
        );
    }

    #[rstest]
    fn head_tail_and_last_of_chain1_then_eq(xs1: Chain1<u8>) {
        assert_eq!(*xs1.head(), 0);
        assert!(xs1.tail().copied().eq(1..=4));
        assert_eq!(*xs1.last(), 4);
    }

    #[rstest]
    fn append_chain1_then_into_vec1_eq(mut xs1: Chain1<u8>) {
        xs1.append(Chain1::from_head_and_tail(5, [6]));
        xs1.push(7);
        assert_eq!(xs1.into_vec1(), Vec1::try_from_iter(0..=7).unwrap());
    }

    #[rstest]
    fn append_chain_into_chain1_then_segments_are_moved(mut xs1: Chain1<u8>) {
        xs1.append_chain(harness::segmented(1));
        xs1.append_chain(Chain::new());
        assert_eq!(xs1.len().get(), 7);
        assert_eq!(xs1.as_chain().segment_count(), 3);
        assert!(xs1.iter().copied().eq((0..=4).chain(0..=1)));
    }

    #[rstest]
    fn debug_chain1_then_formatted_as_list() {
        let xs1 = Chain1::try_from(harness::segmented(2)).unwrap();
        assert_eq!(alloc::format!("{:?}", xs1), "[0, 1, 2]");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn de_serialize_chain1_into_and_from_tokens_eq(
        xs1: Chain1<u8>,
        sequence: impl Iterator<Item = Token>,
    ) {
        serde::harness::assert_into_and_from_tokens_eq::<_, Vec<_>>(xs1, sequence)
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialize_chain1_from_empty_tokens_then_empty_error(
        #[with(0)] sequence: impl Iterator<Item = Token>,
    ) {
        serde::harness::assert_deserialize_error_eq_empty_error::<Chain1<u8>, Vec<_>>(sequence)
    }
}
