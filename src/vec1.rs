//! A non-empty [`Vec`][`vec`].
//!
//! [`Vec1`] is the list flavor of non-empty sequence. See also [`Chain1`].
//!
//! [`Chain1`]: crate::chain1::Chain1
//! [`vec`]: alloc::vec

#![cfg(feature = "alloc")]
#![cfg_attr(docsrs, doc(cfg(feature = "alloc")))]

use alloc::borrow::Borrow;
use alloc::vec::{self, Vec};
#[cfg(feature = "arbitrary")]
use arbitrary::{Arbitrary, Unstructured};
use core::fmt::{self, Debug, Formatter};
use core::iter::Peekable;
use core::num::NonZeroUsize;
use core::ops::{Deref, Index};
use core::slice;

use crate::iter1::{FromIterator1, IntoIterator1, Iterator1};
use crate::safety::{NonZeroExt as _, OptionExt as _};
#[cfg(feature = "serde")]
use crate::{serde::Serde, EmptyError};
use crate::NonEmpty;

/// A [`Vec`] that contains at least one item.
///
/// `Vec1` can only be constructed from a head item (and optionally a tail) or through a fallible
/// conversion from a possibly empty collection, so there is no way to observe an empty `Vec1`.
///
/// # Examples
///
/// ```rust
/// use seq1::vec1::Vec1;
///
/// let xs = Vec1::from_head_and_tail(0, [1, 2]);
/// assert_eq!(*xs.head(), 0);
/// assert_eq!(xs.tail(), &[1, 2]);
///
/// assert!(Vec1::<u8>::try_from(Vec::new()).is_err());
/// ```
pub type Vec1<T> = NonEmpty<Vec<T>>;

impl<T> Vec1<T> {
    pub fn from_one(item: T) -> Self {
        Vec1 {
            items: alloc::vec![item],
        }
    }

    pub fn from_head_and_tail<I>(head: T, tail: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let tail = tail.into_iter();
        let mut items = Vec::with_capacity(tail.size_hint().0.saturating_add(1));
        items.push(head);
        items.extend(tail);
        Vec1 { items }
    }

    pub fn try_from_iter<I>(items: I) -> Result<Self, Peekable<I::IntoIter>>
    where
        I: IntoIterator<Item = T>,
    {
        Iterator1::try_from_iter(items).map(Vec1::from_iter1)
    }

    pub fn into_head_and_tail(mut self) -> (T, Vec<T>) {
        let head = self.items.remove(0);
        (head, self.items)
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item)
    }

    pub fn append(&mut self, mut items: Self) {
        self.items.append(&mut items.items)
    }

    pub fn len(&self) -> NonZeroUsize {
        // SAFETY: `self` must be non-empty.
        unsafe { NonZeroUsize::new_maybe_unchecked(self.items.len()) }
    }

    pub fn head(&self) -> &T {
        self.first()
    }

    pub fn tail(&self) -> &[T] {
        &self.items[1..]
    }

    pub fn first(&self) -> &T {
        // SAFETY: `self` must be non-empty.
        unsafe { self.items.first().unwrap_maybe_unchecked() }
    }

    pub fn last(&self) -> &T {
        // SAFETY: `self` must be non-empty.
        unsafe { self.items.last().unwrap_maybe_unchecked() }
    }

    pub fn iter1(&self) -> Iterator1<slice::Iter<'_, T>> {
        Iterator1::from_iter_unchecked(self.items.iter())
    }

    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    pub fn as_vec(&self) -> &Vec<T> {
        &self.items
    }
}

#[cfg(feature = "arbitrary")]
#[cfg_attr(docsrs, doc(cfg(feature = "arbitrary")))]
impl<'a, T> Arbitrary<'a> for Vec1<T>
where
    T: Arbitrary<'a>,
{
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let head = T::arbitrary(unstructured)?;
        let tail = unstructured
            .arbitrary_iter()?
            .collect::<arbitrary::Result<Vec<T>>>()?;
        Ok(Vec1::from_head_and_tail(head, tail))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        (T::size_hint(depth).0, None)
    }
}

impl<T> AsRef<[T]> for Vec1<T> {
    fn as_ref(&self) -> &[T] {
        self.items.as_ref()
    }
}

impl<T> Borrow<[T]> for Vec1<T> {
    fn borrow(&self) -> &[T] {
        self.items.borrow()
    }
}

impl<T> Debug for Vec1<T>
where
    T: Debug,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> Deref for Vec1<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> Extend<T> for Vec1<T> {
    fn extend<I>(&mut self, extension: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(extension)
    }
}

impl<T> From<Vec1<T>> for Vec<T> {
    fn from(items: Vec1<T>) -> Self {
        items.items
    }
}

impl<T> FromIterator1<T> for Vec1<T> {
    fn from_iter1<I>(items: I) -> Self
    where
        I: IntoIterator1<Item = T>,
    {
        Vec1 {
            items: items.into_iter1().into_iter().collect(),
        }
    }
}

impl<T> Index<usize> for Vec1<T> {
    type Output = T;

    fn index(&self, at: usize) -> &Self::Output {
        self.items.index(at)
    }
}

impl<T> IntoIterator for Vec1<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vec1<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator1 for Vec1<T> {
    fn into_iter1(self) -> Iterator1<Self::IntoIter> {
        Iterator1::from_iter_unchecked(self.items)
    }
}

impl<'a, T> TryFrom<&'a [T]> for Vec1<T>
where
    T: Clone,
{
    type Error = &'a [T];

    fn try_from(items: &'a [T]) -> Result<Self, Self::Error> {
        match items.len() {
            0 => Err(items),
            _ => Ok(Vec1 {
                items: Vec::from(items),
            }),
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
impl<T> TryFrom<Serde<Vec<T>>> for Vec1<T> {
    type Error = EmptyError;

    fn try_from(serde: Serde<Vec<T>>) -> Result<Self, Self::Error> {
        Vec1::try_from(serde.items).map_err(|_| EmptyError)
    }
}

impl<T> TryFrom<Vec<T>> for Vec1<T> {
    type Error = Vec<T>;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        match items.len() {
            0 => Err(items),
            _ => Ok(Vec1 { items }),
        }
    }
}

/// Constructs a [`Vec1`] from one or more items.
///
/// ```rust
/// use seq1::vec1;
///
/// let xs = vec1![0, 1, 2];
/// assert_eq!(xs.len().get(), 3);
/// ```
#[macro_export]
macro_rules! vec1 {
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::vec1::Vec1::from_head_and_tail($head, [$($tail,)*])
    };
}
pub use vec1;


#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use rstest::rstest;
    #[cfg(feature = "serde")]
    use serde_test::Token;

    use crate::vec1::harness::{self, xs1};
    use crate::vec1::Vec1;
    #[cfg(feature = "serde")]
    use crate::serde::{self, harness::sequence};

    #[rstest]
    #[case::empty(Vec::new(), None)]
    #[case::one(alloc::vec![0], Some(1))]
    #[case::many(alloc::vec![0, 1, 2], Some(3))]
    fn try_from_vec_then_len_eq(#[case] items: Vec<u8>, #[case] expected: Option<usize>) {
        assert_eq!(
            Vec1::try_from(items).ok().map(|xs1| xs1.len().get()),
            expected,
        );
    }

    #[rstest]
    fn try_from_empty_vec_then_err_is_input() {
        let items: Vec<u8> = Vec::with_capacity(8);
        let items = Vec1::try_from(items).unwrap_err();
        assert!(items.is_empty());
        assert!(items.capacity() >= 8);
    }

    #[rstest]
    #[case::one(harness::xs1(0), 0, &[])]
    #[case::many(harness::xs1(3), 0, &[1, 2, 3])]
    fn head_and_tail_of_vec1_then_eq(
        #[case] xs1: Vec1<u8>,
        #[case] head: u8,
        #[case] tail: &[u8],
    ) {
        assert_eq!(*xs1.head(), head);
        assert_eq!(xs1.tail(), tail);
        assert_eq!(xs1.into_head_and_tail(), (head, tail.to_vec()));
    }

    #[rstest]
    fn from_head_and_tail_then_vec1_eq_vec1_macro() {
        assert_eq!(Vec1::from_head_and_tail(0u8, [1, 2]), crate::vec1![0u8, 1, 2]);
    }

    #[rstest]
    fn push_and_append_into_vec1_then_last_eq(mut xs1: Vec1<u8>) {
        xs1.push(5);
        assert_eq!(*xs1.last(), 5);
        xs1.append(Vec1::from_one(6));
        assert_eq!(*xs1.last(), 6);
        assert_eq!(xs1.len().get(), 7);
    }

    #[rstest]
    fn as_vec_and_as_slice_of_vec1_then_eq(xs1: Vec1<u8>) {
        assert_eq!(xs1.as_vec().as_slice(), xs1.as_slice());
        assert_eq!(xs1.as_vec().len(), xs1.len().get());
    }

    #[rstest]
    fn debug_vec1_then_formatted_as_list() {
        assert_eq!(alloc::format!("{:?}", crate::vec1![1u8, 2]), "[1, 2]");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn de_serialize_vec1_into_and_from_tokens_eq(
        xs1: Vec1<u8>,
        sequence: impl Iterator<Item = Token>,
    ) {
        serde::harness::assert_into_and_from_tokens_eq::<_, Vec<_>>(xs1, sequence)
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialize_vec1_from_empty_tokens_then_empty_error(
        #[with(0)] sequence: impl Iterator<Item = Token>,
    ) {
        serde::harness::assert_deserialize_error_eq_empty_error::<Vec1<u8>, Vec<_>>(sequence)
    }
}
