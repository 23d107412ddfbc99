//! Non-empty [iterators][`Iterator`].

use core::cmp;
use core::iter::{Chain, FusedIterator, Peekable};
use core::num::NonZeroUsize;
use core::option;

use crate::safety::{NonZeroExt as _, OptionExt as _};

pub trait FromIterator1<T> {
    fn from_iter1<I>(items: I) -> Self
    where
        I: IntoIterator1<Item = T>;
}

pub trait IntoIterator1: IntoIterator {
    fn into_iter1(self) -> Iterator1<Self::IntoIter>;
}

impl<I> IntoIterator1 for Iterator1<I>
where
    I: Iterator,
{
    fn into_iter1(self) -> Iterator1<Self::IntoIter> {
        self
    }
}

pub trait IteratorExt: Iterator + Sized {
    fn try_into_iter1(self) -> Remainder<Self>;

    /// Folds the items of the iterator from left to right, yielding the seed followed by each
    /// intermediate accumulation.
    ///
    /// The output is non-empty even if `self` is empty, because `seed` is always the first item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seq1::prelude::*;
    ///
    /// let mut sums = [1, 2, 3].into_iter().scan_left1(0, |sum, x| sum + x).into_iter();
    /// assert_eq!(sums.next(), Some(0));
    /// assert_eq!(sums.last(), Some(6));
    /// ```
    fn scan_left1<B, F>(self, seed: B, f: F) -> Iterator1<ScanLeft<Self, B, F>>
    where
        B: Clone,
        F: FnMut(B, Self::Item) -> B;
}

impl<I> IteratorExt for I
where
    I: Iterator,
{
    fn try_into_iter1(self) -> Remainder<Self> {
        Iterator1::try_from_iter(self)
    }

    fn scan_left1<B, F>(self, seed: B, f: F) -> Iterator1<ScanLeft<Self, B, F>>
    where
        B: Clone,
        F: FnMut(B, Self::Item) -> B,
    {
        Iterator1::from_iter_unchecked(ScanLeft {
            items: self,
            accumulator: Some(seed),
            is_seeded: false,
            f,
        })
    }
}

pub type AtMostOne<T> = option::IntoIter<T>;

pub type HeadAndTail<T> =
    Iterator1<Chain<AtMostOne<<T as IntoIterator>::Item>, <T as IntoIterator>::IntoIter>>;

pub type Remainder<I> = Result<Iterator1<Peekable<I>>, Peekable<I>>;

/// An iterator that yields at least one item.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Iterator1<I> {
    items: I,
}

impl<I> Iterator1<I> {
    pub(crate) fn from_iter_unchecked<T>(items: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Iterator1 {
            items: items.into_iter(),
        }
    }
}

impl<I> Iterator1<I>
where
    I: Iterator,
{
    /// Returns a non-empty iterator over `items` if it yields at least one item.
    ///
    /// The first item is peeked, so on failure the returned iterator is observably identical to
    /// the input.
    pub fn try_from_iter<T>(items: T) -> Remainder<I>
    where
        T: IntoIterator<IntoIter = I>,
    {
        let mut items = items.into_iter().peekable();
        match items.peek() {
            Some(_) => Ok(Iterator1::from_iter_unchecked(items)),
            _ => Err(items),
        }
    }

    #[inline(always)]
    fn non_empty<J, F>(self, f: F) -> Iterator1<J>
    where
        J: Iterator,
        F: FnOnce(I) -> J,
    {
        Iterator1::from_iter_unchecked(f(self.items))
    }

    pub fn size_hint(&self) -> (NonZeroUsize, Option<NonZeroUsize>) {
        let (lower, upper) = self.items.size_hint();
        // SAFETY: `cmp::max` clamps the bounds to one or more.
        unsafe {
            (
                NonZeroUsize::new_maybe_unchecked(cmp::max(1, lower)),
                upper.map(|upper| NonZeroUsize::new_maybe_unchecked(cmp::max(1, upper))),
            )
        }
    }

    pub fn len(&self) -> NonZeroUsize
    where
        I: ExactSizeIterator,
    {
        // SAFETY: `cmp::max` clamps the length to one or more.
        unsafe { NonZeroUsize::new_maybe_unchecked(cmp::max(1, self.items.len())) }
    }

    pub fn count(self) -> NonZeroUsize {
        // SAFETY: `self` yields at least one item.
        unsafe { NonZeroUsize::new_maybe_unchecked(self.items.count()) }
    }

    pub fn first(mut self) -> I::Item {
        // SAFETY: `self` yields at least one item.
        unsafe { self.items.next().unwrap_maybe_unchecked() }
    }

    pub fn last(self) -> I::Item {
        // SAFETY: `self` yields at least one item.
        unsafe { self.items.last().unwrap_maybe_unchecked() }
    }

    pub fn chain<T>(self, chained: T) -> Iterator1<Chain<I, T::IntoIter>>
    where
        T: IntoIterator<Item = I::Item>,
    {
        self.non_empty(move |items| items.chain(chained))
    }

    pub fn collect1<T>(self) -> T
    where
        T: FromIterator1<I::Item>,
    {
        T::from_iter1(self)
    }
}

impl<I> Iterator1<Peekable<I>>
where
    I: Iterator,
{
    pub fn peek(&mut self) -> &I::Item {
        // SAFETY: `self` yields at least one item.
        unsafe { self.items.peek().unwrap_maybe_unchecked() }
    }
}

impl<I> IntoIterator for Iterator1<I>
where
    I: Iterator,
{
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> Self::IntoIter {
        self.items
    }
}

/// An iterator over the running accumulations of a left fold.
///
/// See [`IteratorExt::scan_left1`].
#[derive(Clone, Debug)]
pub struct ScanLeft<I, B, F> {
    items: I,
    accumulator: Option<B>,
    is_seeded: bool,
    f: F,
}

impl<I, B, F> Iterator for ScanLeft<I, B, F>
where
    I: Iterator,
    B: Clone,
    F: FnMut(B, I::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.is_seeded {
            self.is_seeded = true;
            return self.accumulator.clone();
        }
        let accumulator = self.accumulator.take()?;
        let item = self.items.next()?;
        let accumulator = (self.f)(accumulator, item);
        self.accumulator = Some(accumulator.clone());
        Some(accumulator)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.accumulator.is_none() {
            return (0, Some(0));
        }
        let seed = usize::from(!self.is_seeded);
        let (lower, upper) = self.items.size_hint();
        (
            lower.saturating_add(seed),
            upper.and_then(|upper| upper.checked_add(seed)),
        )
    }
}

impl<I, B, F> ExactSizeIterator for ScanLeft<I, B, F>
where
    I: ExactSizeIterator,
    B: Clone,
    F: FnMut(B, I::Item) -> B,
{
}

impl<I, B, F> FusedIterator for ScanLeft<I, B, F>
where
    I: Iterator,
    B: Clone,
    F: FnMut(B, I::Item) -> B,
{
}

pub fn from_one<T>(item: T) -> Iterator1<AtMostOne<T>> {
    Iterator1::from_iter_unchecked(Some(item))
}

pub fn head_and_tail<T, I>(head: T, tail: I) -> HeadAndTail<I>
where
    I: IntoIterator<Item = T>,
{
    from_one(head).chain(tail)
}
