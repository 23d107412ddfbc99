//! Non-empty sequences and the operations that naturally produce them.
//!
//! This crate provides [`NonEmpty`] sequence types ([`Vec1`] and [`Chain1`]) along with a small
//! set of derived operations over ordinary sequences:
//!
//! - [`to_non_empty`] converts a possibly empty sequence into an `Option<Vec1<_>>`.
//! - [`group_by_ordered_key`] partitions a sequence into an [`OrderedMap`] of non-empty buckets,
//!   keyed by a projection and ordered by an explicit [`Compare`] comparator.
//! - [`scan_left1`] computes a running fold and returns every intermediate value, which is always
//!   non-empty because the seed is itself a value.
//!
//! These operations are also available as methods via [`SequenceExt`].
//!
//! ```rust
//! use seq1::cmp::Natural;
//! use seq1::prelude::*;
//!
//! let groups = [12, -2, 3, -5].group_by_ordered_key(|x| *x >= 0, Natural);
//! assert_eq!(groups.get(&false).unwrap().as_slice(), &[-2, -5]);
//! assert_eq!(groups.get(&true).unwrap().as_slice(), &[12, 3]);
//!
//! let sums = [1, 2, 3].scan_left_vec1(0, |sum, x| sum + x);
//! assert_eq!(sums.as_slice(), &[0, 1, 3, 6]);
//! ```
//!
//! [`Chain1`]: crate::chain1::Chain1
//! [`Compare`]: crate::cmp::Compare
//! [`group_by_ordered_key`]: crate::group::group_by_ordered_key
//! [`OrderedMap`]: crate::ordered_map::OrderedMap
//! [`scan_left1`]: crate::scan::scan_left1
//! [`SequenceExt`]: crate::sequence::SequenceExt
//! [`to_non_empty`]: crate::sequence::to_non_empty
//! [`Vec1`]: crate::vec1::Vec1

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::cloned_instead_of_copied,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::flat_map_option,
    clippy::from_iter_instead_of_collect,
    clippy::if_not_else,
    clippy::manual_ok_or,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::redundant_closure_for_method_calls,
    clippy::redundant_else,
    clippy::unreadable_literal,
    clippy::unused_self
)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod safety;
mod serde;

pub mod chain1;
pub mod cmp;
pub mod group;
pub mod iter1;
pub mod ordered_map;
pub mod scan;
pub mod sequence;
pub mod vec1;

pub mod prelude {
    pub use crate::cmp::Compare;
    pub use crate::iter1::{FromIterator1, IntoIterator1, IteratorExt as _};
    #[cfg(feature = "alloc")]
    pub use {
        crate::chain1::{Chain, Chain1},
        crate::group::Bucket1,
        crate::ordered_map::OrderedMap,
        crate::sequence::SequenceExt as _,
        crate::vec1::{vec1, Vec1},
    };
}

use core::fmt::{self, Display, Formatter};
#[cfg(feature = "serde")]
use {
    ::serde::{Deserialize, Serialize},
    ::serde_derive::{Deserialize, Serialize},
};

#[cfg(feature = "serde")]
use crate::serde::Serde;

/// A collection that is known to contain at least one item.
///
/// `NonEmpty` is never constructed directly. Instead, see the type definitions that specialize it,
/// such as [`Vec1`] and [`Chain1`].
///
/// [`Chain1`]: crate::chain1::Chain1
/// [`Vec1`]: crate::vec1::Vec1
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        bound(
            deserialize = "Self: TryFrom<Serde<T>, Error = EmptyError>, \
                           T: Clone + Deserialize<'de>,",
            serialize = "T: Clone + Serialize,",
        ),
        try_from = "Serde<T>",
        into = "Serde<T>",
    )
)]
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct NonEmpty<T>
where
    T: ?Sized,
{
    items: T,
}

impl<T> AsRef<T> for NonEmpty<T> {
    fn as_ref(&self) -> &T {
        &self.items
    }
}

/// The error produced when a non-empty collection is constructed from no items.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EmptyError;

impl Display for EmptyError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "non-empty collection has no items")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for EmptyError {}
