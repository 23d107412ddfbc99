//! Explicit total orders.
//!
//! Key-ordered operations in this crate take their order as a value rather than relying on the
//! [`Ord`] implementation of the key type. Any `Fn(&K, &K) -> Ordering` is a [`Compare`], as are
//! [`Natural`] (the [`Ord`] order) and [`Reversed`].
//!
//! Implementations must be total orders: reflexive, antisymmetric, transitive and total. Key
//! equality in this crate means that `compare` returns [`Ordering::Equal`].

use core::cmp::Ordering;

/// A total order over `K`.
///
/// # Examples
///
/// ```rust
/// use core::cmp::Ordering;
/// use seq1::cmp::{Compare, Natural};
///
/// assert_eq!(Natural.compare(&1, &2), Ordering::Less);
/// assert_eq!(Natural.reversed().compare(&1, &2), Ordering::Greater);
///
/// let by_len = |lhs: &&str, rhs: &&str| lhs.len().cmp(&rhs.len());
/// assert_eq!(by_len.compare(&"ab", &"c"), Ordering::Greater);
/// ```
pub trait Compare<K>
where
    K: ?Sized,
{
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering;
}

impl<K, F> Compare<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        (self)(lhs, rhs)
    }
}

/// The total order given by [`Ord`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Natural;

impl Natural {
    pub const fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }
}

impl<K> Compare<K> for Natural
where
    K: ?Sized + Ord,
{
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// The reverse of a total order.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Reversed<C>(pub C);

impl<C> Reversed<C> {
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<K, C> Compare<K> for Reversed<C>
where
    K: ?Sized,
    C: Compare<K>,
{
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        self.0.compare(rhs, lhs)
    }
}
