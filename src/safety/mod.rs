//! Invariant unwrapping that is checked in tests and unchecked otherwise.
//!
//! Non-empty types know that their items are present, so unwrapping an `Option` or constructing a
//! `NonZeroUsize` from their length cannot fail. Under test (and not Miri), these operations panic
//! if that assumption is ever wrong.

#[cfg(all(not(miri), test))]
mod checked;
#[cfg(not(all(not(miri), test)))]
mod unchecked;

pub trait NonZeroExt<T> {
    /// # Safety
    ///
    /// `n` must be non-zero.
    unsafe fn new_maybe_unchecked(n: T) -> Self;
}

pub trait OptionExt<T> {
    /// # Safety
    ///
    /// `self` must be `Some`.
    unsafe fn unwrap_maybe_unchecked(self) -> T;
}
