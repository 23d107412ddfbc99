use core::num::NonZeroUsize;

use crate::safety;

// A violated non-empty invariant panics in debug builds.

impl safety::NonZeroExt<usize> for NonZeroUsize {
    #[inline(always)]
    unsafe fn new_maybe_unchecked(n: usize) -> Self {
        debug_assert!(n != 0, "non-empty length is zero");
        NonZeroUsize::new_unchecked(n)
    }
}

impl<T> safety::OptionExt<T> for Option<T> {
    #[inline(always)]
    unsafe fn unwrap_maybe_unchecked(self) -> T {
        debug_assert!(self.is_some(), "non-empty collection has no items");
        self.unwrap_unchecked()
    }
}
