// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped ownership: a value paired with the action that releases it.
//!
//! A [`Scoped`] is the current exclusive holder of some resource. The value
//! is only reachable through the wrapper, and the release action runs exactly
//! once: when the wrapper is dropped (normal exit, early return, or unwinding
//! out of a panic) or when [`release`](Scoped::release) is called. Ownership
//! can be passed onward by moving the wrapper; [`into_inner`](Scoped::into_inner)
//! hands the bare value out and disarms the release action.
//!
//! Releasing twice is unrepresentable: both `release` and `into_inner`
//! consume the wrapper.

use core::fmt;
use core::ops::{Deref, DerefMut};

/// A value that is released by `F` when this holder goes away.
pub struct Scoped<T, F: FnOnce(T)> {
    // `None` only after the value has been moved out.
    inner: Option<(T, F)>,
}

impl<T, F: FnOnce(T)> Scoped<T, F> {
    /// Takes ownership of `value`; `release` runs when the holder is done.
    #[inline]
    #[must_use]
    pub fn new(value: T, release: F) -> Self {
        Self {
            inner: Some((value, release)),
        }
    }

    /// Runs the release action now.
    #[inline]
    pub fn release(mut self) {
        if let Some((value, release)) = self.inner.take() {
            release(value);
        }
    }

    /// Transfers the value out without releasing it.
    ///
    /// The caller becomes responsible for whatever cleanup the release action
    /// would have performed.
    #[inline]
    #[must_use]
    pub fn into_inner(mut self) -> T {
        match self.inner.take() {
            Some((value, _)) => value,
            None => unreachable!("Scoped value is present until consumed"),
        }
    }

    #[inline]
    fn value(&self) -> &T {
        match &self.inner {
            Some((value, _)) => value,
            None => unreachable!("Scoped value is present until consumed"),
        }
    }

    #[inline]
    fn value_mut(&mut self) -> &mut T {
        match &mut self.inner {
            Some((value, _)) => value,
            None => unreachable!("Scoped value is present until consumed"),
        }
    }
}

impl<T, F: FnOnce(T)> Deref for Scoped<T, F> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        self.value()
    }
}

impl<T, F: FnOnce(T)> DerefMut for Scoped<T, F> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        self.value_mut()
    }
}

impl<T, F: FnOnce(T)> Drop for Scoped<T, F> {
    fn drop(&mut self) {
        if let Some((value, release)) = self.inner.take() {
            release(value);
        }
    }
}

impl<T: fmt::Debug, F: FnOnce(T)> fmt::Debug for Scoped<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scoped")
            .field("value", self.value())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::rc::Rc;
    use core::cell::Cell;

    use super::*;

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce(u32)) {
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        (count, move |_| seen.set(seen.get() + 1))
    }

    #[test]
    fn drop_releases_once() {
        let (count, release) = counter();
        {
            let held = Scoped::new(7_u32, release);
            assert_eq!(*held, 7);
            assert_eq!(count.get(), 0);
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn explicit_release_does_not_double_release() {
        let (count, release) = counter();
        let held = Scoped::new(1_u32, release);
        held.release();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn into_inner_disarms() {
        let (count, release) = counter();
        let held = Scoped::new(3_u32, release);
        assert_eq!(held.into_inner(), 3);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn moving_transfers_responsibility() {
        let (count, release) = counter();
        let held = Scoped::new(5_u32, release);
        let moved = held;
        assert_eq!(count.get(), 0);
        drop(moved);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn unwinding_releases() {
        let (count, release) = counter();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _held = Scoped::new(0_u32, release);
            panic!("render failed");
        }));
        assert!(result.is_err());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn deref_mut_edits_value() {
        let mut held = Scoped::new(1_u32, |_| {});
        *held += 1;
        assert_eq!(held.into_inner(), 2);
    }
}
