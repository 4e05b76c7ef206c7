// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry helpers layered on top of [`kurbo`].
//!
//! Points, vectors, sizes, and rectangles are plain `kurbo` types. This module
//! adds the two shapes of data that layout negotiation needs on top of them:
//!
//! - [`Compass`] — one value per edge (`up`, `down`, `left`, `right`), used
//!   for padding insets and per-edge border styles.
//! - [`SizeRange`] — the set of sizes a control may legally take, stored as a
//!   rectangle in *size space*.

use core::ops::Add;

pub use kurbo::{Point, Rect, Size, Vec2};

/// A value for each of the four edges of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Compass<T> {
    /// Top edge.
    pub up: T,
    /// Bottom edge.
    pub down: T,
    /// Left edge.
    pub left: T,
    /// Right edge.
    pub right: T,
}

impl<T: Clone> Compass<T> {
    /// Uses the same value on every edge.
    #[must_use]
    pub fn uniform(value: T) -> Self {
        Self {
            up: value.clone(),
            down: value.clone(),
            left: value.clone(),
            right: value,
        }
    }
}

impl<T> Compass<T> {
    /// Applies `f` to every edge, in `up, down, left, right` order.
    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Compass<U> {
        Compass {
            up: f(self.up),
            down: f(self.down),
            left: f(self.left),
            right: f(self.right),
        }
    }

    /// Combines two per-edge values edge by edge.
    #[must_use]
    pub fn zip_with<U, V>(self, other: Compass<U>, mut f: impl FnMut(T, U) -> V) -> Compass<V> {
        Compass {
            up: f(self.up, other.up),
            down: f(self.down, other.down),
            left: f(self.left, other.left),
            right: f(self.right, other.right),
        }
    }
}

impl<T: Copy + Add<Output = T>> Compass<T> {
    /// Sum of the left and right values.
    #[inline]
    #[must_use]
    pub fn horizontal(&self) -> T {
        self.left + self.right
    }

    /// Sum of the up and down values.
    #[inline]
    #[must_use]
    pub fn vertical(&self) -> T {
        self.up + self.down
    }
}

/// Per-edge insets, all non-negative.
pub type Padding = Compass<f64>;

impl Padding {
    /// Total extra footprint added by these insets.
    #[inline]
    #[must_use]
    pub fn total(&self) -> Vec2 {
        Vec2::new(self.horizontal(), self.vertical())
    }

    /// Where the padded content's origin lands: `(left, up)`.
    #[inline]
    #[must_use]
    pub fn origin_offset(&self) -> Vec2 {
        Vec2::new(self.left, self.up)
    }
}

/// The set of sizes a control may take.
///
/// Stored as a rectangle in size space: `x0..=x1` is the legal width
/// interval and `y0..=y1` the legal height interval. The minimum may be
/// negative after narrowing; sizes themselves are never reported negative
/// by the built-in controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeRange(Rect);

impl SizeRange {
    /// A range accepting every non-negative size.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self(Rect::new(0.0, 0.0, f64::INFINITY, f64::INFINITY))
    }

    /// A range from `min` to `max`, inclusive on both ends.
    #[must_use]
    pub const fn new(min: Size, max: Size) -> Self {
        Self(Rect::new(min.width, min.height, max.width, max.height))
    }

    /// A range containing exactly one size.
    #[must_use]
    pub const fn exact(size: Size) -> Self {
        Self::new(size, size)
    }

    /// Wraps a size-space rectangle directly.
    #[must_use]
    pub const fn from_rect(rect: Rect) -> Self {
        Self(rect)
    }

    /// The underlying size-space rectangle.
    #[must_use]
    pub const fn as_rect(self) -> Rect {
        self.0
    }

    /// Smallest legal size.
    #[must_use]
    pub const fn min(self) -> Size {
        Size::new(self.0.x0, self.0.y0)
    }

    /// Largest legal size.
    #[must_use]
    pub const fn max(self) -> Size {
        Size::new(self.0.x1, self.0.y1)
    }

    /// Returns `true` if no size satisfies this range.
    ///
    /// Sizes are never negative, so a range whose maximum is below zero on
    /// either axis is empty even when its minimum is lower still.
    #[must_use]
    pub fn is_empty(self) -> bool {
        let r = self.0;
        !(r.x0 <= r.x1 && r.y0 <= r.y1 && r.x1 >= 0.0 && r.y1 >= 0.0)
    }

    /// Returns `true` if `size` lies within the range (inclusive).
    #[must_use]
    pub fn contains(self, size: Size) -> bool {
        size.width >= self.0.x0
            && size.width <= self.0.x1
            && size.height >= self.0.y0
            && size.height <= self.0.y1
    }

    /// Clamps `size` into the range, never going below zero.
    #[must_use]
    pub fn clamp(self, size: Size) -> Size {
        Size::new(
            size.width.min(self.0.x1).max(self.0.x0).max(0.0),
            size.height.min(self.0.y1).max(self.0.y0).max(0.0),
        )
    }

    /// Narrows the range by reserving `by` for surrounding decoration.
    ///
    /// Both ends move: the whole size-space rectangle is translated by `-by`.
    #[must_use]
    pub fn shrink(self, by: Vec2) -> Self {
        Self(self.0 - by)
    }
}

impl Default for SizeRange {
    fn default() -> Self {
        Self::unbounded()
    }
}
