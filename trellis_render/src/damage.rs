// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spatial damage tracking for partial re-rendering.

use alloc::vec::Vec;

use trellis_core::geometry::Rect;

use crate::draw::RenderItem;

/// A region of the output that needs re-rendering.
///
/// Backends can use this to minimize work by only redrawing areas that
/// changed since the last frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DamageRegion {
    /// The entire output needs redrawing.
    #[default]
    Full,
    /// A list of world-space rectangles that need redrawing.
    Rects(Vec<Rect>),
    /// Nothing changed; the previous frame can be reused.
    None,
}

impl DamageRegion {
    /// Computes the damage between two flattened frames.
    ///
    /// Items are compared position by position. Every item that differs
    /// contributes both its old and its new rectangle; items present in only
    /// one frame contribute their own rectangle.
    #[must_use]
    pub fn between(prev: &[RenderItem], next: &[RenderItem]) -> Self {
        let mut rects = Vec::new();
        for (i, item) in next.iter().enumerate() {
            match prev.get(i) {
                Some(old) if old == item => {}
                Some(old) => {
                    rects.push(old.rect);
                    rects.push(item.rect);
                }
                None => rects.push(item.rect),
            }
        }
        rects.extend(prev.iter().skip(next.len()).map(|old| old.rect));
        rects.retain(|r| r.area() > 0.0);
        if rects.is_empty() {
            Self::None
        } else {
            Self::Rects(rects)
        }
    }

    /// Returns `true` if no region needs redrawing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Smallest rectangle covering all damage, or `None` for full or no
    /// damage.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rects(rects) => rects.iter().copied().reduce(|a, b| a.union(b)),
            Self::Full | Self::None => None,
        }
    }

    /// Merges another damage region into this one.
    pub fn merge(&mut self, other: &Self) {
        match (&*self, other) {
            (Self::Full, _) | (_, Self::Full) => *self = Self::Full,
            (Self::None, _) => *self = other.clone(),
            (_, Self::None) => {}
            (Self::Rects(a), Self::Rects(b)) => {
                let mut merged = a.clone();
                merged.extend_from_slice(b);
                *self = Self::Rects(merged);
            }
        }
    }
}
