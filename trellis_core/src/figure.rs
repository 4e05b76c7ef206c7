// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Figures: immutable colored content on an unbounded plane.
//!
//! A [`Figure`] assigns a color (with alpha) to every point of the plane.
//! Figures compose into trees; subtrees are shared through [`Arc`], so
//! building a larger figure never copies a smaller one.
//!
//! | Variant | `get_point(p)` |
//! |---|---|
//! | [`Solid`](Figure::Solid) | the color, everywhere |
//! | [`Fill`](Figure::Fill) | the color inside the region, transparent outside |
//! | [`Translated`](Figure::Translated) | `source.get_point(p - offset)` |
//! | [`Superimposed`](Figure::Superimposed) | `over` composited onto `under` |
//! | [`Combined`](Figure::Combined) | whichever of `a`/`b` covers `p` |
//!
//! `Combined` assumes its two children have disjoint non-transparent
//! supports. Where they overlap the result is unspecified; use
//! `Superimposed` when an order is intended.

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Circle, RoundedRect, Shape};

use crate::color::{Color, ColorExt};
use crate::geometry::{Point, Rect, Vec2};

/// The rectangle covering the whole plane.
pub const UNBOUNDED: Rect = Rect::new(
    f64::NEG_INFINITY,
    f64::NEG_INFINITY,
    f64::INFINITY,
    f64::INFINITY,
);

/// A bounded area filled by [`Figure::Fill`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Region {
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// A circle.
    Circle(Circle),
    /// A rectangle with rounded corners.
    RoundedRect(RoundedRect),
}

impl Region {
    /// Returns `true` if `point` lies inside the region.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Self::Rect(r) => r.contains(point),
            Self::Circle(c) => c.contains(point),
            Self::RoundedRect(r) => r.contains(point),
        }
    }

    /// Smallest axis-aligned rectangle containing the region.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(r) => *r,
            Self::Circle(c) => c.bounding_box(),
            Self::RoundedRect(r) => r.rect(),
        }
    }
}

/// Colored content over the whole plane.
#[derive(Clone, Debug, PartialEq)]
pub enum Figure {
    /// One color everywhere.
    Solid(Color),
    /// One color inside a region, transparent elsewhere.
    Fill {
        /// Covered area.
        region: Region,
        /// Fill color.
        color: Color,
    },
    /// `source` moved by `offset`.
    Translated {
        /// Displacement applied to the source.
        offset: Vec2,
        /// Figure being moved.
        source: Arc<Figure>,
    },
    /// `over` composited on top of `under` using `over`'s alpha.
    Superimposed {
        /// Lower figure.
        under: Arc<Figure>,
        /// Upper figure.
        over: Arc<Figure>,
    },
    /// Two figures whose supports must not overlap.
    Combined {
        /// First figure.
        a: Arc<Figure>,
        /// Second figure.
        b: Arc<Figure>,
    },
}

impl Figure {
    /// A filled rectangle.
    #[must_use]
    pub fn rect(rect: Rect, color: Color) -> Self {
        Self::Fill {
            region: Region::Rect(rect),
            color,
        }
    }

    /// A filled circle.
    #[must_use]
    pub fn circle(center: Point, radius: f64, color: Color) -> Self {
        Self::Fill {
            region: Region::Circle(Circle::new(center, radius)),
            color,
        }
    }

    /// This figure moved by `offset`.
    #[must_use]
    pub fn translated(self: Arc<Self>, offset: Vec2) -> Self {
        Self::Translated {
            offset,
            source: self,
        }
    }

    /// `over` drawn on top of this figure.
    #[must_use]
    pub fn superimposed(self: Arc<Self>, over: Arc<Self>) -> Self {
        Self::Superimposed { under: self, over }
    }

    /// This figure and `other`, which must not overlap it.
    #[must_use]
    pub fn combined(self: Arc<Self>, other: Arc<Self>) -> Self {
        Self::Combined { a: self, b: other }
    }

    /// Color at `point`.
    #[must_use]
    pub fn get_point(&self, point: Point) -> Color {
        match self {
            Self::Solid(color) => *color,
            Self::Fill { region, color } => {
                if region.contains(point) {
                    *color
                } else {
                    Color::TRANSPARENT
                }
            }
            Self::Translated { offset, source } => source.get_point(point - *offset),
            Self::Superimposed { under, over } => {
                let top = over.get_point(point);
                if top.is_opaque() {
                    top
                } else {
                    top.over(under.get_point(point))
                }
            }
            Self::Combined { a, b } => {
                let first = a.get_point(point);
                if first.is_transparent() {
                    b.get_point(point)
                } else {
                    first
                }
            }
        }
    }

    /// A rectangle outside of which the figure is fully transparent.
    ///
    /// Not necessarily minimal. [`UNBOUNDED`] for figures with infinite
    /// support.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Solid(_) => UNBOUNDED,
            Self::Fill { region, .. } => region.bounds(),
            Self::Translated { offset, source } => source.bounds() + *offset,
            Self::Superimposed { under, over } => under.bounds().union(over.bounds()),
            Self::Combined { a, b } => a.bounds().union(b.bounds()),
        }
    }

    /// Samples the figure over `area` into a `width` × `height` raster.
    ///
    /// Each pixel takes one sample at its centre; there is no anti-aliasing.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    #[must_use]
    pub fn get_area(&self, area: Rect, width: usize, height: usize) -> Raster {
        let Some(count) = width.checked_mul(height) else {
            panic!("raster of {width}x{height} pixels overflows usize");
        };
        let mut pixels = Vec::with_capacity(count);
        let step_x = area.width() / width as f64;
        let step_y = area.height() / height as f64;
        for row in 0..height {
            let y = area.y0 + (row as f64 + 0.5) * step_y;
            for col in 0..width {
                let x = area.x0 + (col as f64 + 0.5) * step_x;
                pixels.push(self.get_point(Point::new(x, y)));
            }
        }
        Raster {
            width,
            height,
            pixels,
        }
    }
}

/// A row-major grid of sampled colors.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    /// Pixels per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// `width * height` colors, top row first.
    pub pixels: Vec<Color>,
}

impl Raster {
    /// Color of the pixel at column `x`, row `y`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            self.pixels.get(y * self.width + x).copied()
        } else {
            None
        }
    }

    /// Packs the raster as 8-bit RGBA, four bytes per pixel.
    #[must_use]
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| {
                let p = c.to_rgba8();
                [p.r, p.g, p.b, p.a]
            })
            .collect()
    }
}
