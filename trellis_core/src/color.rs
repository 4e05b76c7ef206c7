// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors.
//!
//! [`Color`] is [`peniko::Color`]: sRGB with straight (non-premultiplied)
//! alpha and `f32` components. Named colors live in [`palette::css`].
//!
//! Two helpers sit on top: [`clamped`], which builds a color with every
//! channel forced into `[0, 1]`, and [`ColorExt::over`], the source-over
//! compositing used by [`Figure`](crate::figure::Figure).

pub use peniko::Color;
pub use peniko::color::palette;

/// Creates a color, clamping every channel to `[0, 1]`.
///
/// NaN channels become `0`.
#[must_use]
pub fn clamped(r: f32, g: f32, b: f32, a: f32) -> Color {
    Color::new([clamp_unit(r), clamp_unit(g), clamp_unit(b), clamp_unit(a)])
}

/// Compositing queries on straight-alpha colors.
pub trait ColorExt: Copy {
    /// Returns `true` if nothing underneath shows through.
    fn is_opaque(self) -> bool;

    /// Returns `true` if the color contributes nothing.
    fn is_transparent(self) -> bool;

    /// Composites `self` over `under` (source-over).
    #[must_use]
    fn over(self, under: Self) -> Self;
}

impl ColorExt for Color {
    fn is_opaque(self) -> bool {
        self.components[3] >= 1.0
    }

    fn is_transparent(self) -> bool {
        self.components[3] <= 0.0
    }

    fn over(self, under: Self) -> Self {
        if self.is_opaque() {
            return self;
        }
        if self.is_transparent() {
            return under;
        }
        let [r, g, b, top_a] = self.components;
        let [ur, ug, ub, ua] = under.components;
        let under_weight = ua * (1.0 - top_a);
        let a = top_a + under_weight;
        if a <= 0.0 {
            return Color::TRANSPARENT;
        }
        let mix = |over: f32, below: f32| (over * top_a + below * under_weight) / a;
        clamped(mix(r, ur), mix(g, ug), mix(b, ub), a)
    }
}

fn clamp_unit(v: f32) -> f32 {
    // NaN maps to 0.
    if v >= 0.0 { v.min(1.0) } else { 0.0 }
}
