// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering contract consumed by controls.
//!
//! Trellis never draws pixels itself. A backend (GPU, software rasterizer,
//! or a recording double such as `trellis_render::DrawList`) implements
//! [`RenderContext`], and each control's
//! [`render`](crate::control::Control::render) issues calls against it.
//!
//! The context carries a little state: the current fill color, whether a
//! texture is bound, and a stack of coordinate translations. A control must
//! not assume anything about that state on entry beyond what it sets itself,
//! and must leave the translation stack as it found it. [`translate`] makes
//! the second rule hard to break.
//!
//! [`translate`]: RenderContext::translate

use crate::color::Color;
use crate::geometry::{Rect, Vec2};
use crate::scoped::Scoped;

/// A stateful drawing surface.
pub trait RenderContext {
    /// Sets the fill color for subsequent quads.
    fn set_color(&mut self, color: Color);

    /// Unbinds any texture so quads are filled with the plain color.
    fn clear_texture(&mut self);

    /// Fills `rect`, given in the current (translated) coordinate space.
    fn draw_quad(&mut self, rect: Rect);

    /// Shifts the coordinate origin by `offset` until the matching pop.
    ///
    /// Prefer [`translate`](Self::translate), which pops automatically.
    fn push_translation(&mut self, offset: Vec2);

    /// Undoes the most recent [`push_translation`](Self::push_translation).
    fn pop_translation(&mut self);
}

/// A translation that stays pushed for as long as this guard lives.
///
/// Dereferences to the context, so drawing continues through the guard.
pub type Translation<'a> = Scoped<&'a mut dyn RenderContext, fn(&mut dyn RenderContext)>;

impl dyn RenderContext + '_ {
    /// Pushes a translation and returns a guard that pops it when dropped,
    /// including while unwinding out of a failed draw.
    #[must_use = "the translation is popped as soon as the guard is dropped"]
    pub fn translate(&mut self, offset: Vec2) -> Translation<'_> {
        self.push_translation(offset);
        let ctx: &mut dyn RenderContext = self;
        Scoped::new(ctx, pop_translation as fn(&mut dyn RenderContext))
    }
}

fn pop_translation(ctx: &mut dyn RenderContext) {
    ctx.pop_translation();
}
