// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge lines drawn from the environment's border styles.

use alloc::boxed::Box;
use core::any::Any;

use super::{Block, Control, OwnedControl};
use crate::environment::{BorderStyle, Borders, ControlEnvironment};
use crate::geometry::{Compass, Rect, Size, Vec2};
use crate::probe::Probes;
use crate::render::RenderContext;

/// Draws a line on every edge the environment marks as bordered, around the
/// inner block.
///
/// Which edges are drawn is decided by whoever supplies the environment: an
/// enclosing [`PadBlock`](super::PadBlock) with a zero inset on an edge
/// suppresses that edge, since there is nothing for it to separate. The
/// inner block sees no borders at all.
#[derive(Debug)]
pub struct BorderBlock {
    /// Bordered content.
    pub inner: Box<dyn Block>,
}

impl BorderBlock {
    /// Creates a border around `inner`.
    #[must_use]
    pub fn new(inner: impl Block + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Block for BorderBlock {
    fn create_control(&self, env: &ControlEnvironment) -> OwnedControl {
        env.assert_valid();
        let inner_env = env.bordered();
        inner_env.assert_valid();
        Box::new(BorderControl {
            borders: env.borders,
            inner: self.inner.create_control(&inner_env),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct BorderControl {
    borders: Borders,
    inner: OwnedControl,
}

impl BorderControl {
    fn weights(&self) -> Compass<f64> {
        self.borders.map(BorderStyle::weight)
    }
}

impl Control for BorderControl {
    fn size(&self) -> Size {
        let w = self.weights();
        self.inner.size() + Size::new(w.horizontal(), w.vertical())
    }

    fn update(mut self: Box<Self>, offset: Vec2, probes: &Probes, time: f64) -> OwnedControl {
        let w = self.weights();
        self.inner = self
            .inner
            .update(offset + Vec2::new(w.left, w.up), probes, time);
        self
    }

    fn render(&self, ctx: &mut dyn RenderContext) {
        let Size { width, height } = self.size();
        let w = self.weights();
        let edges = [
            (self.borders.up, Rect::new(0.0, 0.0, width, w.up)),
            (self.borders.down, Rect::new(0.0, height - w.down, width, height)),
            (self.borders.left, Rect::new(0.0, 0.0, w.left, height)),
            (self.borders.right, Rect::new(width - w.right, 0.0, width, height)),
        ];
        for (style, rect) in edges {
            if let BorderStyle::Line { color, .. } = style {
                ctx.clear_texture();
                ctx.set_color(color);
                ctx.draw_quad(rect);
            }
        }
        let mut ctx = ctx.translate(Vec2::new(w.left, w.up));
        self.inner.render(&mut **ctx);
    }
}
