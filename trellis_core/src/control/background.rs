// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Solid background behind an inner control.

use alloc::boxed::Box;
use core::any::Any;

use super::{Block, Control, OwnedControl};
use crate::color::Color;
use crate::environment::ControlEnvironment;
use crate::geometry::{Point, Rect, Size, Vec2};
use crate::probe::Probes;
use crate::render::RenderContext;

/// Fills the inner block's footprint with a color, then draws the inner
/// block on top.
#[derive(Debug)]
pub struct BackgroundBlock {
    /// Fill color.
    pub color: Color,
    /// Foreground content.
    pub inner: Box<dyn Block>,
}

impl BackgroundBlock {
    /// Creates a background of `color` behind `inner`.
    #[must_use]
    pub fn new(color: Color, inner: impl Block + 'static) -> Self {
        Self {
            color,
            inner: Box::new(inner),
        }
    }
}

impl Block for BackgroundBlock {
    fn create_control(&self, env: &ControlEnvironment) -> OwnedControl {
        env.assert_valid();
        Box::new(BackgroundControl {
            color: self.color,
            inner: self.inner.create_control(env),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct BackgroundControl {
    color: Color,
    inner: OwnedControl,
}

impl Control for BackgroundControl {
    fn size(&self) -> Size {
        self.inner.size()
    }

    fn update(mut self: Box<Self>, offset: Vec2, probes: &Probes, time: f64) -> OwnedControl {
        self.inner = self.inner.update(offset, probes, time);
        self
    }

    fn render(&self, ctx: &mut dyn RenderContext) {
        // Background strictly before foreground.
        ctx.clear_texture();
        ctx.set_color(self.color);
        ctx.draw_quad(Rect::from_origin_size(Point::ORIGIN, self.size()));
        self.inner.render(ctx);
    }

    fn replace(mut self: Box<Self>, block: &dyn Block, env: &ControlEnvironment) -> OwnedControl {
        let Some(next) = block.as_any().downcast_ref::<BackgroundBlock>() else {
            drop(self);
            return block.create_control(env);
        };
        // Another background: recolor and let the inner control decide.
        env.assert_valid();
        self.color = next.color;
        self.inner = self.inner.replace(&*next.inner, env);
        self
    }
}
