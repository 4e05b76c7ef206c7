// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insets around an inner control.

use alloc::boxed::Box;
use core::any::Any;

use super::{Block, Control, OwnedControl};
use crate::environment::ControlEnvironment;
use crate::geometry::{Padding, Size, Vec2};
use crate::probe::Probes;
use crate::render::RenderContext;

/// Surrounds the inner block with empty space.
///
/// The inner block sees a size range reduced by the total inset on each
/// axis, and no border on any edge whose inset is zero.
#[derive(Debug)]
pub struct PadBlock {
    /// Non-negative insets.
    pub padding: Padding,
    /// Padded content.
    pub inner: Box<dyn Block>,
}

impl PadBlock {
    /// Creates a padding of `padding` around `inner`.
    #[must_use]
    pub fn new(padding: Padding, inner: impl Block + 'static) -> Self {
        Self {
            padding,
            inner: Box::new(inner),
        }
    }
}

impl Block for PadBlock {
    fn create_control(&self, env: &ControlEnvironment) -> OwnedControl {
        env.assert_valid();
        let inner_env = env.padded(&self.padding);
        inner_env.assert_valid();
        Box::new(PadControl {
            padding: self.padding,
            inner: self.inner.create_control(&inner_env),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct PadControl {
    padding: Padding,
    inner: OwnedControl,
}

impl Control for PadControl {
    fn size(&self) -> Size {
        self.inner.size() + self.padding.total().to_size()
    }

    fn update(mut self: Box<Self>, offset: Vec2, probes: &Probes, time: f64) -> OwnedControl {
        let inner_offset = offset + self.padding.origin_offset();
        self.inner = self.inner.update(inner_offset, probes, time);
        self
    }

    fn render(&self, ctx: &mut dyn RenderContext) {
        let mut ctx = ctx.translate(self.padding.origin_offset());
        self.inner.render(&mut **ctx);
    }
}
