// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Empty fixed-size leaf.

use alloc::boxed::Box;
use core::any::Any;

use super::{Block, Control, OwnedControl};
use crate::environment::ControlEnvironment;
use crate::geometry::{Size, Vec2};
use crate::probe::Probes;
use crate::render::RenderContext;

/// Takes up space and draws nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpaceBlock {
    /// Requested size; clamped into the environment's size range.
    pub size: Size,
}

impl SpaceBlock {
    /// Creates a spacer of the requested size.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Block for SpaceBlock {
    fn create_control(&self, env: &ControlEnvironment) -> OwnedControl {
        env.assert_valid();
        Box::new(SpaceControl {
            size: env.size_range.clamp(self.size),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct SpaceControl {
    size: Size,
}

impl Control for SpaceControl {
    fn size(&self) -> Size {
        self.size
    }

    fn update(self: Box<Self>, _: Vec2, _: &Probes, _: f64) -> OwnedControl {
        self
    }

    fn render(&self, _: &mut dyn RenderContext) {}
}
