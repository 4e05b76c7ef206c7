// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw list: the recorded render calls of one frame.

use alloc::vec::Vec;

use trellis_core::color::Color;
use trellis_core::geometry::{Rect, Vec2};
use trellis_core::render::RenderContext;

/// One call made against a [`RenderContext`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// Sets the color for subsequent quads.
    SetColor(Color),
    /// Unbinds any texture; subsequent quads are flat-colored.
    ClearTexture,
    /// Draws a quad in the current local coordinates.
    DrawQuad(Rect),
    /// Pushes a translation onto the transform stack.
    PushTranslation(Vec2),
    /// Pops the most recent translation.
    PopTranslation,
}

/// A single quad in world space.
///
/// Items are produced in back-to-front order, matching the order the
/// controls drew them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderItem {
    /// World-space rectangle.
    pub rect: Rect,
    /// Color in effect when the quad was drawn.
    pub color: Color,
}

/// Records render calls for later playback or inspection.
///
/// Backends that batch work can render a tree into a `DrawList`, flatten it
/// with [`items`](Self::items), and compare against the previous frame with
/// [`DamageRegion::between`](crate::DamageRegion::between).
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Creates an empty draw list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, in call order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Clears the list for reuse.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Returns `true` if every pushed translation was popped.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0_usize;
        for command in &self.commands {
            match command {
                DrawCommand::PushTranslation(_) => depth += 1,
                DrawCommand::PopTranslation => match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    None => return false,
                },
                _ => {}
            }
        }
        depth == 0
    }

    /// Flattens the recorded commands into world-space quads.
    ///
    /// Color starts as [`Color::BLACK`]. A pop with no matching push is
    /// ignored.
    #[must_use]
    pub fn items(&self) -> Vec<RenderItem> {
        let mut items = Vec::new();
        let mut color = Color::BLACK;
        let mut stack: Vec<Vec2> = Vec::new();
        let mut origin = Vec2::ZERO;
        for command in &self.commands {
            match *command {
                DrawCommand::SetColor(c) => color = c,
                DrawCommand::ClearTexture => {}
                DrawCommand::DrawQuad(rect) => items.push(RenderItem {
                    rect: rect + origin,
                    color,
                }),
                DrawCommand::PushTranslation(offset) => {
                    stack.push(origin);
                    origin += offset;
                }
                DrawCommand::PopTranslation => {
                    if let Some(previous) = stack.pop() {
                        origin = previous;
                    }
                }
            }
        }
        items
    }
}

impl RenderContext for DrawList {
    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn clear_texture(&mut self) {
        self.commands.push(DrawCommand::ClearTexture);
    }

    fn draw_quad(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::DrawQuad(rect));
    }

    fn push_translation(&mut self, offset: Vec2) {
        self.commands.push(DrawCommand::PushTranslation(offset));
    }

    fn pop_translation(&mut self) {
        self.commands.push(DrawCommand::PopTranslation);
    }
}
