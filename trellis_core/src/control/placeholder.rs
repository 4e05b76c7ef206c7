// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A stand-in that turns into real content when pressed.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::any::Any;

use super::{Block, Control, OwnedControl};
use crate::color::Color;
use crate::environment::ControlEnvironment;
use crate::geometry::{Point, Rect, Size, Vec2};
use crate::probe::Probes;
use crate::render::RenderContext;

/// A solid swatch that replaces itself with `content` the first frame a
/// pressed probe lands on it.
///
/// The parent never learns about the swap: the placeholder's
/// [`update`](Control::update) simply returns a different control, built from
/// `content` in the environment the placeholder itself was created with.
#[derive(Clone, Debug)]
pub struct PlaceholderBlock {
    /// Requested swatch size; clamped into the environment's size range.
    pub size: Size,
    /// Swatch color.
    pub color: Color,
    /// What the placeholder becomes.
    pub content: Rc<dyn Block>,
}

impl PlaceholderBlock {
    /// Creates a placeholder for `content`.
    #[must_use]
    pub fn new(size: Size, color: Color, content: Rc<dyn Block>) -> Self {
        Self {
            size,
            color,
            content,
        }
    }
}

impl Block for PlaceholderBlock {
    fn create_control(&self, env: &ControlEnvironment) -> OwnedControl {
        env.assert_valid();
        Box::new(PlaceholderControl {
            size: env.size_range.clamp(self.size),
            color: self.color,
            content: Rc::clone(&self.content),
            env: *env,
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct PlaceholderControl {
    size: Size,
    color: Color,
    content: Rc<dyn Block>,
    env: ControlEnvironment,
}

impl Control for PlaceholderControl {
    fn size(&self) -> Size {
        self.size
    }

    fn update(self: Box<Self>, offset: Vec2, probes: &Probes, _: f64) -> OwnedControl {
        let area = Rect::from_origin_size(Point::ORIGIN, self.size);
        if probes.pressed_in(area, offset).next().is_none() {
            return self;
        }
        let content = Rc::clone(&self.content);
        let env = self.env;
        self.replace(&*content, &env)
    }

    fn render(&self, ctx: &mut dyn RenderContext) {
        ctx.clear_texture();
        ctx.set_color(self.color);
        ctx.draw_quad(Rect::from_origin_size(Point::ORIGIN, self.size));
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::color::palette::css;
    use crate::control::testing::DisposeLog;
    use crate::control::PadBlock;
    use crate::geometry::Padding;
    use crate::probe::{Probe, ProbeId, ProbeTracker};

    #[test]
    fn stays_put_until_pressed() {
        let log = DisposeLog::default();
        let block = PlaceholderBlock::new(
            Size::new(2.0, 2.0),
            css::LIME,
            Rc::new(log.block("editor", Size::new(5.0, 5.0))),
        );
        let mut tracker = ProbeTracker::new();
        let mut control = block.create_control(&ControlEnvironment::default());

        // Hovering (zero pressure) and pressing outside do nothing.
        let probes = tracker.advance(vec![
            Probe::new(ProbeId(0), Point::new(1.0, 1.0), 0.0),
            Probe::new(ProbeId(1), Point::new(3.0, 1.0), 1.0),
        ]);
        control = control.update(Vec2::ZERO, probes, 0.1);
        assert_eq!(control.size(), Size::new(2.0, 2.0));
        assert_eq!(log.created(), 0);

        let probes = tracker.advance(vec![Probe::new(ProbeId(0), Point::new(1.0, 1.0), 0.6)]);
        control = control.update(Vec2::ZERO, probes, 0.1);
        assert_eq!(control.size(), Size::new(5.0, 5.0));
        assert_eq!(log.created(), 1);
    }

    #[test]
    fn swap_is_invisible_to_the_parent() {
        let log = DisposeLog::default();
        let block = PadBlock::new(
            Padding::uniform(1.0),
            PlaceholderBlock::new(
                Size::new(1.0, 1.0),
                css::LIME,
                Rc::new(log.block("editor", Size::new(4.0, 4.0))),
            ),
        );
        let mut tracker = ProbeTracker::new();
        let mut control = block.create_control(&ControlEnvironment::default());
        assert_eq!(control.size(), Size::new(3.0, 3.0));

        // (1.5, 1.5) in root space is (0.5, 0.5) inside the padded placeholder.
        let probes = tracker.advance(vec![Probe::new(ProbeId(7), Point::new(1.5, 1.5), 1.0)]);
        control = control.update(Vec2::ZERO, probes, 0.0);
        assert_eq!(control.size(), Size::new(6.0, 6.0));

        drop(control);
        assert_eq!(log.disposed(), ["editor"]);
    }

    #[test]
    fn swap_releases_the_placeholder_once_during_the_update() {
        let log = DisposeLog::default();
        let content: Rc<dyn Block> = Rc::new(log.wrap(
            "editor",
            PadBlock::new(Padding::uniform(1.0), log.block("field", Size::new(2.0, 2.0))),
        ));
        let block = log.wrap(
            "frame",
            PlaceholderBlock::new(Size::new(2.0, 2.0), css::LIME, Rc::clone(&content)),
        );
        let mut tracker = ProbeTracker::new();
        let mut control = block.create_control(&ControlEnvironment::default());
        // The block and the live placeholder each hold the content.
        assert_eq!(Rc::strong_count(&content), 3);
        assert_eq!(log.events(), [("create", "frame")]);

        let probes = tracker.advance(vec![Probe::new(ProbeId(0), Point::new(1.0, 1.0), 1.0)]);
        control = control.update(Vec2::ZERO, probes, 0.0);
        assert_eq!(Rc::strong_count(&content), 2, "placeholder released at the swap");
        assert_eq!(
            log.events(),
            [("create", "frame"), ("create", "editor"), ("create", "field")]
        );

        // Further frames, pressed or not, touch nothing.
        for pressure in [1.0, 0.0, 1.0] {
            let probes =
                tracker.advance(vec![Probe::new(ProbeId(0), Point::new(1.0, 1.0), pressure)]);
            control = control.update(Vec2::ZERO, probes, 0.1);
        }
        assert_eq!(Rc::strong_count(&content), 2);
        assert_eq!(log.created(), 3);
        assert!(log.disposed().is_empty());

        drop(control);
        assert_eq!(log.disposed(), ["field", "editor", "frame"]);
        drop(block);
        assert_eq!(Rc::strong_count(&content), 1);
    }
}
