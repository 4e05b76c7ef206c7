// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test doubles shared by the control tests.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::any::Any;
use core::cell::RefCell;

use super::{Block, Control, OwnedControl};
use crate::color::Color;
use crate::environment::ControlEnvironment;
use crate::geometry::{Rect, Size, Vec2};
use crate::probe::Probes;
use crate::render::RenderContext;
use crate::scoped::Scoped;

/// Records control creation and disposal in order.
#[derive(Clone, Debug, Default)]
pub(crate) struct DisposeLog {
    events: Rc<RefCell<Vec<(&'static str, &'static str)>>>,
}

impl DisposeLog {
    /// A leaf block whose controls report to this log.
    pub(crate) fn block(&self, name: &'static str, size: Size) -> TrackedBlock {
        TrackedBlock {
            log: self.clone(),
            name,
            size,
        }
    }

    /// A pass-through block around `inner` whose controls report to this
    /// log.
    pub(crate) fn wrap(&self, name: &'static str, inner: impl Block + 'static) -> TrackedWrap {
        TrackedWrap {
            log: self.clone(),
            name,
            inner: Box::new(inner),
        }
    }

    pub(crate) fn events(&self) -> Vec<(&'static str, &'static str)> {
        self.events.borrow().clone()
    }

    pub(crate) fn created(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|(kind, _)| *kind == "create")
            .count()
    }

    pub(crate) fn disposed(&self) -> Vec<&'static str> {
        self.events
            .borrow()
            .iter()
            .filter(|(kind, _)| *kind == "dispose")
            .map(|(_, name)| *name)
            .collect()
    }

    fn push(&self, kind: &'static str, name: &'static str) {
        self.events.borrow_mut().push((kind, name));
    }

    /// Logs a creation and returns a guard that logs the disposal.
    fn guard(&self, name: &'static str) -> DisposeGuard {
        self.push("create", name);
        let events = Rc::clone(&self.events);
        let release: Box<dyn FnOnce(&'static str)> =
            Box::new(move |name| events.borrow_mut().push(("dispose", name)));
        Scoped::new(name, release)
    }
}

type DisposeGuard = Scoped<&'static str, Box<dyn FnOnce(&'static str)>>;

/// Fixed-size leaf whose disposal is observable.
///
/// Its control adopts a replacement block with the same name in place and
/// logs `("reuse", name)` instead of a dispose/create pair.
#[derive(Debug)]
pub(crate) struct TrackedBlock {
    log: DisposeLog,
    name: &'static str,
    size: Size,
}

impl Block for TrackedBlock {
    fn create_control(&self, env: &ControlEnvironment) -> OwnedControl {
        env.assert_valid();
        Box::new(TrackedControl {
            name: self.name,
            size: env.size_range.clamp(self.size),
            _guard: self.log.guard(self.name),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct TrackedControl {
    name: &'static str,
    size: Size,
    _guard: DisposeGuard,
}

impl Control for TrackedControl {
    fn size(&self) -> Size {
        self.size
    }

    fn update(self: Box<Self>, _: Vec2, _: &Probes, _: f64) -> OwnedControl {
        self
    }

    fn render(&self, ctx: &mut dyn RenderContext) {
        ctx.set_color(Color::WHITE);
        ctx.draw_quad(Rect::from_origin_size((0.0, 0.0), self.size));
    }

    fn replace(mut self: Box<Self>, block: &dyn Block, env: &ControlEnvironment) -> OwnedControl {
        match block.as_any().downcast_ref::<TrackedBlock>() {
            Some(next) if next.name == self.name => {
                env.assert_valid();
                next.log.push("reuse", next.name);
                self.size = env.size_range.clamp(next.size);
                self
            }
            _ => {
                drop(self);
                block.create_control(env)
            }
        }
    }
}

/// Observable pass-through around another block.
#[derive(Debug)]
pub(crate) struct TrackedWrap {
    log: DisposeLog,
    name: &'static str,
    inner: Box<dyn Block>,
}

impl Block for TrackedWrap {
    fn create_control(&self, env: &ControlEnvironment) -> OwnedControl {
        env.assert_valid();
        let guard = self.log.guard(self.name);
        Box::new(TrackedWrapControl {
            inner: self.inner.create_control(env),
            _guard: guard,
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// Field order makes children report their disposal before the wrapper.
#[derive(Debug)]
struct TrackedWrapControl {
    inner: OwnedControl,
    _guard: DisposeGuard,
}

impl Control for TrackedWrapControl {
    fn size(&self) -> Size {
        self.inner.size()
    }

    fn update(mut self: Box<Self>, offset: Vec2, probes: &Probes, time: f64) -> OwnedControl {
        self.inner = self.inner.update(offset, probes, time);
        self
    }

    fn render(&self, ctx: &mut dyn RenderContext) {
        self.inner.render(ctx);
    }
}

/// One call against a [`RenderContext`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Op {
    SetColor(Color),
    ClearTexture,
    DrawQuad(Rect),
    Push(Vec2),
    Pop,
}

/// A render context that only remembers what it was told.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) ops: Vec<Op>,
}

impl Recorder {
    /// Net translation depth; zero when every push was popped.
    pub(crate) fn depth(&self) -> i32 {
        self.ops.iter().fold(0, |d, op| match op {
            Op::Push(_) => d + 1,
            Op::Pop => d - 1,
            _ => d,
        })
    }
}

impl RenderContext for Recorder {
    fn set_color(&mut self, color: Color) {
        self.ops.push(Op::SetColor(color));
    }

    fn clear_texture(&mut self) {
        self.ops.push(Op::ClearTexture);
    }

    fn draw_quad(&mut self, rect: Rect) {
        self.ops.push(Op::DrawQuad(rect));
    }

    fn push_translation(&mut self, offset: Vec2) {
        self.ops.push(Op::Push(offset));
    }

    fn pop_translation(&mut self) {
        self.ops.push(Op::Pop);
    }
}

pub(crate) fn approx_size(a: Size, b: Size) -> bool {
    (a.width - b.width).abs() < 1e-9 && (a.height - b.height).abs() < 1e-9
}
