// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Block/Control protocol and the built-in combinators.
//!
//! A [`Block`] is an immutable layout descriptor. Given a
//! [`ControlEnvironment`] it produces a [`Control`]: a live, mutable object
//! that is updated and rendered once per frame.
//!
//! # Ownership
//!
//! A control has exactly one owner at all times: its parent control or the
//! host's [`Root`](crate::root::Root). The protocol is expressed with moves:
//!
//! - [`Control::update`] consumes the control and returns the one that now
//!   represents the subtree. That is either the same control, mutated in
//!   place, or a brand-new control; whichever is not returned has already
//!   been dropped.
//! - [`Control::replace`] consumes the control and returns one built from a
//!   new block. The default drops the old control before building the new
//!   one; an override may instead reuse the old control when the block is
//!   compatible.
//!
//! Disposal is [`Drop`]. Dropping a control drops every control it owns,
//! exactly once, because each child lives in exactly one owning field.
//!
//! # Frame order
//!
//! The host runs `update` on the root for every frame, keeps the returned
//! control, then calls [`Control::render`]. Rendering only reads state.

mod background;
mod border;
mod pad;
mod placeholder;
mod space;

#[cfg(test)]
pub(crate) mod testing;

use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::environment::ControlEnvironment;
use crate::geometry::{Size, Vec2};
use crate::probe::Probes;
use crate::render::RenderContext;

pub use background::BackgroundBlock;
pub use border::BorderBlock;
pub use pad::PadBlock;
pub use placeholder::PlaceholderBlock;
pub use space::SpaceBlock;

/// The sole live reference to a control.
pub type OwnedControl = Box<dyn Control>;

/// An immutable layout descriptor.
///
/// A block may be instantiated any number of times; each call produces an
/// independent control tree.
pub trait Block: fmt::Debug {
    /// Builds a fresh control honoring `env`.
    ///
    /// An empty size range is a caller contract violation. The built-in
    /// blocks panic on it (see [`ControlEnvironment::assert_valid`]).
    fn create_control(&self, env: &ControlEnvironment) -> OwnedControl;

    /// The concrete block, for [`Control::replace`] overrides that reuse a
    /// control when handed a compatible block.
    ///
    /// Implementations return `self`. Wrappers forward to what they wrap.
    fn as_any(&self) -> &dyn Any;
}

/// A live, stateful, renderable instantiation of a [`Block`].
pub trait Control: fmt::Debug {
    /// Current footprint. Stays within the size range most recently supplied.
    fn size(&self) -> Size;

    /// Advances by `time` seconds (never negative) and returns the control
    /// that now represents this subtree.
    ///
    /// `offset` is this control's origin in root coordinates; a probe's local
    /// position is `probe.position - offset`.
    fn update(self: Box<Self>, offset: Vec2, probes: &Probes, time: f64) -> OwnedControl;

    /// Draws the current state into `ctx`.
    ///
    /// Must leave `ctx`'s translation stack as it found it, and must not
    /// assume any color or texture state it did not set itself.
    fn render(&self, ctx: &mut dyn RenderContext);

    /// Replaces this control with one built from `block` in `env`.
    ///
    /// The default disposes `self` first, then instantiates `block`, so the
    /// result never aliases the old control.
    ///
    /// An override may keep `self` when [`Block::as_any`] reveals a block it
    /// can adopt. It must then bring its state fully in line with `block`
    /// and `env` before returning, and every control it stops owning must
    /// be dropped.
    fn replace(self: Box<Self>, block: &dyn Block, env: &ControlEnvironment) -> OwnedControl {
        drop(self);
        block.create_control(env)
    }
}

impl Block for Box<dyn Block> {
    fn create_control(&self, env: &ControlEnvironment) -> OwnedControl {
        (**self).create_control(env)
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }
}
