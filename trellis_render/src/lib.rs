// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw recording and damage tracking for trellis.
//!
//! This crate sits between a [`trellis_core`] control tree and a concrete
//! backend. It defines:
//!
//! - [`DrawList`] — a [`RenderContext`](trellis_core::render::RenderContext)
//!   that records every call as a [`DrawCommand`]
//! - [`RenderItem`] — one quad in world space, produced by flattening a
//!   draw list
//! - [`DamageRegion`] — spatial damage between two frames for partial
//!   re-rendering

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod damage;
mod draw;

pub use damage::DamageRegion;
pub use draw::{DrawCommand, DrawList, RenderItem};
