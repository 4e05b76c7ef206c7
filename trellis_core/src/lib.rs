// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for retained-mode UI composition.
//!
//! `trellis_core` turns immutable layout descriptors (blocks) into live,
//! stateful, renderable objects (controls) that are updated and drawn once
//! per frame. It is `no_std` compatible (with `alloc`); geometry comes from
//! [`kurbo`].
//!
//! # Architecture
//!
//! Constraints flow down when a tree is built; time and input flow down
//! every frame; sizes flow back up.
//!
//! ```text
//!   Block ──create_control(env)──► Control
//!     │                              │
//!     │ env.padded() / bordered()    │ update(offset, probes, time)
//!     ▼                              ▼  returns self or a replacement
//!   child Block ──────────────► child Control
//!                                    │
//!                                    │ render(ctx)
//!                                    ▼
//!                              RenderContext (push/pop translation,
//!                                             set_color, draw_quad)
//! ```
//!
//! **[`control`]** — The [`Block`](control::Block)/[`Control`](control::Control)
//! protocol and the built-in combinators. Controls are owned by exactly one
//! parent; disposal is `Drop`.
//!
//! **[`environment`]** — [`ControlEnvironment`](environment::ControlEnvironment):
//! size range and per-edge border styles, narrowed for each child.
//!
//! **[`geometry`]** — Per-edge values, padding, and size ranges on top of
//! `kurbo` points, vectors, sizes, and rectangles.
//!
//! **[`probe`]** — Pointer-like actuators with pressure and identity that
//! survives across frames.
//!
//! **[`render`]** — The [`RenderContext`](render::RenderContext) trait
//! backends implement, and a scoped translation guard.
//!
//! **[`figure`]** — Immutable colored content on the plane, composed by
//! translation, superimposition, and disjoint combination.
//!
//! **[`scoped`]** — [`Scoped`](scoped::Scoped), a value paired with its
//! release action, run exactly once.
//!
//! **[`root`]** — [`Root`](root::Root), the host-side owner that drives a
//! tree frame by frame.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! frame-loop instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod color;
pub mod control;
pub mod environment;
pub mod figure;
pub mod geometry;
pub mod probe;
pub mod render;
pub mod root;
pub mod scoped;
pub mod trace;
