// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-side owner of a control tree.
//!
//! [`Root`] holds the topmost control, feeds it probes and time once per
//! frame, and reports what happened to a [`Tracer`]. A typical host loop:
//!
//! ```text
//! loop {
//!     root.update(dt, probes_from_platform(), &mut tracer);
//!     root.render(&mut backend, &mut tracer);
//! }
//! ```

use alloc::boxed::Box;
use core::mem;

use crate::control::{Block, Control, OwnedControl};
use crate::environment::ControlEnvironment;
use crate::geometry::{Size, SizeRange, Vec2};
use crate::probe::{Probe, ProbeTracker, Probes};
use crate::render::RenderContext;
use crate::trace::{FrameBeginEvent, FrameSummary, PhaseKind, RebuildEvent, Tracer};

/// Configuration for a [`Root`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootConfig {
    /// Environment the root block is instantiated in.
    pub environment: ControlEnvironment,
    /// Largest time step, in seconds, handed to the tree in one frame.
    ///
    /// A long stall (a debugger break, a backgrounded window) would otherwise
    /// arrive as one huge step.
    pub max_time_step: f64,
}

impl RootConfig {
    /// Default largest time step, in seconds.
    pub const DEFAULT_MAX_TIME_STEP: f64 = 0.25;

    /// A root that may grow up to `size` and no further.
    #[must_use]
    pub fn viewport(size: Size) -> Self {
        Self {
            environment: ControlEnvironment::default()
                .with_size_range(SizeRange::new(Size::ZERO, size)),
            ..Self::default()
        }
    }

    /// A root that must fill exactly `size`.
    #[must_use]
    pub fn fixed(size: Size) -> Self {
        Self {
            environment: ControlEnvironment::default().with_size_range(SizeRange::exact(size)),
            ..Self::default()
        }
    }
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            environment: ControlEnvironment::default(),
            max_time_step: Self::DEFAULT_MAX_TIME_STEP,
        }
    }
}

/// Stand-in held by a [`Root`] while its real control is being updated.
#[derive(Debug)]
struct Vacant;

impl Control for Vacant {
    fn size(&self) -> Size {
        Size::ZERO
    }

    fn update(self: Box<Self>, _: Vec2, _: &Probes, _: f64) -> OwnedControl {
        self
    }

    fn render(&self, _: &mut dyn RenderContext) {}
}

/// Owns the topmost control of a tree and drives it frame by frame.
#[derive(Debug)]
pub struct Root {
    control: OwnedControl,
    tracker: ProbeTracker,
    config: RootConfig,
}

impl Root {
    /// Instantiates `block` under `config`.
    ///
    /// # Panics
    ///
    /// Panics if the configured environment has an empty size range.
    #[must_use]
    pub fn new(block: &dyn Block, config: RootConfig) -> Self {
        config.environment.assert_valid();
        Self {
            control: block.create_control(&config.environment),
            tracker: ProbeTracker::new(),
            config,
        }
    }

    /// Current root control size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.control.size()
    }

    /// The probes from the most recent [`update`](Self::update).
    #[must_use]
    pub fn probes(&self) -> &Probes {
        self.tracker.probes()
    }

    /// Index of the most recently updated frame; zero before the first.
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.tracker.probes().frame_index()
    }

    /// The configuration this root was built with.
    #[must_use]
    pub fn config(&self) -> &RootConfig {
        &self.config
    }

    /// Runs one frame's update pass.
    ///
    /// `elapsed` is clamped to `[0, max_time_step]`; a non-finite value is
    /// treated as zero.
    pub fn update(
        &mut self,
        elapsed: f64,
        probes: impl IntoIterator<Item = Probe>,
        tracer: &mut Tracer<'_>,
    ) {
        let time = if elapsed.is_finite() {
            elapsed.clamp(0.0, self.config.max_time_step)
        } else {
            0.0
        };
        let probes = self.tracker.advance(probes);
        let frame_index = probes.frame_index();
        tracer.frame_begin(&FrameBeginEvent {
            frame_index,
            elapsed: time,
            probe_count: probes.len(),
        });

        let control = mem::replace(&mut self.control, Box::new(Vacant));
        self.control = tracer.phase(frame_index, PhaseKind::Update, || {
            control.update(Vec2::ZERO, probes, time)
        });

        tracer.frame_summary(&FrameSummary {
            frame_index,
            elapsed: time,
            root_size: self.control.size(),
            probe_count: probes.len(),
        });
    }

    /// Runs one frame's render pass.
    pub fn render(&self, ctx: &mut dyn RenderContext, tracer: &mut Tracer<'_>) {
        tracer.phase(self.frame_index(), PhaseKind::Render, || {
            self.control.render(ctx);
        });
    }

    /// Replaces the tree with one built from `block` in the configured
    /// environment.
    pub fn rebuild(&mut self, block: &dyn Block, tracer: &mut Tracer<'_>) {
        let control = mem::replace(&mut self.control, Box::new(Vacant));
        self.control = control.replace(block, &self.config.environment);
        tracer.rebuild(&RebuildEvent {
            frame_index: self.frame_index(),
            size: self.control.size(),
        });
    }

    /// Switches to a new environment and rebuilds the tree from `block` in it.
    ///
    /// # Panics
    ///
    /// Panics if `environment` has an empty size range.
    pub fn set_environment(
        &mut self,
        environment: ControlEnvironment,
        block: &dyn Block,
        tracer: &mut Tracer<'_>,
    ) {
        environment.assert_valid();
        self.config.environment = environment;
        self.rebuild(block, tracer);
    }
}
