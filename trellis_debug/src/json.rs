// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON event export.
//!
//! [`JsonSink`] implements [`TraceSink`] by turning every event into a
//! [`serde_json::Value`] object. [`JsonSink::write_to`] writes them as one
//! JSON array, suitable for loading into a notebook or diffing between runs.
//!
//! Every object carries an `"event"` name and a `"frame"` index; the other
//! fields depend on the event.

use std::io::{self, Write};

use serde_json::{Value, json};

use trellis_core::geometry::Size;
use trellis_core::trace::{
    FrameBeginEvent, FrameSummary, PhaseBeginEvent, PhaseEndEvent, RebuildEvent, TraceSink,
};

/// Collects trace events as JSON objects.
#[derive(Clone, Debug, Default)]
pub struct JsonSink {
    events: Vec<Value>,
}

impl JsonSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events collected so far, in arrival order.
    #[must_use]
    pub fn events(&self) -> &[Value] {
        &self.events
    }

    /// Discards all collected events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Writes the collected events as a pretty-printed JSON array.
    pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &self.events)?;
        writeln!(writer)
    }
}

fn size(s: Size) -> Value {
    json!({ "width": s.width, "height": s.height })
}

impl TraceSink for JsonSink {
    fn on_frame_begin(&mut self, e: &FrameBeginEvent) {
        self.events.push(json!({
            "event": "frame_begin",
            "frame": e.frame_index,
            "elapsed": e.elapsed,
            "probes": e.probe_count,
        }));
    }

    fn on_phase_begin(&mut self, e: &PhaseBeginEvent) {
        self.events.push(json!({
            "event": "phase_begin",
            "frame": e.frame_index,
            "phase": e.phase.name(),
        }));
    }

    fn on_phase_end(&mut self, e: &PhaseEndEvent) {
        self.events.push(json!({
            "event": "phase_end",
            "frame": e.frame_index,
            "phase": e.phase.name(),
        }));
    }

    fn on_rebuild(&mut self, e: &RebuildEvent) {
        self.events.push(json!({
            "event": "rebuild",
            "frame": e.frame_index,
            "size": size(e.size),
        }));
    }

    fn on_frame_summary(&mut self, s: &FrameSummary) {
        self.events.push(json!({
            "event": "frame_summary",
            "frame": s.frame_index,
            "elapsed": s.elapsed,
            "size": size(s.root_size),
            "probes": s.probe_count,
        }));
    }
}
