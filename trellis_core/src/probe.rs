// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positional input: probes and their frame-to-frame identity.
//!
//! A [`Probe`] is a point-like actuator under user control (a mouse pointer,
//! a finger, a stylus tip). Each frame the host supplies the current set of
//! probes; a control decides whether it is being interacted with by testing
//! `area.contains(probe.position - offset) && probe.pressed()`.
//!
//! Identity across frames is a stable [`ProbeId`]. [`ProbeTracker`] keeps
//! the previous frame's `id → Probe` table so a control that wants history
//! (press edges, drag movement) can look it up through [`Probes`] without
//! any probe holding a reference to its own past.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use crate::geometry::{Point, Rect, Vec2};

/// Stable identity of one actuator across frames.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProbeId(pub u32);

impl fmt::Debug for ProbeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProbeId({})", self.0)
    }
}

/// One actuator's state during one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Probe {
    /// Which actuator this is.
    pub id: ProbeId,
    /// Position in root coordinates.
    pub position: Point,
    /// How hard the actuator is pressing, in `[0, 1]`. Zero cannot interact.
    pub pressure: f64,
}

impl Probe {
    /// Creates a probe, clamping `pressure` to `[0, 1]`.
    #[must_use]
    pub fn new(id: ProbeId, position: Point, pressure: f64) -> Self {
        let pressure = if pressure >= 0.0 {
            pressure.min(1.0)
        } else {
            0.0
        };
        Self {
            id,
            position,
            pressure,
        }
    }

    /// Returns `true` if the probe can interact this frame.
    #[inline]
    #[must_use]
    pub fn pressed(&self) -> bool {
        self.pressure > 0.0
    }

    /// Position relative to a control whose origin sits at `offset`.
    #[inline]
    #[must_use]
    pub fn local(&self, offset: Vec2) -> Point {
        self.position - offset
    }
}

/// The probes active during one frame, plus what they looked like one frame
/// earlier.
#[derive(Clone, Debug, Default)]
pub struct Probes {
    frame_index: u64,
    current: Vec<Probe>,
    previous: BTreeMap<ProbeId, Probe>,
}

impl Probes {
    /// A frame with no probes and no history.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Index of the frame these probes belong to.
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Iterates over this frame's probes, in the order the host supplied them.
    pub fn iter(&self) -> core::slice::Iter<'_, Probe> {
        self.current.iter()
    }

    /// Number of probes this frame.
    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// Returns `true` if no probe is active this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// This frame's state of `id`, if present.
    #[must_use]
    pub fn get(&self, id: ProbeId) -> Option<&Probe> {
        self.current.iter().rev().find(|p| p.id == id)
    }

    /// The state of `id` one frame earlier, or `None` for a brand-new actuator.
    #[must_use]
    pub fn previous(&self, id: ProbeId) -> Option<&Probe> {
        self.previous.get(&id)
    }

    /// How far `id` moved since the previous frame.
    ///
    /// `None` if the probe is absent now or was absent then.
    #[must_use]
    pub fn movement(&self, id: ProbeId) -> Option<Vec2> {
        let now = self.get(id)?;
        let before = self.previous(id)?;
        Some(now.position - before.position)
    }

    /// Returns `true` if `id` is pressed now but was not pressed (or absent)
    /// one frame earlier.
    #[must_use]
    pub fn began(&self, id: ProbeId) -> bool {
        self.get(id).is_some_and(Probe::pressed) && !self.previous(id).is_some_and(Probe::pressed)
    }

    /// Returns `true` if `id` was pressed one frame earlier and is not
    /// pressed (or absent) now.
    #[must_use]
    pub fn released(&self, id: ProbeId) -> bool {
        self.previous(id).is_some_and(Probe::pressed) && !self.get(id).is_some_and(Probe::pressed)
    }

    /// Pressed probes whose local position (relative to `offset`) lies in
    /// `area`.
    pub fn pressed_in(&self, area: Rect, offset: Vec2) -> impl Iterator<Item = &Probe> + '_ {
        self.current
            .iter()
            .filter(move |p| p.pressed() && area.contains(p.local(offset)))
    }
}

impl<'a> IntoIterator for &'a Probes {
    type Item = &'a Probe;
    type IntoIter = core::slice::Iter<'a, Probe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Host-side bookkeeping that turns a raw per-frame probe list into
/// [`Probes`] with history.
#[derive(Clone, Debug, Default)]
pub struct ProbeTracker {
    probes: Probes,
}

impl ProbeTracker {
    /// Creates a tracker with no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new frame with `current` as the active probes.
    ///
    /// The outgoing frame's probes become the history table. If an id appears
    /// more than once in one frame, the last occurrence is the one remembered.
    pub fn advance(&mut self, current: impl IntoIterator<Item = Probe>) -> &Probes {
        let outgoing = core::mem::take(&mut self.probes.current);
        self.probes.previous.clear();
        self.probes
            .previous
            .extend(outgoing.into_iter().map(|p| (p.id, p)));
        self.probes.current.extend(current);
        self.probes.frame_index += 1;
        &self.probes
    }

    /// The most recent frame's probes.
    #[must_use]
    pub fn probes(&self) -> &Probes {
        &self.probes
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn probe(id: u32, x: f64, y: f64, pressure: f64) -> Probe {
        Probe::new(ProbeId(id), Point::new(x, y), pressure)
    }

    #[test]
    fn pressure_is_clamped() {
        assert_eq!(probe(0, 0.0, 0.0, 3.0).pressure, 1.0);
        assert_eq!(probe(0, 0.0, 0.0, -1.0).pressure, 0.0);
        assert!(!probe(0, 0.0, 0.0, 0.0).pressed());
    }

    #[test]
    fn tracker_keeps_one_frame_of_history() {
        let mut tracker = ProbeTracker::new();
        tracker.advance(vec![probe(1, 0.0, 0.0, 1.0)]);
        let probes = tracker.advance(vec![probe(1, 3.0, 4.0, 1.0), probe(2, 0.0, 0.0, 0.5)]);

        assert_eq!(probes.frame_index(), 2);
        assert_eq!(probes.len(), 2);
        assert_eq!(probes.movement(ProbeId(1)), Some(Vec2::new(3.0, 4.0)));
        assert!(probes.previous(ProbeId(2)).is_none(), "new actuator has no past");
        assert!(probes.movement(ProbeId(2)).is_none());

        let probes = tracker.advance(vec![]);
        assert!(probes.is_empty());
        assert_eq!(
            probes.previous(ProbeId(1)).map(|p| p.position),
            Some(Point::new(3.0, 4.0))
        );
    }

    #[test]
    fn history_does_not_grow() {
        let mut tracker = ProbeTracker::new();
        tracker.advance(vec![probe(1, 0.0, 0.0, 1.0)]);
        tracker.advance(vec![probe(2, 0.0, 0.0, 1.0)]);
        let probes = tracker.advance(vec![probe(3, 0.0, 0.0, 1.0)]);
        assert!(probes.previous(ProbeId(1)).is_none());
        assert!(probes.previous(ProbeId(2)).is_some());
    }

    #[test]
    fn press_edges() {
        let mut tracker = ProbeTracker::new();
        tracker.advance(vec![probe(1, 0.0, 0.0, 0.0)]);
        let probes = tracker.advance(vec![probe(1, 0.0, 0.0, 0.7)]);
        assert!(probes.began(ProbeId(1)));
        assert!(!probes.released(ProbeId(1)));

        let probes = tracker.advance(vec![probe(1, 0.0, 0.0, 0.7)]);
        assert!(!probes.began(ProbeId(1)), "held, not a new press");

        let probes = tracker.advance(vec![]);
        assert!(probes.released(ProbeId(1)));
    }

    #[test]
    fn pressed_in_uses_local_coordinates() {
        let mut tracker = ProbeTracker::new();
        let probes = tracker.advance(vec![
            probe(1, 10.5, 10.5, 1.0),
            probe(2, 0.5, 0.5, 1.0),
            probe(3, 10.5, 10.5, 0.0),
        ]);
        let area = Rect::new(0.0, 0.0, 1.0, 1.0);
        let hits: Vec<_> = probes.pressed_in(area, Vec2::new(10.0, 10.0)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, ProbeId(1));
    }

    #[test]
    fn duplicate_ids_remember_last() {
        let mut tracker = ProbeTracker::new();
        tracker.advance(vec![probe(1, 0.0, 0.0, 1.0), probe(1, 5.0, 0.0, 1.0)]);
        let probes = tracker.advance(vec![]);
        assert_eq!(
            probes.previous(ProbeId(1)).map(|p| p.position.x),
            Some(5.0)
        );
    }
}
