// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Top-down layout constraints.
//!
//! A [`ControlEnvironment`] is handed to [`Block::create_control`] and tells
//! the new control two things: how each surrounding edge is bordered, and
//! which sizes it may take. Combinators derive a narrower environment for
//! each child; constraints never flow back up.
//!
//! [`Block::create_control`]: crate::control::Block::create_control

use crate::color::Color;
use crate::geometry::{Compass, Padding, SizeRange, Vec2};

/// How one edge of a control is bordered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BorderStyle {
    /// No border; an adjacent bordered control draws nothing on this edge.
    #[default]
    None,
    /// A solid line.
    Line {
        /// Thickness in layout units.
        weight: f64,
        /// Line color.
        color: Color,
    },
}

impl BorderStyle {
    /// Thickness this style occupies, zero for [`BorderStyle::None`].
    #[must_use]
    pub fn weight(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Line { weight, .. } => weight,
        }
    }
}

/// Border style for each edge.
pub type Borders = Compass<BorderStyle>;

/// Immutable constraint bundle passed down when instantiating controls.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlEnvironment {
    /// Border style per edge.
    pub borders: Borders,
    /// Sizes the resulting control may take.
    pub size_range: SizeRange,
}

impl ControlEnvironment {
    /// Creates an environment.
    #[must_use]
    pub fn new(borders: Borders, size_range: SizeRange) -> Self {
        Self {
            borders,
            size_range,
        }
    }

    /// Same borders, different size range.
    #[must_use]
    pub fn with_size_range(self, size_range: SizeRange) -> Self {
        Self { size_range, ..self }
    }

    /// Same size range, different borders.
    #[must_use]
    pub fn with_borders(self, borders: Borders) -> Self {
        Self { borders, ..self }
    }

    /// Environment for content inset by `padding`.
    ///
    /// The size range loses the total inset on each axis. An edge with zero
    /// inset has nothing to separate, so its border is suppressed.
    #[must_use]
    pub fn padded(&self, padding: &Padding) -> Self {
        Self {
            borders: self.borders.zip_with(*padding, |style, inset| {
                if inset == 0.0 {
                    BorderStyle::None
                } else {
                    style
                }
            }),
            size_range: self.size_range.shrink(padding.total()),
        }
    }

    /// Environment for the content of a bordered combinator that draws
    /// `self.borders` itself.
    ///
    /// The size range loses the drawn line weights; the child sees no borders.
    #[must_use]
    pub fn bordered(&self) -> Self {
        let weights = self.borders.map(BorderStyle::weight);
        Self {
            borders: Borders::default(),
            size_range: self
                .size_range
                .shrink(Vec2::new(weights.horizontal(), weights.vertical())),
        }
    }

    /// Checks the contract every control constructor relies on.
    ///
    /// # Panics
    ///
    /// Panics if the size range admits no size.
    #[track_caller]
    pub fn assert_valid(&self) {
        assert!(
            !self.size_range.is_empty(),
            "empty size range: {:?}",
            self.size_range
        );
    }
}
