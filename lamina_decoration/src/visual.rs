// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sub-style records composing a decoration.
//!
//! Every record here is a partial: all fields are optional so that a
//! variant declared for a narrow state combination can override a single
//! field and inherit the rest through [`Merge`].

use alloc::vec::Vec;

use kurbo::Insets;
use peniko::Color;

use crate::merge::Merge;

/// The geometric form of a decoration's outline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeForm {
    /// A plain rectangle.
    Rect,
    /// A rounded rectangle; the radius comes from [`ShapeStyle::radius`].
    RoundedRect,
}

/// Outline shape of a decoration.
///
/// The shape bounds every other visual: backgrounds fill it, borders
/// stroke it, and it doubles as the component's clip/hit-test shape.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ShapeStyle {
    /// Geometric form. Unset inherits; the resolved default is a rect.
    pub form: Option<ShapeForm>,
    /// Corner radius for [`ShapeForm::RoundedRect`].
    pub radius: Option<f64>,
}

impl Merge for ShapeStyle {
    fn merge(&mut self, other: &Self) {
        self.form.merge(&other.form);
        self.radius.merge(&other.radius);
    }
}

/// Border stroked along the decoration shape.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BorderStyle {
    /// Stroke color.
    pub color: Option<Color>,
    /// Stroke width in logical pixels.
    pub width: Option<f64>,
    /// Extra opacity multiplier in `[0, 1]`.
    pub opacity: Option<f32>,
}

impl BorderStyle {
    /// Returns the resolved stroke width (zero when unset).
    #[must_use]
    pub fn resolved_width(&self) -> f64 {
        self.width.unwrap_or(0.0)
    }
}

impl Merge for BorderStyle {
    fn merge(&mut self, other: &Self) {
        self.color.merge(&other.color);
        self.width.merge(&other.width);
        self.opacity.merge(&other.opacity);
    }
}

/// One stop of a linear gradient.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradientStop {
    /// Normalized offset in `[0, 1]`.
    pub offset: f32,
    /// Stop color.
    pub color: Color,
}

/// How a background fills the decoration shape.
#[derive(Clone, Debug, PartialEq)]
pub enum BrushSpec {
    /// A solid color fill.
    Solid(Color),
    /// A linear gradient along the given angle (radians, 0 = left→right).
    Linear {
        /// Gradient direction in radians.
        angle: f64,
        /// Gradient stops in ascending offset order.
        stops: Vec<GradientStop>,
    },
}

/// One background layer of a decoration.
///
/// Decorations may stack several backgrounds; they paint in declaration
/// order, first at the bottom.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackgroundStyle {
    /// Fill brush.
    pub brush: Option<BrushSpec>,
    /// Extra opacity multiplier in `[0, 1]`.
    pub opacity: Option<f32>,
}

impl Merge for BackgroundStyle {
    fn merge(&mut self, other: &Self) {
        self.brush.merge(&other.brush);
        self.opacity.merge(&other.opacity);
    }
}

/// A shadow hugging the decoration shape.
///
/// Whether the shadow is outer or inner is determined by which slot of
/// the decoration it occupies, so shadows of different kinds can never be
/// merged into one another.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ShadowStyle {
    /// Shadow color.
    pub color: Option<Color>,
    /// Shadow spread in logical pixels.
    pub width: Option<f64>,
    /// Extra opacity multiplier in `[0, 1]`.
    pub opacity: Option<f32>,
}

impl ShadowStyle {
    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.color.is_none() && self.width.is_none() && self.opacity.is_none()
    }
}

impl Merge for ShadowStyle {
    fn merge(&mut self, other: &Self) {
        self.color.merge(&other.color);
        self.width.merge(&other.width);
        self.opacity.merge(&other.opacity);
    }
}

/// Content placement relative to the decoration.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContentStyle {
    /// Space between the component bounds and the decoration shape.
    pub margin: Option<Insets>,
    /// Space between the decoration shape and the content.
    pub padding: Option<Insets>,
}

impl Merge for ContentStyle {
    fn merge(&mut self, other: &Self) {
        self.margin.merge(&other.margin);
        self.padding.merge(&other.padding);
    }
}
