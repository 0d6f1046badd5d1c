// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::BezPath;
use peniko::{Brush, Color};

/// Host drawing seam.
///
/// The driver emits fills and strokes against this trait; the host
/// adapter maps them onto its renderer. Clipping and transform state
/// are the host's business — paths arrive in component coordinates.
pub trait Surface {
    /// Fills `shape` with `brush`.
    fn fill(&mut self, shape: &BezPath, brush: &Brush);

    /// Strokes `shape` with `brush` at the given line width.
    fn stroke(&mut self, shape: &BezPath, brush: &Brush, width: f64);
}

/// Per-component paint context supplied by the host each pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentCtx {
    /// Whether the component promises fully painted bounds.
    pub opaque: bool,
    /// The component's plain background color, used as the opaque
    /// fallback when no decoration is visible.
    pub background: Color,
}

impl Default for ComponentCtx {
    fn default() -> Self {
        Self {
            opaque: false,
            background: Color::WHITE,
        }
    }
}
