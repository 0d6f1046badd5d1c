// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{BezPath, Insets, Rect, Shape, Size, Vec2};
use peniko::{Brush, Color, ColorStop, Extend, Gradient, GradientKind, LinearGradientPosition};

use lamina_decoration::{BrushSpec, Decoration, ShadowStyle, ShapeForm, ShapeStyle};

use crate::surface::{ComponentCtx, Surface};

/// Flattening tolerance for shape paths.
const TOLERANCE: f64 = 0.1;

/// Paints one component for this pass.
///
/// With no visible decoration, an opaque component gets its plain
/// background color across the full bounds — opaque components never
/// leave undefined pixels. A visible decoration paints inside the
/// bounds deflated by its margin, layered as outer shadow, then
/// backgrounds in declaration order, then inner shadow, then border.
///
/// Shadows are emitted as strokes along the decoration shape; the host
/// surface decides how softly to render them.
pub fn paint(
    surface: &mut dyn Surface,
    bounds: Rect,
    ctx: &ComponentCtx,
    decoration: Option<&Decoration>,
) {
    let Some(decoration) = decoration.filter(|d| d.visible()) else {
        if ctx.opaque {
            surface.fill(&bounds.to_path(TOLERANCE), &Brush::Solid(ctx.background));
        }
        return;
    };

    let margin = decoration.content().margin.unwrap_or(Insets::ZERO);
    let inner = bounds - margin;
    let shape = shape_path(inner, decoration.shape());
    let alpha = decoration.opacity();

    paint_shadow(surface, &shape, decoration.outer_shadow(), alpha);
    for background in decoration.backgrounds() {
        if let Some(spec) = &background.brush {
            let layer_alpha = alpha * background.opacity.unwrap_or(1.0);
            surface.fill(&shape, &to_brush(spec, inner, layer_alpha));
        }
    }
    paint_shadow(surface, &shape, decoration.inner_shadow(), alpha);

    let border = decoration.border();
    if let Some(color) = border.color {
        let width = border.resolved_width();
        if width > 0.0 {
            let border_alpha = alpha * border.opacity.unwrap_or(1.0);
            surface.stroke(&shape, &Brush::Solid(color.multiply_alpha(border_alpha)), width);
        }
    }
}

/// Insets claimed by the resolved decoration: margin plus border width
/// plus padding per edge. Zero when no decoration is visible.
#[must_use]
pub fn border_insets(decoration: Option<&Decoration>) -> Insets {
    let Some(decoration) = decoration.filter(|d| d.visible()) else {
        return Insets::ZERO;
    };
    let content = decoration.content();
    let margin = content.margin.unwrap_or(Insets::ZERO);
    let padding = content.padding.unwrap_or(Insets::ZERO);
    let border = if decoration.border().color.is_some() {
        decoration.border().resolved_width()
    } else {
        0.0
    };
    Insets::new(
        margin.x0 + border + padding.x0,
        margin.y0 + border + padding.y0,
        margin.x1 + border + padding.x1,
        margin.y1 + border + padding.y1,
    )
}

/// The component's clip/hit-test shape within `bounds`.
///
/// Falls back to the raw bounds rectangle when no decoration is
/// visible.
#[must_use]
pub fn provide_shape(bounds: Rect, decoration: Option<&Decoration>) -> BezPath {
    match decoration.filter(|d| d.visible()) {
        None => bounds.to_path(TOLERANCE),
        Some(decoration) => {
            let margin = decoration.content().margin.unwrap_or(Insets::ZERO);
            shape_path(bounds - margin, decoration.shape())
        }
    }
}

/// The preferred size under the resolved decoration: the component's
/// own size, enlarged to any fixed decoration size.
#[must_use]
pub fn preferred_size(decoration: Option<&Decoration>, component: Size) -> Size {
    match decoration.and_then(Decoration::size) {
        None => component,
        Some(fixed) => Size::new(
            fixed.width.max(component.width),
            fixed.height.max(component.height),
        ),
    }
}

fn shape_path(rect: Rect, shape: &ShapeStyle) -> BezPath {
    match shape.form.unwrap_or(ShapeForm::Rect) {
        ShapeForm::Rect => rect.to_path(TOLERANCE),
        ShapeForm::RoundedRect => rect
            .to_rounded_rect(shape.radius.unwrap_or(0.0))
            .to_path(TOLERANCE),
    }
}

fn paint_shadow(surface: &mut dyn Surface, shape: &BezPath, shadow: &ShadowStyle, alpha: f32) {
    if shadow.is_unset() {
        return;
    }
    let width = shadow.width.unwrap_or(0.0);
    if width <= 0.0 {
        return;
    }
    let color = shadow.color.unwrap_or(Color::BLACK);
    let shadow_alpha = alpha * shadow.opacity.unwrap_or(1.0);
    surface.stroke(shape, &Brush::Solid(color.multiply_alpha(shadow_alpha)), width);
}

/// Realizes a brush spec against the decoration's rectangle.
fn to_brush(spec: &BrushSpec, rect: Rect, alpha: f32) -> Brush {
    match spec {
        BrushSpec::Solid(color) => Brush::Solid(color.multiply_alpha(alpha)),
        BrushSpec::Linear { angle, stops } => {
            // The gradient axis runs through the rect center along the
            // given angle, long enough to span the whole rect.
            let center = rect.center();
            let dir = Vec2::from_angle(*angle);
            let half = (rect.width() * dir.x.abs() + rect.height() * dir.y.abs()) / 2.0;
            let start = (center.x - dir.x * half, center.y - dir.y * half);
            let end = (center.x + dir.x * half, center.y + dir.y * half);
            let stops: Vec<ColorStop> = stops
                .iter()
                .map(|stop| ColorStop::from((stop.offset, stop.color.multiply_alpha(alpha))))
                .collect();
            Brush::Gradient(Gradient {
                kind: GradientKind::Linear(LinearGradientPosition::new(start, end)),
                extend: Extend::Pad,
                stops: stops.as_slice().into(),
                ..Gradient::default()
            })
        }
    }
}
