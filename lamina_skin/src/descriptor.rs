// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The serde-facing descriptor model.
//!
//! Descriptor types mirror the authored document structure and know how
//! to compile themselves into the runtime model (`lamina_decoration`
//! values, [`PainterStyle`](crate::PainterStyle) records). Compilation is
//! where authoring validation happens: bad color literals, unknown shape
//! forms and wrong insets arities are fatal here, carrying the offending
//! style id and property name.

use std::collections::HashMap;

use kurbo::{Insets, Size};
use peniko::Color;
use serde::Deserialize;

use lamina_decoration::{
    BackgroundStyle, BorderStyle, BrushSpec, ContentStyle, Decoration, DecorationContainer,
    GradientStop, ShadowStyle, ShapeForm, ShapeStyle,
};
use lamina_states::{DEFAULT_ID, StateTag, TagSet};

use crate::error::SkinError;

/// A typed property value as authored in a descriptor.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub enum PropertyValue {
    /// A boolean.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A float.
    Float(f64),
    /// A string (also carries color literals, validated by the schema).
    Str(String),
    /// A list of numbers (insets shorthand: 1, 2 or 4 entries).
    List(Vec<f64>),
}

/// The root skin document.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkinDescriptor {
    /// Unique skin id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Author metadata.
    pub author: String,
    /// Comma-separated supported host systems, or `"all"`.
    pub supported_systems: String,
    /// Implementation namespace; abbreviated painter ids resolve against
    /// it, and included fragments inherit it unless they declare their own.
    pub namespace: String,
    /// Ids of skins this one extends (metadata only at this level).
    pub extends: Vec<String>,
    /// Included style fragments, spliced before this file's own styles.
    pub includes: Vec<IncludeDescriptor>,
    /// Style sections declared directly in this file.
    pub styles: Vec<StyleDescriptor>,
}

/// An `include` directive naming a sub-descriptor to splice in.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IncludeDescriptor {
    /// Namespace override for the included fragment's styles.
    pub namespace: Option<String>,
    /// Target path; relative paths resolve against the including file's
    /// directory, falling back to the root skin's directory.
    pub path: String,
}

/// One style section: overrides for a single component kind.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleDescriptor {
    /// Component kind this style targets (e.g. `"button"`).
    pub component: String,
    /// Style id, `"default"` when omitted.
    pub id: Option<String>,
    /// Id of an earlier style of the same kind to inherit from.
    pub extends: Option<String>,
    /// Component field overrides, validated against the schema.
    pub component_props: HashMap<String, PropertyValue>,
    /// UI-delegate field overrides, validated against the schema.
    pub ui_props: HashMap<String, PropertyValue>,
    /// Painter sections.
    pub painters: Vec<PainterDescriptor>,
    /// Partial decorations keyed by state-tag combinations.
    pub decorations: Vec<DecorationDescriptor>,
    /// Replace rather than overlay the parent's decorations on merge.
    pub decorations_overwrite: bool,
}

impl StyleDescriptor {
    /// The effective style id (`"default"` when omitted).
    #[must_use]
    pub fn style_id(&self) -> &str {
        self.id.as_deref().unwrap_or(DEFAULT_ID)
    }
}

/// One painter section.
///
/// `ids` may be a comma-separated list — shorthand for several painter
/// records sharing one property map; the loader expands the aliases.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PainterDescriptor {
    /// Painter id, or comma-separated alias list.
    pub ids: String,
    /// Painter implementation identifier, possibly abbreviated (no `.`)
    /// and then resolved against the enclosing skin's namespace.
    pub painter: String,
    /// Marks this painter as the style's base painter.
    pub base: bool,
    /// Painter property overrides, validated against the schema.
    pub props: HashMap<String, PropertyValue>,
}

/// One partial decoration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecorationDescriptor {
    /// State tags this variant applies to; empty means default variant.
    pub states: Vec<String>,
    /// Visibility override.
    pub visible: Option<bool>,
    /// Fixed size `[w, h]`.
    pub size: Option<[f64; 2]>,
    /// Overall opacity.
    pub opacity: Option<f32>,
    /// Outline shape.
    pub shape: Option<ShapeDescriptor>,
    /// Border.
    pub border: Option<BorderDescriptor>,
    /// Background layers, bottom first.
    pub backgrounds: Vec<BackgroundDescriptor>,
    /// Outer shadow.
    pub shadow: Option<ShadowDescriptor>,
    /// Inner shadow.
    pub inner_shadow: Option<ShadowDescriptor>,
    /// Margin between component bounds and decoration shape.
    pub margin: Option<Vec<f64>>,
    /// Padding between decoration shape and content.
    pub padding: Option<Vec<f64>>,
}

/// Shape section of a decoration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapeDescriptor {
    /// `"rect"` or `"rounded"`.
    pub form: Option<String>,
    /// Corner radius for rounded rects.
    pub radius: Option<f64>,
}

/// Border section of a decoration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BorderDescriptor {
    /// Stroke color literal (`"#rrggbb"` / `"#rrggbbaa"`).
    pub color: Option<String>,
    /// Stroke width.
    pub width: Option<f64>,
    /// Opacity multiplier.
    pub opacity: Option<f32>,
}

/// One background layer of a decoration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackgroundDescriptor {
    /// Solid fill color literal.
    pub color: Option<String>,
    /// Linear gradient fill; mutually exclusive with `color`.
    pub gradient: Option<GradientDescriptor>,
    /// Opacity multiplier.
    pub opacity: Option<f32>,
}

/// Linear gradient section.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientDescriptor {
    /// Direction in radians (0 = left→right).
    pub angle: f64,
    /// `(offset, color literal)` stops in ascending order.
    pub stops: Vec<(f32, String)>,
}

/// Shadow section of a decoration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadowDescriptor {
    /// Shadow color literal.
    pub color: Option<String>,
    /// Shadow spread.
    pub width: Option<f64>,
    /// Opacity multiplier.
    pub opacity: Option<f32>,
}

impl DecorationDescriptor {
    /// Compiles this descriptor into a runtime [`Decoration`].
    ///
    /// `style` is the enclosing style id, used in error reports.
    pub fn compile(&self, style: &str) -> Result<Decoration, SkinError> {
        let states = TagSet::from_tags(self.states.iter().map(StateTag::new));
        let mut decoration = Decoration::new(states);

        if let Some(visible) = self.visible {
            decoration = decoration.with_visible(visible);
        }
        if let Some([w, h]) = self.size {
            decoration = decoration.with_size(Size::new(w, h));
        }
        if let Some(opacity) = self.opacity {
            decoration = decoration.with_opacity(opacity);
        }
        if let Some(shape) = &self.shape {
            decoration = decoration.with_shape(ShapeStyle {
                form: shape
                    .form
                    .as_deref()
                    .map(|f| parse_shape_form(style, f))
                    .transpose()?,
                radius: shape.radius,
            });
        }
        if let Some(border) = &self.border {
            decoration = decoration.with_border(BorderStyle {
                color: parse_opt_color(style, "border.color", border.color.as_deref())?,
                width: border.width,
                opacity: border.opacity,
            });
        }
        for background in &self.backgrounds {
            let brush = match (&background.color, &background.gradient) {
                (Some(color), None) => {
                    Some(BrushSpec::Solid(parse_color(style, "background.color", color)?))
                }
                (None, Some(gradient)) => {
                    let mut stops = Vec::with_capacity(gradient.stops.len());
                    for (offset, color) in &gradient.stops {
                        stops.push(GradientStop {
                            offset: *offset,
                            color: parse_color(style, "background.gradient", color)?,
                        });
                    }
                    Some(BrushSpec::Linear {
                        angle: gradient.angle,
                        stops,
                    })
                }
                (None, None) => None,
                (Some(_), Some(_)) => {
                    return Err(SkinError::InvalidValue {
                        style: style.into(),
                        property: "background".into(),
                        detail: "declares both color and gradient".into(),
                    });
                }
            };
            decoration = decoration.with_background_style(BackgroundStyle {
                brush,
                opacity: background.opacity,
            });
        }
        if let Some(shadow) = &self.shadow {
            decoration = decoration.with_outer_shadow(ShadowStyle {
                color: parse_opt_color(style, "shadow.color", shadow.color.as_deref())?,
                width: shadow.width,
                opacity: shadow.opacity,
            });
        }
        if let Some(shadow) = &self.inner_shadow {
            decoration = decoration.with_inner_shadow(ShadowStyle {
                color: parse_opt_color(style, "inner_shadow.color", shadow.color.as_deref())?,
                width: shadow.width,
                opacity: shadow.opacity,
            });
        }
        if self.margin.is_some() || self.padding.is_some() {
            decoration = decoration.with_content(ContentStyle {
                margin: self
                    .margin
                    .as_deref()
                    .map(|v| parse_insets(style, "margin", v))
                    .transpose()?,
                padding: self
                    .padding
                    .as_deref()
                    .map(|v| parse_insets(style, "padding", v))
                    .transpose()?,
            });
        }

        Ok(decoration)
    }
}

/// Compiles a decoration list into a container, honoring the overwrite flag.
pub(crate) fn compile_decorations(
    style: &str,
    descriptors: &[DecorationDescriptor],
    overwrite: bool,
) -> Result<DecorationContainer, SkinError> {
    let mut container = if overwrite {
        DecorationContainer::with_overwrite()
    } else {
        DecorationContainer::new()
    };
    for descriptor in descriptors {
        container.push(descriptor.compile(style)?);
    }
    Ok(container)
}

fn parse_shape_form(style: &str, form: &str) -> Result<ShapeForm, SkinError> {
    match form {
        "rect" => Ok(ShapeForm::Rect),
        "rounded" => Ok(ShapeForm::RoundedRect),
        other => Err(SkinError::InvalidValue {
            style: style.into(),
            property: "shape.form".into(),
            detail: format!("unknown form `{other}` (expected `rect` or `rounded`)"),
        }),
    }
}

fn parse_opt_color(
    style: &str,
    property: &str,
    literal: Option<&str>,
) -> Result<Option<Color>, SkinError> {
    literal.map(|l| parse_color(style, property, l)).transpose()
}

/// Parses a `#rrggbb` / `#rrggbbaa` color literal.
pub(crate) fn parse_color(style: &str, property: &str, literal: &str) -> Result<Color, SkinError> {
    let bad = |detail: &str| SkinError::InvalidValue {
        style: style.into(),
        property: property.into(),
        detail: format!("`{literal}`: {detail}"),
    };

    let hex = literal
        .strip_prefix('#')
        .ok_or_else(|| bad("expected leading `#`"))?;
    // Byte-range slicing below requires single-byte characters.
    if !hex.is_ascii() {
        return Err(bad("expected ASCII hex digits"));
    }
    if hex.len() != 6 && hex.len() != 8 {
        return Err(bad("expected 6 or 8 hex digits"));
    }
    let byte = |range: core::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| bad("invalid hex digit"))
    };
    let r = byte(0..2)?;
    let g = byte(2..4)?;
    let b = byte(4..6)?;
    let a = if hex.len() == 8 { byte(6..8)? } else { 0xff };
    Ok(Color::from_rgba8(r, g, b, a))
}

/// Parses insets shorthand: `[all]`, `[vertical, horizontal]` or
/// `[top, right, bottom, left]`.
pub(crate) fn parse_insets(style: &str, property: &str, values: &[f64]) -> Result<Insets, SkinError> {
    match values {
        [all] => Ok(Insets::uniform(*all)),
        [vertical, horizontal] => Ok(Insets {
            x0: *horizontal,
            y0: *vertical,
            x1: *horizontal,
            y1: *vertical,
        }),
        [top, right, bottom, left] => Ok(Insets {
            x0: *left,
            y0: *top,
            x1: *right,
            y1: *bottom,
        }),
        other => Err(SkinError::InvalidValue {
            style: style.into(),
            property: property.into(),
            detail: format!("expected 1, 2 or 4 entries, got {}", other.len()),
        }),
    }
}
