// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed property schemas.
//!
//! Instead of probing host types reflectively, the loader consults an
//! explicit table declaring, per component kind, which properties exist
//! and what type each carries. A property the table does not declare, or
//! a value of the wrong type, fails the load with the offending style id
//! and property name.

use std::collections::HashMap;
use std::fmt;

use crate::descriptor::PropertyValue;
use crate::error::SkinError;

/// The declared type of a schema property.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    /// A boolean.
    Bool,
    /// An integer.
    Int,
    /// A float (integer literals are accepted).
    Float,
    /// A free-form string.
    Str,
    /// A `#rrggbb` / `#rrggbbaa` color literal.
    Color,
    /// An insets list with 1, 2 or 4 entries.
    Insets,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "a boolean",
            Self::Int => "an integer",
            Self::Float => "a float",
            Self::Str => "a string",
            Self::Color => "a color literal",
            Self::Insets => "an insets list (1, 2 or 4 entries)",
        };
        f.write_str(name)
    }
}

impl PropertyKind {
    fn accepts(self, value: &PropertyValue) -> bool {
        match (self, value) {
            (Self::Bool, PropertyValue::Bool(_))
            | (Self::Int, PropertyValue::Int(_))
            | (Self::Float, PropertyValue::Float(_) | PropertyValue::Int(_))
            | (Self::Str | Self::Color, PropertyValue::Str(_))
            | (Self::Insets, PropertyValue::List(_)) => true,
            _ => false,
        }
    }
}

/// Which property table of a component kind a declaration targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum PropertyTable {
    /// Component field overrides.
    Component,
    /// UI-delegate field overrides.
    Ui,
    /// Painter property overrides.
    Painter,
}

#[derive(Clone, Debug, Default)]
struct KindSchema {
    component: HashMap<String, PropertyKind>,
    ui: HashMap<String, PropertyKind>,
    painter: HashMap<String, PropertyKind>,
}

impl KindSchema {
    fn table(&self, table: PropertyTable) -> &HashMap<String, PropertyKind> {
        match table {
            PropertyTable::Component => &self.component,
            PropertyTable::Ui => &self.ui,
            PropertyTable::Painter => &self.painter,
        }
    }
}

/// Per-component-kind property tables consulted by the loader.
///
/// Embedders register the fields their components, UI delegates and
/// painters expose; anything a descriptor declares beyond that is an
/// authoring error.
#[derive(Clone, Debug, Default)]
pub struct PropertySchema {
    kinds: HashMap<String, KindSchema>,
}

impl PropertySchema {
    /// Creates an empty schema (every property declaration fails).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a component field for a kind.
    #[must_use]
    pub fn component_field(
        mut self,
        kind: impl Into<String>,
        name: impl Into<String>,
        ty: PropertyKind,
    ) -> Self {
        self.kinds
            .entry(kind.into())
            .or_default()
            .component
            .insert(name.into(), ty);
        self
    }

    /// Declares a UI-delegate field for a kind.
    #[must_use]
    pub fn ui_field(
        mut self,
        kind: impl Into<String>,
        name: impl Into<String>,
        ty: PropertyKind,
    ) -> Self {
        self.kinds
            .entry(kind.into())
            .or_default()
            .ui
            .insert(name.into(), ty);
        self
    }

    /// Declares a painter property for a kind.
    #[must_use]
    pub fn painter_field(
        mut self,
        kind: impl Into<String>,
        name: impl Into<String>,
        ty: PropertyKind,
    ) -> Self {
        self.kinds
            .entry(kind.into())
            .or_default()
            .painter
            .insert(name.into(), ty);
        self
    }

    /// Validates one property map against a kind's table.
    ///
    /// `style` is the enclosing style id for error reports. Color and
    /// insets values are validated semantically, not just structurally.
    pub(crate) fn validate(
        &self,
        style: &str,
        kind: &str,
        table: PropertyTable,
        props: &HashMap<String, PropertyValue>,
    ) -> Result<(), SkinError> {
        if props.is_empty() {
            return Ok(());
        }
        let empty = KindSchema::default();
        let tables = self.kinds.get(kind).unwrap_or(&empty);
        let fields = tables.table(table);

        for (name, value) in props {
            let Some(expected) = fields.get(name) else {
                return Err(SkinError::UnknownProperty {
                    style: style.into(),
                    property: name.clone(),
                });
            };
            if !expected.accepts(value) {
                return Err(SkinError::PropertyType {
                    style: style.into(),
                    property: name.clone(),
                    expected: *expected,
                });
            }
            // Semantic validation beyond shape.
            match (expected, value) {
                (PropertyKind::Color, PropertyValue::Str(literal)) => {
                    crate::descriptor::parse_color(style, name, literal)?;
                }
                (PropertyKind::Insets, PropertyValue::List(values)) => {
                    crate::descriptor::parse_insets(style, name, values)?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> PropertySchema {
        PropertySchema::new()
            .component_field("button", "opaque", PropertyKind::Bool)
            .component_field("button", "margin", PropertyKind::Insets)
            .ui_field("button", "foreground", PropertyKind::Color)
            .painter_field("button", "round", PropertyKind::Float)
    }

    fn props(entries: &[(&str, PropertyValue)]) -> HashMap<String, PropertyValue> {
        entries
            .iter()
            .map(|(k, v)| ((*k).into(), v.clone()))
            .collect()
    }

    #[test]
    fn accepts_well_typed_properties() {
        let schema = schema();
        schema
            .validate(
                "default",
                "button",
                PropertyTable::Component,
                &props(&[
                    ("opaque", PropertyValue::Bool(false)),
                    ("margin", PropertyValue::List(vec![2.0, 4.0])),
                ]),
            )
            .unwrap();
        // Float fields accept integer literals.
        schema
            .validate(
                "default",
                "button",
                PropertyTable::Painter,
                &props(&[("round", PropertyValue::Int(2))]),
            )
            .unwrap();
    }

    #[test]
    fn unknown_property_is_fatal() {
        let err = schema()
            .validate(
                "flat",
                "button",
                PropertyTable::Component,
                &props(&[("pulse", PropertyValue::Bool(true))]),
            )
            .unwrap_err();
        match err {
            SkinError::UnknownProperty { style, property } => {
                assert_eq!(style, "flat");
                assert_eq!(property, "pulse");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn type_mismatch_is_fatal() {
        let err = schema()
            .validate(
                "flat",
                "button",
                PropertyTable::Component,
                &props(&[("opaque", PropertyValue::Int(1))]),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            SkinError::PropertyType {
                expected: PropertyKind::Bool,
                ..
            }
        ));
    }

    #[test]
    fn color_literals_are_validated_semantically() {
        let err = schema()
            .validate(
                "flat",
                "button",
                PropertyTable::Ui,
                &props(&[("foreground", PropertyValue::Str("red".into()))]),
            )
            .unwrap_err();
        assert!(matches!(err, SkinError::InvalidValue { .. }));
    }

    #[test]
    fn tables_are_independent() {
        // `round` is a painter property, not a component property.
        let err = schema()
            .validate(
                "flat",
                "button",
                PropertyTable::Component,
                &props(&[("round", PropertyValue::Float(2.0))]),
            )
            .unwrap_err();
        assert!(matches!(err, SkinError::UnknownProperty { .. }));
    }
}
