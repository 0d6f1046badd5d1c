// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The resolved runtime skin model.

use std::collections::HashMap;
use std::rc::Rc;

use lamina_decoration::DecorationContainer;
use lamina_states::DEFAULT_ID;

use crate::descriptor::PropertyValue;

/// A resolved painter record.
///
/// Aliased declarations (`ids: "a,b,c"`) expand into several records
/// sharing one property map.
#[derive(Clone, Debug)]
pub struct PainterStyle {
    /// Painter id within the style.
    pub id: String,
    /// Fully qualified painter implementation identifier.
    pub painter: String,
    /// Whether this is the style's base painter.
    pub base: bool,
    /// Painter property overrides.
    pub props: Rc<HashMap<String, PropertyValue>>,
}

/// A fully resolved style for one component kind.
///
/// Extends chains are already flattened: every field holds the merged
/// result of the style and all of its ancestors. Instances live in the
/// skin's style cache and are shared read-only; specializing a style
/// per component clones it first.
#[derive(Clone, Debug)]
pub struct ComponentStyle {
    /// Component kind this style targets.
    pub component: String,
    /// Style id within the kind.
    pub id: String,
    /// The id this style extended, if any (provenance only; the merge is
    /// already applied).
    pub extends_id: Option<String>,
    /// Merged component field overrides.
    pub component_props: HashMap<String, PropertyValue>,
    /// Merged UI-delegate field overrides.
    pub ui_props: HashMap<String, PropertyValue>,
    /// Merged painter list; exactly one entry is base when any exist.
    pub painters: Vec<PainterStyle>,
    /// Merged decoration candidates.
    pub decorations: DecorationContainer,
}

impl ComponentStyle {
    /// Returns the base painter, if this style declares painters.
    #[must_use]
    pub fn base_painter(&self) -> Option<&PainterStyle> {
        self.painters.iter().find(|p| p.base)
    }

    /// Returns a painter by id.
    #[must_use]
    pub fn painter(&self, id: &str) -> Option<&PainterStyle> {
        self.painters.iter().find(|p| p.id == id)
    }
}

/// Which host systems a skin supports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SupportedSystems {
    /// Every host system.
    All,
    /// Only the named systems.
    Named(Vec<String>),
}

impl SupportedSystems {
    /// Parses the descriptor form: `"all"` or a comma-separated list.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(
                trimmed
                    .split(',')
                    .map(|s| s.trim().to_owned())
                    .filter(|s| !s.is_empty())
                    .collect(),
            )
        }
    }

    /// Returns `true` if the named system is supported.
    #[must_use]
    pub fn supports(&self, system: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(named) => named.iter().any(|s| s == system),
        }
    }
}

/// A loaded skin: metadata plus the flattened style cache.
///
/// The cache is built once at load time; lookups never re-walk the
/// include or extends graph. After load the skin is shared read-only
/// across every component using it.
#[derive(Clone, Debug)]
pub struct SkinInfo {
    /// Unique skin id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
    /// Author metadata.
    pub author: String,
    /// Supported host systems.
    pub supported_systems: SupportedSystems,
    /// Implementation namespace.
    pub namespace: String,
    /// Ids of skins this one extends.
    pub extends: Vec<String>,
    styles_cache: HashMap<String, HashMap<String, Rc<ComponentStyle>>>,
}

impl SkinInfo {
    pub(crate) fn new(
        id: String,
        name: String,
        description: String,
        author: String,
        supported_systems: SupportedSystems,
        namespace: String,
        extends: Vec<String>,
        styles: Vec<ComponentStyle>,
    ) -> Self {
        let mut styles_cache: HashMap<String, HashMap<String, Rc<ComponentStyle>>> =
            HashMap::new();
        for style in styles {
            let by_id = styles_cache.entry(style.component.clone()).or_default();
            if by_id.contains_key(&style.id) {
                log::debug!(
                    "skin `{id}`: style `{}.{}` redeclared; later declaration wins",
                    style.component,
                    style.id
                );
            }
            by_id.insert(style.id.clone(), Rc::new(style));
        }
        Self {
            id,
            name,
            description,
            author,
            supported_systems,
            namespace,
            extends,
            styles_cache,
        }
    }

    /// Returns the number of resolved styles across all component kinds.
    #[must_use]
    pub fn style_count(&self) -> usize {
        self.styles_cache.values().map(HashMap::len).sum()
    }

    /// Looks up the style for `(kind, id)`.
    ///
    /// An unknown id falls back to the kind's `"default"` style with a
    /// logged diagnostic — paint-time lookups degrade, they never fail.
    /// Returns `None` only when the kind has no default style either.
    #[must_use]
    pub fn style(&self, kind: &str, id: &str) -> Option<&Rc<ComponentStyle>> {
        let by_id = self.styles_cache.get(kind)?;
        if let Some(style) = by_id.get(id) {
            return Some(style);
        }
        log::warn!(
            "skin `{}`: no style `{id}` for component `{kind}`; falling back to `{DEFAULT_ID}`",
            self.id
        );
        by_id.get(DEFAULT_ID)
    }

    /// Looks up the default style for a kind.
    #[must_use]
    pub fn default_style(&self, kind: &str) -> Option<&Rc<ComponentStyle>> {
        self.styles_cache.get(kind)?.get(DEFAULT_ID)
    }

    /// Returns an iterator over all `(kind, id)` pairs in the cache.
    pub fn style_ids(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.styles_cache.iter().flat_map(|(kind, by_id)| {
            by_id.keys().map(move |id| (kind.as_str(), id.as_str()))
        })
    }
}
