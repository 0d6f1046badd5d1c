// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered decoration collections with overwrite-aware merging.

use alloc::vec::Vec;

use lamina_states::StateTag;

use crate::decoration::Decoration;
use crate::merge::Merge;

/// The ordered list of partial decorations belonging to one style.
///
/// Declaration order matters: when several entries match a state set,
/// they merge first-to-last with later entries winning. The container
/// guarantees that no two entries share a tag set.
///
/// Style inheritance composes containers via [`merge`](Self::merge): an
/// extending style's container overlays its parent's, entry by entry,
/// unless the child is marked `overwrite`, in which case it replaces the
/// parent's list wholesale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecorationContainer {
    entries: Vec<Decoration>,
    overwrite: bool,
}

impl DecorationContainer {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty container with the `overwrite` flag set.
    #[must_use]
    pub fn with_overwrite() -> Self {
        Self {
            entries: Vec::new(),
            overwrite: true,
        }
    }

    /// Whether merging this container into another replaces the other's
    /// entries instead of overlaying them.
    #[must_use]
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the container has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over entries in declaration order.
    pub fn iter(&self) -> core::slice::Iter<'_, Decoration> {
        self.entries.iter()
    }

    /// Appends a decoration.
    ///
    /// If an entry with the identical tag set already exists, the new one
    /// merges into it instead (last declaration wins per field). Two
    /// independently authored fragments declaring the same tag set is an
    /// authoring hazard — the collision is logged since the outcome
    /// depends on splice order across include files.
    pub fn push(&mut self, decoration: Decoration) {
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|e| e.states() == decoration.states())
        {
            log::warn!(
                "duplicate decoration for states `{}`; later declaration wins",
                decoration.id()
            );
            existing.merge(&decoration);
        } else {
            self.entries.push(decoration);
        }
    }

    /// Returns `true` if any entry declares the given tag.
    ///
    /// Drives conditional subscription setup: a component whose
    /// candidates never mention `focused` needs no focus tracking.
    #[must_use]
    pub fn requires(&self, tag: &StateTag) -> bool {
        self.entries.iter().any(|e| e.states().contains(tag))
    }

    /// Merges `other` into this container.
    ///
    /// With `other.overwrite` set, `other`'s entries replace this list
    /// wholesale. Otherwise entries pair up by tag-set identity: matching
    /// entries merge with `other` winning per field, unmatched `other`
    /// entries append in their declaration order. Either way no two
    /// entries share a tag set afterwards.
    pub fn merge(&mut self, other: &Self) {
        if other.overwrite {
            self.entries = other.entries.clone();
            return;
        }
        for incoming in &other.entries {
            match self
                .entries
                .iter_mut()
                .find(|e| e.states() == incoming.states())
            {
                Some(existing) => existing.merge(incoming),
                None => self.entries.push(incoming.clone()),
            }
        }
    }
}

impl<'a> IntoIterator for &'a DecorationContainer {
    type Item = &'a Decoration;
    type IntoIter = core::slice::Iter<'a, Decoration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Decoration> for DecorationContainer {
    fn from_iter<I: IntoIterator<Item = Decoration>>(iter: I) -> Self {
        let mut container = Self::new();
        for decoration in iter {
            container.push(decoration);
        }
        container
    }
}
