// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State-to-decoration resolution with per-combination caching.

use alloc::rc::Rc;
use alloc::string::String;

use hashbrown::HashMap;

use lamina_states::TagSet;

use crate::container::DecorationContainer;
use crate::decoration::Decoration;
use crate::merge::Merge;

/// Resolves the single merged decoration valid for a tag combination.
///
/// Each live painter owns one resolver. Resolution is cached per exact
/// sorted tag string, so repeated paints under an unchanged state are a
/// map lookup returning the same `Rc` — reference-equal across calls.
/// "No decoration applies" is itself a cached outcome.
///
/// The cache is *not* invalidated by state churn; state churn is exactly
/// what the cache is for. The owner must call [`clear`](Self::clear) when
/// the backing container changes (a style or skin swap), otherwise stale
/// merges would be served for previously seen combinations.
#[derive(Clone, Debug, Default)]
pub struct DecorationResolver {
    cache: HashMap<String, Option<Rc<Decoration>>>,
}

impl DecorationResolver {
    /// Creates a resolver with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cached tag combinations.
    #[must_use]
    pub fn cached_combinations(&self) -> usize {
        self.cache.len()
    }

    /// Resolves the decoration for `states` against `candidates`.
    ///
    /// On a cache miss, candidates whose tags are contained in `states`
    /// are collected in declaration order; the first is cloned and each
    /// subsequent match merges into the clone, later entries winning on
    /// conflicting fields. `section` marks the result as painting only a
    /// section of a composite component.
    ///
    /// Returns `None` when no candidate matches — a legitimate
    /// "undecorated" state, also cached.
    pub fn resolve(
        &mut self,
        candidates: &DecorationContainer,
        states: &TagSet,
        section: bool,
    ) -> Option<Rc<Decoration>> {
        let key = states.cache_key();
        if let Some(hit) = self.cache.get(&key) {
            return hit.clone();
        }

        let mut matching = candidates.iter().filter(|d| d.matches(states));
        let resolved = matching.next().map(|first| {
            // Clone defensively: the merged result must never corrupt the
            // style graph's original entries.
            let mut merged = first.clone();
            for next in matching {
                merged.merge(next);
            }
            merged.set_section(section);
            Rc::new(merged)
        });

        self.cache.insert(key, resolved.clone());
        resolved
    }

    /// Drops every cached combination.
    ///
    /// Must be called when the backing [`DecorationContainer`] is swapped.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
