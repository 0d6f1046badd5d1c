// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical state collection for one component.

use alloc::vec::Vec;

use crate::set::TagSet;
use crate::tag::StateTag;

/// A snapshot of host-tracked booleans for one component.
///
/// The host toolkit supplies this per collection; the collector never
/// queries the toolkit itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StateInput {
    /// Whether the component accepts input.
    pub enabled: bool,
    /// Whether the component owns keyboard focus.
    pub focused: bool,
    /// Whether the pointer is over the component.
    pub hovered: bool,
}

impl Default for StateInput {
    fn default() -> Self {
        Self {
            enabled: true,
            focused: false,
            hovered: false,
        }
    }
}

/// Capability for contributing extra state tags.
///
/// Implemented by components and UI delegates that carry visual state
/// beyond the host-tracked booleans (orientation, selection, custom
/// grouping states, ...). Contributors are queried fresh on every
/// collection — implementations must report live state and must not
/// cache.
pub trait Stateful {
    /// Appends this contributor's current tags to `out`.
    ///
    /// Order and duplicates do not matter; the collector sorts and
    /// deduplicates the combined result.
    fn decoration_states(&self, out: &mut Vec<StateTag>);
}

/// Derives the canonical sorted tag set for one component.
///
/// The collector always emits the platform tag and `enabled`/`disabled`.
/// `focused` and `hover` are emitted only when the owning painter opted
/// into the respective tracking — a painter whose decorations never
/// mention focus has no reason to reflect it.
#[derive(Clone, Debug)]
pub struct StateCollector {
    platform: StateTag,
    track_focus: bool,
    track_hover: bool,
}

impl StateCollector {
    /// Creates a collector emitting the given host-platform tag.
    #[must_use]
    pub fn new(platform: StateTag) -> Self {
        Self {
            platform,
            track_focus: false,
            track_hover: false,
        }
    }

    /// Enables or disables the `focused` tag.
    #[must_use]
    pub fn with_focus_tracking(mut self, track: bool) -> Self {
        self.track_focus = track;
        self
    }

    /// Enables or disables the `hover` tag.
    #[must_use]
    pub fn with_hover_tracking(mut self, track: bool) -> Self {
        self.track_hover = track;
        self
    }

    /// Returns `true` if this collector emits the `focused` tag.
    #[must_use]
    pub fn tracks_focus(&self) -> bool {
        self.track_focus
    }

    /// Returns `true` if this collector emits the `hover` tag.
    #[must_use]
    pub fn tracks_hover(&self) -> bool {
        self.track_hover
    }

    /// Collects the current canonical tag set.
    ///
    /// The result is sorted and deduplicated, so the same logical state
    /// always yields the same [`TagSet::cache_key`] regardless of
    /// contribution order. The result is never empty: at minimum it holds
    /// the platform tag and `enabled` or `disabled`.
    #[must_use]
    pub fn collect(&self, input: &StateInput, contributors: &[&dyn Stateful]) -> TagSet {
        let mut tags = Vec::with_capacity(4 + contributors.len() * 2);
        tags.push(self.platform.clone());
        tags.push(if input.enabled {
            StateTag::ENABLED
        } else {
            StateTag::DISABLED
        });
        if self.track_focus && input.focused {
            tags.push(StateTag::FOCUSED);
        }
        if self.track_hover && input.hovered {
            tags.push(StateTag::HOVER);
        }
        for contributor in contributors {
            contributor.decoration_states(&mut tags);
        }
        TagSet::from_tags(tags)
    }
}
