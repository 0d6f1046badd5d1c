// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamina States: decoration state tags and state collection.
//!
//! A component's visual condition is described by a set of *state tags*:
//! small named boolean facets such as `enabled`, `hover`, `selected` or
//! `horizontal`. A skin declares decorations against combinations of tags;
//! at runtime the engine collects the component's current tag set and
//! resolves the decoration whose tags are contained in it.
//!
//! ## Core Concepts
//!
//! ### Tags
//!
//! [`StateTag`] is a cheap-to-clone tag name. The common vocabulary is
//! available as associated constants; skins may introduce their own tags
//! freely — the catalog is open.
//!
//! ```rust
//! use lamina_states::StateTag;
//!
//! let hover = StateTag::HOVER;
//! let custom = StateTag::new("in-toolbar");
//! assert_eq!(hover.as_str(), "hover");
//! assert_eq!(custom.as_str(), "in-toolbar");
//! ```
//!
//! ### Tag sets
//!
//! [`TagSet`] is an owned, sorted, deduplicated set of tags. Sorting is
//! total and deterministic, so the same logical state combination always
//! produces the same [`TagSet::cache_key`] regardless of the order in
//! which tags were contributed.
//!
//! ```rust
//! use lamina_states::{StateTag, TagSet};
//!
//! let a = TagSet::from_tags([StateTag::SELECTED, StateTag::HOVER]);
//! let b = TagSet::from_tags([StateTag::HOVER, StateTag::SELECTED]);
//! assert_eq!(a, b);
//! assert_eq!(a.cache_key(), "hover,selected");
//! ```
//!
//! ### State collection
//!
//! [`StateCollector`] derives the canonical tag set for one component from
//! a [`StateInput`] snapshot plus any [`Stateful`] contributors (the
//! component itself and its UI delegate, typically). Contributors are
//! queried fresh on every call so the result always reflects live state.
//!
//! ```rust
//! use lamina_states::{StateCollector, StateInput, StateTag};
//!
//! let collector = StateCollector::new(StateTag::new("linux"))
//!     .with_focus_tracking(true);
//!
//! let input = StateInput { enabled: true, focused: true, hovered: false };
//! let states = collector.collect(&input, &[]);
//! assert_eq!(states.cache_key(), "enabled,focused,linux");
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod collect;
mod set;
mod tag;

pub use collect::{StateCollector, StateInput, Stateful};
pub use set::TagSet;
pub use tag::{DEFAULT_ID, StateTag};
