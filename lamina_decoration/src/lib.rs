// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamina Decoration: decoration value objects and state-based resolution.
//!
//! A [`Decoration`] describes one visual variant of a component — shape,
//! border, backgrounds, shadows, content insets — together with the set of
//! state tags it applies to. A [`DecorationContainer`] holds the ordered
//! list of partial decorations one style declares, and a
//! [`DecorationResolver`] maps a live tag set onto the single merged
//! decoration valid for painting, caching the result per tag combination.
//!
//! ## Matching and merging
//!
//! A decoration matches when its tags are a subset of the current states;
//! an untagged decoration matches everything and serves as the default
//! variant. When several candidates match, they merge in declaration
//! order with later entries winning on conflicting fields — precedence by
//! declaration order, not by tag count.
//!
//! ```rust
//! use lamina_decoration::{Decoration, DecorationContainer, DecorationResolver};
//! use lamina_states::{StateTag, TagSet};
//! use peniko::Color;
//!
//! let mut container = DecorationContainer::new();
//! container.push(
//!     Decoration::new(TagSet::empty()).with_background(Color::from_rgb8(0xe0, 0xe0, 0xe0)),
//! );
//! container.push(
//!     Decoration::new(TagSet::from_tags([StateTag::HOVER]))
//!         .with_background(Color::from_rgb8(0xd0, 0xd8, 0xff)),
//! );
//!
//! let mut resolver = DecorationResolver::new();
//! let states = TagSet::from_tags([StateTag::ENABLED, StateTag::HOVER]);
//! let resolved = resolver.resolve(&container, &states, false).unwrap();
//! // The hover entry declared later wins on the background field.
//! assert!(resolved.backgrounds()[0].brush.is_some());
//! ```
//!
//! ## Caching
//!
//! Resolution is cached per exact sorted tag combination, including the
//! "no decoration applies" outcome. The cache is cleared only when the
//! backing container is swapped (a style or skin change), never on
//! ordinary state churn.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`
//! unless the default `std` feature is enabled (which merely forwards to
//! kurbo/peniko).

#![no_std]

extern crate alloc;

mod container;
mod decoration;
mod merge;
mod resolver;
mod visual;

pub use container::DecorationContainer;
pub use decoration::Decoration;
pub use merge::Merge;
pub use resolver::DecorationResolver;
pub use visual::{
    BackgroundStyle, BorderStyle, BrushSpec, ContentStyle, GradientStop, ShadowStyle, ShapeForm,
    ShapeStyle,
};
