// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamina Skin: skin descriptor loading and style graph resolution.
//!
//! A *skin* is a named, loadable bundle of per-component-type style rules.
//! This crate parses externally authored skin descriptors (RON, TOML or
//! JSON), splices `include` directives, resolves `extends` chains between
//! styles, expands painter aliases, validates property values against a
//! typed schema, and produces a [`SkinInfo`] whose flattened style cache
//! answers `(component kind, style id)` lookups without ever re-walking
//! the descriptor graph.
//!
//! ## Loading
//!
//! ```no_run
//! use lamina_skin::{PropertySchema, SkinLoader};
//!
//! let schema = PropertySchema::new();
//! let loader = SkinLoader::new(&schema);
//! let skin = loader.load_path("skins/web/skin.ron".as_ref())?;
//!
//! // Never re-walks the graph; falls back to "default" on unknown ids.
//! let style = skin.style("button", "flat");
//! assert!(style.is_some());
//! # Ok::<(), lamina_skin::SkinError>(())
//! ```
//!
//! ## Error taxonomy
//!
//! Authoring errors — unknown properties, type mismatches, unresolvable
//! `extends` ids, include cycles — are fatal at load time and carried in
//! [`SkinError`] with the offending style id and property name; a skin
//! installs completely or not at all. Runtime lookup misses are local:
//! [`SkinInfo::style`] falls back to the default-id style with a logged
//! diagnostic and never panics during paint.
//!
//! Loading performs file I/O once at skin-install time and is serialized
//! per load: [`SkinLoader::load_path`] threads the "currently loading
//! namespace" and include stack explicitly through the recursion, so
//! nested includes cannot interleave or corrupt shared context.

mod descriptor;
mod error;
mod format;
mod loader;
mod schema;
mod skin;

pub use descriptor::{
    BackgroundDescriptor, BorderDescriptor, DecorationDescriptor, GradientDescriptor,
    IncludeDescriptor, PainterDescriptor, PropertyValue, ShadowDescriptor, ShapeDescriptor,
    SkinDescriptor, StyleDescriptor,
};
pub use error::SkinError;
pub use format::Format;
pub use loader::SkinLoader;
pub use schema::{PropertyKind, PropertySchema};
pub use skin::{ComponentStyle, PainterStyle, SkinInfo, SupportedSystems};
