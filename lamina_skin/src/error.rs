// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Skin loading and authoring errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::format::Format;
use crate::schema::PropertyKind;

/// Errors raised while loading a skin descriptor.
///
/// All of these are fatal at load time: a skin installs completely or not
/// at all. Runtime style lookups never raise; they fall back to the
/// default style with a logged diagnostic.
#[derive(Error, Debug)]
pub enum SkinError {
    /// File could not be read.
    #[error("error reading skin descriptor")]
    Io(#[from] std::io::Error),

    /// RON parse failure.
    #[error("skin deserialisation from RON failed")]
    Ron(#[from] ron::error::SpannedError),

    /// TOML parse failure.
    #[error("skin deserialisation from TOML failed")]
    Toml(#[from] toml::de::Error),

    /// JSON parse failure.
    #[error("skin deserialisation from JSON failed")]
    Json(#[from] serde_json::Error),

    /// The descriptor path has no recognized extension.
    #[error("format not supported: {0}")]
    UnsupportedFormat(Format),

    /// A property name the schema does not declare for this component kind.
    #[error("style `{style}`: unknown property `{property}`")]
    UnknownProperty {
        /// Offending style id.
        style: String,
        /// Offending property name.
        property: String,
    },

    /// A property value of the wrong type.
    #[error("style `{style}`: property `{property}` expects {expected}")]
    PropertyType {
        /// Offending style id.
        style: String,
        /// Offending property name.
        property: String,
        /// The type the schema declares.
        expected: PropertyKind,
    },

    /// A value that parses syntactically but is semantically invalid
    /// (bad color literal, wrong insets arity, unknown shape form, ...).
    #[error("style `{style}`: invalid value for `{property}`: {detail}")]
    InvalidValue {
        /// Offending style id.
        style: String,
        /// Offending property name.
        property: String,
        /// What was wrong.
        detail: String,
    },

    /// `extends` names a style that was not declared earlier for the same
    /// component kind.
    #[error("style `{style}` extends undeclared style `{extends}`")]
    UnresolvedExtends {
        /// Offending style id.
        style: String,
        /// The missing parent id.
        extends: String,
    },

    /// An include directive closes a cycle.
    #[error("include cycle through `{}`", path.display())]
    IncludeCycle {
        /// The path that was already on the include stack.
        path: PathBuf,
    },

    /// An include target that exists under neither the including file's
    /// directory nor the root skin's directory.
    #[error("include target `{}` not found", path.display())]
    IncludeNotFound {
        /// The unresolvable target.
        path: PathBuf,
    },
}
