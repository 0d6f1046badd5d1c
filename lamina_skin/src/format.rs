// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Descriptor formats and read support.

use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::SkinError;

/// RON reader configuration.
///
/// Descriptors write optional fields bare (`extends: "default"`, not
/// `extends: Some("default")`), which requires the `implicit_some`
/// extension.
fn ron_options() -> ron::Options {
    ron::Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Skin descriptor serialisation formats.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Error)]
pub enum Format {
    /// Not specified: guess from the path.
    #[default]
    #[error("no format")]
    None,

    /// Rusty Object Notation.
    #[error("RON")]
    Ron,

    /// Tom's Obvious Minimal Language.
    #[error("TOML")]
    Toml,

    /// JavaScript Object Notation.
    #[error("JSON")]
    Json,

    /// Error: unable to guess format.
    #[error("(unknown format)")]
    Unknown,
}

impl Format {
    /// Guess format from the path name.
    ///
    /// This does not open the file. Returns [`Format::Unknown`] for an
    /// unrecognised or missing extension.
    #[must_use]
    pub fn guess_from_path(path: &Path) -> Self {
        // use == since there is no OsStr literal
        if let Some(ext) = path.extension() {
            if ext == "ron" {
                Self::Ron
            } else if ext == "toml" {
                Self::Toml
            } else if ext == "json" {
                Self::Json
            } else {
                Self::Unknown
            }
        } else {
            Self::Unknown
        }
    }

    /// Read a descriptor from a path.
    pub fn read_path<T: DeserializeOwned>(self, path: &Path) -> Result<T, SkinError> {
        log::debug!("read_path: path={}, format={:?}", path.display(), self);
        match self {
            Self::Ron => {
                let r = std::io::BufReader::new(std::fs::File::open(path)?);
                Ok(ron_options().from_reader(r)?)
            }
            Self::Toml => {
                let contents = std::fs::read_to_string(path)?;
                Ok(toml::from_str(&contents)?)
            }
            Self::Json => {
                let r = std::io::BufReader::new(std::fs::File::open(path)?);
                Ok(serde_json::from_reader(r)?)
            }
            _ => Err(SkinError::UnsupportedFormat(self)),
        }
    }

    /// Read a descriptor from a string.
    pub fn read_str<T: DeserializeOwned>(self, contents: &str) -> Result<T, SkinError> {
        match self {
            Self::Ron => Ok(ron_options().from_str(contents)?),
            Self::Toml => Ok(toml::from_str(contents)?),
            Self::Json => Ok(serde_json::from_str(contents)?),
            _ => Err(SkinError::UnsupportedFormat(self)),
        }
    }

    /// Guess format and load from a path.
    #[inline]
    pub fn guess_and_read_path<T: DeserializeOwned>(path: &Path) -> Result<T, SkinError> {
        Self::guess_from_path(path).read_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_by_extension() {
        assert_eq!(Format::guess_from_path(Path::new("a/skin.ron")), Format::Ron);
        assert_eq!(Format::guess_from_path(Path::new("skin.toml")), Format::Toml);
        assert_eq!(Format::guess_from_path(Path::new("skin.json")), Format::Json);
        assert_eq!(Format::guess_from_path(Path::new("skin.xml")), Format::Unknown);
        assert_eq!(Format::guess_from_path(Path::new("skin")), Format::Unknown);
    }

    #[test]
    fn unknown_format_errors_on_read() {
        let err = Format::Unknown.read_str::<i32>("1").unwrap_err();
        assert!(matches!(err, SkinError::UnsupportedFormat(Format::Unknown)));
    }

    #[test]
    fn ron_reads_bare_optional_fields() {
        #[derive(Debug, serde::Deserialize)]
        struct Entry {
            extends: Option<String>,
        }
        let entry: Entry = Format::Ron.read_str(r#"(extends: "default")"#).unwrap();
        assert_eq!(entry.extends.as_deref(), Some("default"));
    }
}
