// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State tag names.

use core::fmt;

use smol_str::SmolStr;

/// The id used for an untagged (default) decoration or style.
pub const DEFAULT_ID: &str = "default";

/// A single named boolean facet of a component's visual condition.
///
/// Tags are domain vocabulary, not free text: the built-in catalog covers
/// the facets every widget shares (enabled, focus, hover, ...), and skins
/// extend it with their own tags where needed. Comparison and ordering are
/// lexicographic over the tag text, which is what makes [`TagSet`]
/// ordering deterministic.
///
/// Cloning is cheap: short tag text is stored inline.
///
/// [`TagSet`]: crate::TagSet
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateTag(SmolStr);

impl StateTag {
    /// The component accepts input.
    pub const ENABLED: Self = Self::new_static("enabled");
    /// The component rejects input.
    pub const DISABLED: Self = Self::new_static("disabled");
    /// The component owns keyboard focus.
    pub const FOCUSED: Self = Self::new_static("focused");
    /// The pointer is over the component.
    pub const HOVER: Self = Self::new_static("hover");
    /// The component is being pressed.
    pub const PRESSED: Self = Self::new_static("pressed");
    /// The component is selected.
    pub const SELECTED: Self = Self::new_static("selected");
    /// The component is checked (toggles, checkboxes).
    pub const CHECKED: Self = Self::new_static("checked");
    /// The component is laid out horizontally.
    pub const HORIZONTAL: Self = Self::new_static("horizontal");
    /// The component is laid out vertically.
    pub const VERTICAL: Self = Self::new_static("vertical");

    /// Creates a tag from arbitrary text.
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(SmolStr::new(text))
    }

    /// Creates a tag from static text, usable in constants.
    #[must_use]
    pub const fn new_static(text: &'static str) -> Self {
        Self(SmolStr::new_static(text))
    }

    /// Returns the tag text.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for StateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateTag").field(&self.0.as_str()).finish()
    }
}

impl fmt::Display for StateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for StateTag {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
