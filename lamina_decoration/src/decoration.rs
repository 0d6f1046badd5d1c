// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The decoration value object.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Size;

use lamina_states::{DEFAULT_ID, TagSet};

use crate::merge::Merge;
use crate::visual::{BackgroundStyle, BorderStyle, BrushSpec, ContentStyle, ShadowStyle, ShapeStyle};

/// One visual variant of a component for a specific tag combination.
///
/// A decoration is a partial record: it declares the tag set it applies
/// to plus whichever visual fields it overrides. The resolver composes
/// matching partials via [`Merge`] into the complete decoration used for
/// painting.
///
/// Decorations are constructed during skin loading (or in code) and are
/// never mutated once handed to a resolver — the resolver clones before
/// merging.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoration {
    states: TagSet,
    visible: Option<bool>,
    size: Option<Size>,
    opacity: Option<f32>,
    section: bool,
    shape: ShapeStyle,
    border: BorderStyle,
    backgrounds: Vec<BackgroundStyle>,
    outer_shadow: ShadowStyle,
    inner_shadow: ShadowStyle,
    content: ContentStyle,
}

impl Decoration {
    /// Creates an empty decoration applying to the given tag set.
    ///
    /// An empty (untagged) set makes this the default variant, matching
    /// any state combination.
    #[must_use]
    pub fn new(states: TagSet) -> Self {
        Self {
            states,
            visible: None,
            size: None,
            opacity: None,
            section: false,
            shape: ShapeStyle::default(),
            border: BorderStyle::default(),
            backgrounds: Vec::new(),
            outer_shadow: ShadowStyle::default(),
            inner_shadow: ShadowStyle::default(),
            content: ContentStyle::default(),
        }
    }

    /// The id of this decoration: its sorted tag string, or `"default"`
    /// when untagged.
    #[must_use]
    pub fn id(&self) -> String {
        if self.states.is_empty() {
            String::from(DEFAULT_ID)
        } else {
            self.states.cache_key()
        }
    }

    /// The tag set this decoration applies to.
    #[must_use]
    pub fn states(&self) -> &TagSet {
        &self.states
    }

    /// Returns `true` if this decoration applies under `current`: its own
    /// tags must all be present. Untagged decorations always match.
    #[must_use]
    pub fn matches(&self, current: &TagSet) -> bool {
        self.states.is_subset_of(current)
    }

    /// Whether the decoration paints at all (default `true`).
    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }

    /// Fixed size override, if declared.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        self.size
    }

    /// Overall opacity in `[0, 1]` (default `1.0`).
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity.unwrap_or(1.0)
    }

    /// Whether this decoration paints only a section of a composite
    /// component. Set by the resolver per the caller's context.
    #[must_use]
    pub fn is_section(&self) -> bool {
        self.section
    }

    pub(crate) fn set_section(&mut self, section: bool) {
        self.section = section;
    }

    /// Outline shape.
    #[must_use]
    pub fn shape(&self) -> &ShapeStyle {
        &self.shape
    }

    /// Border.
    #[must_use]
    pub fn border(&self) -> &BorderStyle {
        &self.border
    }

    /// Background layers, bottom first.
    #[must_use]
    pub fn backgrounds(&self) -> &[BackgroundStyle] {
        &self.backgrounds
    }

    /// Outer shadow (painted beneath the background).
    #[must_use]
    pub fn outer_shadow(&self) -> &ShadowStyle {
        &self.outer_shadow
    }

    /// Inner shadow (painted above the background, below the border).
    #[must_use]
    pub fn inner_shadow(&self) -> &ShadowStyle {
        &self.inner_shadow
    }

    /// Content margin/padding.
    #[must_use]
    pub fn content(&self) -> &ContentStyle {
        &self.content
    }

    /// Sets visibility.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Sets a fixed size.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the overall opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Sets the outline shape.
    #[must_use]
    pub fn with_shape(mut self, shape: ShapeStyle) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the border.
    #[must_use]
    pub fn with_border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Appends a background layer.
    #[must_use]
    pub fn with_background_style(mut self, background: BackgroundStyle) -> Self {
        self.backgrounds.push(background);
        self
    }

    /// Appends a solid-color background layer.
    #[must_use]
    pub fn with_background(self, color: peniko::Color) -> Self {
        self.with_background_style(BackgroundStyle {
            brush: Some(BrushSpec::Solid(color)),
            opacity: None,
        })
    }

    /// Sets the outer shadow.
    #[must_use]
    pub fn with_outer_shadow(mut self, shadow: ShadowStyle) -> Self {
        self.outer_shadow = shadow;
        self
    }

    /// Sets the inner shadow.
    #[must_use]
    pub fn with_inner_shadow(mut self, shadow: ShadowStyle) -> Self {
        self.inner_shadow = shadow;
        self
    }

    /// Sets content margin/padding.
    #[must_use]
    pub fn with_content(mut self, content: ContentStyle) -> Self {
        self.content = content;
        self
    }
}

impl Merge for Decoration {
    /// Overlays `other`'s explicitly set fields onto `self`.
    ///
    /// The tag set is *not* merged — the composed decoration keeps the
    /// identity of the entry it grew from. Background lists merge
    /// index-wise; a longer list on either side keeps its extra layers.
    fn merge(&mut self, other: &Self) {
        self.visible.merge(&other.visible);
        self.size.merge(&other.size);
        self.opacity.merge(&other.opacity);
        self.shape.merge(&other.shape);
        self.border.merge(&other.border);
        self.outer_shadow.merge(&other.outer_shadow);
        self.inner_shadow.merge(&other.inner_shadow);
        self.content.merge(&other.content);

        for (i, layer) in other.backgrounds.iter().enumerate() {
            if let Some(existing) = self.backgrounds.get_mut(i) {
                existing.merge(layer);
            } else {
                self.backgrounds.push(layer.clone());
            }
        }
    }
}
