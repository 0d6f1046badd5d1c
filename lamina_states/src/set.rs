// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned, sorted tag sets.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::iter::FromIterator;

use crate::tag::StateTag;

/// An owned, sorted, deduplicated set of state tags.
///
/// The sorted representation serves two purposes: subset checks are a
/// linear merge walk, and [`cache_key`](Self::cache_key) is deterministic —
/// the same logical state combination always yields the same key string
/// no matter the order tags were contributed in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagSet(Box<[StateTag]>);

impl Default for TagSet {
    fn default() -> Self {
        Self(Vec::new().into_boxed_slice())
    }
}

impl TagSet {
    /// The empty tag set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Constructs a set from an iterator, sorting and deduplicating.
    #[must_use]
    pub fn from_tags(iter: impl IntoIterator<Item = StateTag>) -> Self {
        let mut tags: Vec<StateTag> = iter.into_iter().collect();
        tags.sort();
        tags.dedup();
        Self(tags.into_boxed_slice())
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of tags in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the set as a sorted slice.
    #[must_use]
    pub fn as_slice(&self) -> &[StateTag] {
        &self.0
    }

    /// Returns an iterator over the tags in sorted order.
    pub fn iter(&self) -> core::slice::Iter<'_, StateTag> {
        self.0.iter()
    }

    /// Returns `true` if this set contains the given tag.
    #[must_use]
    pub fn contains(&self, tag: &StateTag) -> bool {
        self.0.binary_search(tag).is_ok()
    }

    /// Returns `true` if every tag in this set is present in `other`.
    ///
    /// The empty set is a subset of everything — an untagged decoration
    /// matches any state combination.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        if self.is_empty() {
            return true;
        }
        if other.is_empty() {
            return false;
        }

        let (needles, haystack) = (&self.0, &other.0);
        let mut i = 0;
        let mut j = 0;
        while i < needles.len() && j < haystack.len() {
            match needles[i].cmp(&haystack[j]) {
                core::cmp::Ordering::Less => return false,
                core::cmp::Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                core::cmp::Ordering::Greater => j += 1,
            }
        }
        i == needles.len()
    }

    /// Returns the comma-joined tag string used as a resolver cache key.
    ///
    /// The empty set yields the empty string.
    #[must_use]
    pub fn cache_key(&self) -> String {
        let mut key = String::new();
        for (i, tag) in self.0.iter().enumerate() {
            if i > 0 {
                key.push(',');
            }
            key.push_str(tag.as_str());
        }
        key
    }
}

impl FromIterator<StateTag> for TagSet {
    fn from_iter<I: IntoIterator<Item = StateTag>>(iter: I) -> Self {
        Self::from_tags(iter)
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a StateTag;
    type IntoIter = core::slice::Iter<'a, StateTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn tags(names: &[&str]) -> TagSet {
        TagSet::from_tags(names.iter().map(|n| StateTag::new(n)))
    }

    #[test]
    fn from_tags_sorts_and_dedups() {
        let set = tags(&["selected", "hover", "selected", "enabled"]);
        let names: Vec<_> = set.iter().map(|t| t.as_str().to_string()).collect();
        assert_eq!(names, ["enabled", "hover", "selected"]);
    }

    #[test]
    fn cache_key_is_order_independent() {
        let a = tags(&["selected", "hover"]);
        let b = tags(&["hover", "selected"]);
        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), "hover,selected");
    }

    #[test]
    fn empty_set_has_empty_key() {
        assert_eq!(TagSet::empty().cache_key(), "");
    }

    #[test]
    fn subset_requires_every_tag() {
        let entry = tags(&["hover", "selected"]);
        assert!(!entry.is_subset_of(&tags(&["hover"])));
        assert!(entry.is_subset_of(&tags(&["focused", "hover", "selected"])));
        assert!(entry.is_subset_of(&entry.clone()));
    }

    #[test]
    fn empty_set_is_subset_of_everything() {
        assert!(TagSet::empty().is_subset_of(&tags(&["hover"])));
        assert!(TagSet::empty().is_subset_of(&TagSet::empty()));
        assert!(!tags(&["hover"]).is_subset_of(&TagSet::empty()));
    }

    #[test]
    fn contains_uses_binary_search() {
        let set = tags(&["enabled", "hover", "selected"]);
        assert!(set.contains(&StateTag::HOVER));
        assert!(!set.contains(&StateTag::FOCUSED));
    }
}
