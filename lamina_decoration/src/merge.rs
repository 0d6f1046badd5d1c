// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The field-level merge contract.

/// Merge another partial value into this one.
///
/// Decorations are authored as partial records: a hover variant might set
/// only a background color and inherit everything else from the default
/// variant. `merge` composes such partials — every field the other side
/// explicitly sets overrides this side's value; unset fields are left
/// alone.
///
/// The contract is directional: `a.merge(&b)` means *b wins*. Composing a
/// declaration-ordered list therefore folds left to right, giving later
/// declarations precedence.
pub trait Merge {
    /// Overlays `other` onto `self`; `other`'s set fields win.
    fn merge(&mut self, other: &Self);
}

/// `Option` merges by adoption: a set value on the other side replaces
/// whatever this side had.
impl<T: Clone> Merge for Option<T> {
    fn merge(&mut self, other: &Self) {
        if let Some(value) = other {
            *self = Some(value.clone());
        }
    }
}
