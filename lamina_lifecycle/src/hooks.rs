// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::subscription::Subscription;

/// Host toolkit seam for a single component attachment.
///
/// The host supplies listener registration and invalidation; every
/// method runs synchronously on the host's UI thread. Each
/// `subscribe_*` call registers one listener that routes its events
/// back into [`StateBinding::on_event`](crate::StateBinding::on_event)
/// and returns the guard that removes it.
pub trait HostHooks {
    /// Tracks focus gained/lost on the component.
    fn subscribe_focus(&mut self) -> Subscription;

    /// Tracks pointer enter/exit on the component.
    fn subscribe_hover(&mut self) -> Subscription;

    /// Tracks re-parenting of the component itself.
    fn subscribe_hierarchy(&mut self) -> Subscription;

    /// Tracks sibling additions and removals, scoped to the current
    /// parent only; the host re-registers it after a re-parent.
    fn subscribe_siblings(&mut self) -> Subscription;

    /// Tracks changes to a named component property.
    fn subscribe_property(&mut self, name: &str) -> Subscription;

    /// Asks the host to recompute layout for the component.
    fn request_relayout(&mut self);

    /// Asks the host to repaint the component.
    fn request_repaint(&mut self);
}

/// The tracked occurrence that triggered a state recomputation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingEvent {
    /// The component gained keyboard focus.
    FocusGained,
    /// The component lost keyboard focus.
    FocusLost,
    /// The pointer entered the component.
    HoverEnter,
    /// The pointer left the component.
    HoverExit,
    /// The component's enabled property flipped.
    EnabledChanged,
    /// The component was re-parented or gained/lost a sibling.
    HierarchyChanged,
    /// The component itself signalled that its extra tags changed.
    StatesChanged,
}

impl fmt::Display for BindingEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FocusGained => "focus-gained",
            Self::FocusLost => "focus-lost",
            Self::HoverEnter => "hover-enter",
            Self::HoverExit => "hover-exit",
            Self::EnabledChanged => "enabled-changed",
            Self::HierarchyChanged => "hierarchy-changed",
            Self::StatesChanged => "states-changed",
        };
        f.write_str(name)
    }
}
