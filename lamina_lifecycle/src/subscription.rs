// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

/// A scoped listener registration.
///
/// The host adapter wraps its "remove listener" action in a
/// `Subscription`; the action runs exactly once, either on an explicit
/// [`release`](Self::release) or when the guard is dropped. This makes
/// detachment part of ownership rather than a manual pairing the caller
/// can forget, which matters for long-lived shared managers such as a
/// global focus tracker.
pub struct Subscription {
    label: &'static str,
    detach: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps a detach action under the given diagnostic label.
    #[must_use]
    pub fn new(label: &'static str, detach: impl FnOnce() + 'static) -> Self {
        Self {
            label,
            detach: Some(Box::new(detach)),
        }
    }

    /// A subscription with no detach action, for hosts that track
    /// listeners elsewhere.
    #[must_use]
    pub fn noop(label: &'static str) -> Self {
        Self {
            label,
            detach: None,
        }
    }

    /// The diagnostic label given at creation.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Detaches now instead of at drop time.
    pub fn release(mut self) {
        self.detach_once();
    }

    fn detach_once(&mut self) {
        if let Some(detach) = self.detach.take() {
            log::trace!("detach subscription `{}`", self.label);
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_once();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("label", &self.label)
            .field("live", &self.detach.is_some())
            .finish()
    }
}
