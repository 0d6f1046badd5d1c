// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamina Lifecycle: install/uninstall coordination and state tracking.
//!
//! A [`StateBinding`] ties one component attachment to the host toolkit.
//! On install it collects the initial tag set and attaches exactly the
//! listeners the component's candidate decorations can use — focus
//! tracking only when a candidate declares `focused`, hover tracking
//! only for `hover`, and so on. Listener registrations come back as
//! [`Subscription`] guards, so teardown is driven by ownership: dropping
//! the binding (or calling [`StateBinding::uninstall`]) detaches
//! everything exactly once, in reverse attachment order.
//!
//! The host adapter implements [`HostHooks`] and routes its toolkit
//! events into [`StateBinding::on_event`]. The binding recollects the
//! tag set, and only when the list actually changed does it refresh
//! section bindings and request relayout plus repaint.
//!
//! Everything here runs synchronously on the host's UI thread; nothing
//! locks, blocks, or performs I/O.

#![no_std]

extern crate alloc;

mod binding;
mod hooks;
mod subscription;

pub use binding::StateBinding;
pub use hooks::{BindingEvent, HostHooks};
pub use subscription::Subscription;
