// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lamina Paint: turning resolved decorations into drawing operations.
//!
//! The driver is the thin, boundary-facing end of the engine: once per
//! paint pass the host hands it a [`Surface`], the component bounds, a
//! [`ComponentCtx`], and the decoration resolved for the current state,
//! and [`paint`] emits the layered fills and strokes. Opaque components
//! with no visible decoration fall back to a plain background fill so
//! their bounds are never left undefined.
//!
//! The layout-facing queries — [`border_insets`], [`provide_shape`],
//! [`preferred_size`] — are pure functions of the resolved decoration
//! with graceful fallbacks when there is none.
//!
//! Everything runs synchronously on the host's UI thread and performs
//! no I/O.

#![no_std]

extern crate alloc;

mod driver;
mod surface;

pub use driver::{border_insets, paint, preferred_size, provide_shape};
pub use surface::{ComponentCtx, Surface};
