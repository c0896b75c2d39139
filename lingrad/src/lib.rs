// Copyright 2024 the Lingrad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear gradient geometry for rectangular surfaces.
//!
//! A gradient is placed either by explicit start and end points relative to
//! the surface, or by a bearing angle rotated around a center, and is
//! clipped to a rectangle with rounded corners. [`GradientSurface`] holds
//! those inputs and resolves them into a [`GradientPlan`] and a [`ClipPath`]
//! in surface pixels, ready for a [`RenderContext`] to paint.

#![deny(clippy::trivially_copy_pass_by_ref)]

pub use kurbo;

mod border;
mod color;
mod error;
mod geometry;
mod gradient;
mod null_renderer;
mod render_context;
mod surface;

#[cfg(feature = "samples")]
pub mod samples;

pub use crate::border::*;
pub use crate::color::*;
pub use crate::error::*;
pub use crate::geometry::*;
pub use crate::gradient::*;
pub use crate::null_renderer::*;
pub use crate::render_context::*;
pub use crate::surface::*;
