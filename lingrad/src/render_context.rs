// Copyright 2024 the Lingrad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The platform renderer, seen from the gradient side.

use kurbo::Rect;

use crate::{ClipPath, Error, GradientPlan};

/// A surface a gradient plan can be painted onto.
///
/// Implementations own the actual shader and path primitives; the plan and
/// clip path they receive are already resolved to surface pixels.
pub trait RenderContext {
    /// Report an internal error.
    ///
    /// Drawing operations may cause internal errors, which may also occur
    /// asynchronously after the drawing call. This method allows the client
    /// to query for errors.
    fn status(&mut self) -> Result<(), Error>;

    /// Restrict subsequent painting to the inside of `clip`.
    ///
    /// The clip stays in effect until the matching [`restore`].
    ///
    /// [`restore`]: RenderContext::restore
    fn clip(&mut self, clip: &ClipPath);

    /// Paint `rect` with the linear gradient described by `plan`.
    fn fill(&mut self, rect: Rect, plan: &GradientPlan) -> Result<(), Error>;

    /// Save the context state.
    fn save(&mut self) -> Result<(), Error>;

    /// Restore the context state to the last [`save`].
    ///
    /// [`save`]: RenderContext::save
    fn restore(&mut self) -> Result<(), Error>;

    /// Finish any pending operations.
    fn finish(&mut self) -> Result<(), Error>;
}
