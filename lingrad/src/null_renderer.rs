// Copyright 2024 the Lingrad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A render context that does nothing.

use kurbo::Rect;

use crate::{ClipPath, Error, GradientPlan, RenderContext};

/// A render context that doesn't render.
///
/// This is useful largely for doc tests, but is made public in case
/// it might come in handy.
#[derive(Debug, Default)]
pub struct NullRenderContext;

impl NullRenderContext {
    pub fn new() -> NullRenderContext {
        NullRenderContext
    }
}

impl RenderContext for NullRenderContext {
    fn status(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn clip(&mut self, _clip: &ClipPath) {}

    fn fill(&mut self, _rect: Rect, _plan: &GradientPlan) -> Result<(), Error> {
        Ok(())
    }

    fn save(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn restore(&mut self) -> Result<(), Error> {
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Error> {
        Ok(())
    }
}
