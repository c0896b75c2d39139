// Copyright 2024 the Lingrad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gradient surface: input state, derived outputs and painting.

use kurbo::Size;

use crate::{
    build_clip_path, build_plan, BorderRadii, ClipPath, Color, Error, ExtendMode, GradientMode,
    GradientPlan, RenderContext, UnitPoint, DEFAULT_ARC_TOLERANCE,
};

/// Settings that stay fixed for the lifetime of a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceConfig {
    /// Pixels per logical unit, applied to border radii.
    pub scale_factor: f64,
    /// Accuracy of the curves approximating rounded corners, in pixels.
    pub arc_tolerance: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        SurfaceConfig {
            scale_factor: 1.0,
            arc_tolerance: DEFAULT_ARC_TOLERANCE,
        }
    }
}

impl SurfaceConfig {
    /// A builder-style method for changing the scale factor.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// A builder-style method for changing the arc tolerance.
    pub fn with_arc_tolerance(mut self, arc_tolerance: f64) -> Self {
        self.arc_tolerance = arc_tolerance;
        self
    }
}

/// Every input of a gradient surface.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientState {
    /// Start of the gradient line when not using an angle.
    pub start_position: UnitPoint,
    /// End of the gradient line when not using an angle.
    pub end_position: UnitPoint,
    /// Nothing is planned until colors are set.
    pub colors: Option<Vec<Color>>,
    pub locations: Option<Vec<f32>>,
    pub use_angle: bool,
    pub angle_center: Option<UnitPoint>,
    /// Bearing angle in degrees.
    pub angle: f64,
    /// Painting beyond the endpoints of the gradient line.
    pub extend_mode: ExtendMode,
    /// Corner radii in pixels.
    pub border_radii: BorderRadii,
    pub size: Size,
}

impl Default for GradientState {
    fn default() -> Self {
        GradientState {
            start_position: UnitPoint::TOP_LEFT,
            end_position: UnitPoint::BOTTOM_LEFT,
            colors: None,
            locations: None,
            use_angle: false,
            angle_center: Some(UnitPoint::CENTER),
            angle: 45.0,
            extend_mode: ExtendMode::Clamp,
            border_radii: BorderRadii::ZERO,
            size: Size::ZERO,
        }
    }
}

/// The outputs derived from a [`GradientState`].
#[derive(Debug, Clone, PartialEq)]
pub struct Computed {
    /// `None` while the colors and locations are inconsistent.
    pub plan: Option<GradientPlan>,
    pub clip: ClipPath,
}

impl GradientState {
    /// The placement of the gradient line currently in effect.
    ///
    /// The angle is only used when enabled and a center is set.
    pub fn mode(&self) -> GradientMode {
        match self.angle_center {
            Some(center) if self.use_angle => GradientMode::Angle {
                angle: self.angle,
                center,
            },
            _ => GradientMode::Positions {
                start: self.start_position,
                end: self.end_position,
            },
        }
    }

    pub fn plan(&self) -> Option<GradientPlan> {
        build_plan(
            &self.mode(),
            self.colors.as_deref(),
            self.locations.as_deref(),
            self.size,
        )
        .map(|plan| plan.with_extend(self.extend_mode))
    }

    pub fn clip_path(&self, tolerance: f64) -> ClipPath {
        build_clip_path(self.size, &self.border_radii, tolerance)
    }

    /// Derive the plan and the clip path from scratch.
    pub fn compute(&self, config: &SurfaceConfig) -> Computed {
        Computed {
            plan: self.plan(),
            clip: self.clip_path(config.arc_tolerance),
        }
    }
}

/// A rectangle painted with a linear gradient.
///
/// This owns the inputs set by the host, one setter per property in any
/// order, and keeps the derived plan and clip path up to date. While the
/// inputs are inconsistent the last good plan stays in effect.
///
/// ```
/// use lingrad::{Color, GradientSurface, NullRenderContext};
/// use lingrad::kurbo::{Point, Size};
///
/// let mut surface = GradientSurface::new();
/// surface.set_size(Size::new(100.0, 100.0));
/// surface.set_colors(vec![Color::WHITE, Color::BLACK]);
/// surface.set_use_angle(true);
///
/// let plan = surface.plan().unwrap();
/// assert!((plan.end - Point::new(100.0, 0.0)).hypot() < 1e-9);
/// assert!(surface.take_redraw_request());
///
/// surface.paint(&mut NullRenderContext::new()).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct GradientSurface {
    config: SurfaceConfig,
    state: GradientState,
    plan: Option<GradientPlan>,
    clip: ClipPath,
    redraw_requested: bool,
}

impl Default for GradientSurface {
    fn default() -> Self {
        GradientSurface::new()
    }
}

impl GradientSurface {
    pub fn new() -> GradientSurface {
        GradientSurface::with_config(SurfaceConfig::default())
    }

    pub fn with_config(config: SurfaceConfig) -> GradientSurface {
        let state = GradientState::default();
        let Computed { plan, clip } = state.compute(&config);
        GradientSurface {
            config,
            state,
            plan,
            clip,
            redraw_requested: false,
        }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn state(&self) -> &GradientState {
        &self.state
    }

    /// The most recent consistent plan, if there ever was one.
    pub fn plan(&self) -> Option<&GradientPlan> {
        self.plan.as_ref()
    }

    pub fn clip_path(&self) -> &ClipPath {
        &self.clip
    }

    /// Whether the plan changed since the last call, clearing the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn set_start_position(&mut self, start: impl Into<UnitPoint>) {
        self.state.start_position = start.into();
        self.update_plan();
    }

    pub fn set_end_position(&mut self, end: impl Into<UnitPoint>) {
        self.state.end_position = end.into();
        self.update_plan();
    }

    pub fn set_colors(&mut self, colors: impl Into<Vec<Color>>) {
        self.state.colors = Some(colors.into());
        self.update_plan();
    }

    pub fn set_locations(&mut self, locations: Option<Vec<f32>>) {
        self.state.locations = locations;
        self.update_plan();
    }

    pub fn set_use_angle(&mut self, use_angle: bool) {
        self.state.use_angle = use_angle;
        self.update_plan();
    }

    pub fn set_angle_center(&mut self, center: Option<UnitPoint>) {
        self.state.angle_center = center;
        self.update_plan();
    }

    /// Set the bearing angle, in degrees clockwise from the top.
    pub fn set_angle(&mut self, angle: f64) {
        self.state.angle = angle;
        self.update_plan();
    }

    /// Set how the gradient continues past its endpoints.
    pub fn set_extend_mode(&mut self, extend_mode: ExtendMode) {
        self.state.extend_mode = extend_mode;
        self.update_plan();
    }

    /// Set the corner radii, in logical units.
    ///
    /// The radii are converted to pixels with the configured scale factor.
    pub fn set_border_radii(&mut self, radii: BorderRadii) {
        self.state.border_radii = radii.scale(self.config.scale_factor);
        self.update_clip();
        self.update_plan();
    }

    /// Set the size of the surface in pixels, as laid out by the host.
    pub fn set_size(&mut self, size: Size) {
        self.state.size = size;
        self.update_clip();
        self.update_plan();
    }

    fn update_plan(&mut self) {
        // Without a plan, whatever was planned last stays until the inputs agree again.
        if let Some(plan) = self.state.plan() {
            log::trace!("gradient plan {:?} -> {:?}", plan.start, plan.end);
            self.plan = Some(plan);
            self.redraw_requested = true;
        }
    }

    fn update_clip(&mut self) {
        self.clip = self.state.clip_path(self.config.arc_tolerance);
    }

    /// Paint the current plan, clipped to the current outline.
    ///
    /// Nothing is painted before the first consistent plan. A plan with
    /// non-finite endpoints is skipped rather than handed to the renderer.
    pub fn paint(&self, rc: &mut impl RenderContext) -> Result<(), Error> {
        let Some(plan) = &self.plan else {
            log::trace!("no gradient plan, nothing to paint");
            return Ok(());
        };
        if !plan.is_finite() {
            log::debug!(
                "skipping gradient with non-finite endpoints {:?} -> {:?}",
                plan.start,
                plan.end
            );
            return Ok(());
        }
        rc.save()?;
        rc.clip(&self.clip);
        let filled = rc.fill(self.clip.bounds(), plan);
        // A failed fill is reported over a failed restore.
        let restored = rc.restore();
        filled.and(restored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use kurbo::{Point, Shape};

    const RED: Color = Color::rgb8(255, 0, 0);
    const BLUE: Color = Color::rgb8(0, 0, 255);

    fn ready_surface() -> GradientSurface {
        let mut surface = GradientSurface::new();
        surface.set_size(Size::new(200.0, 100.0));
        surface.set_colors(vec![RED, BLUE]);
        surface
    }

    #[test]
    fn defaults() {
        let state = GradientState::default();
        assert_eq!(
            state.mode(),
            GradientMode::Positions {
                start: UnitPoint::new(0.0, 0.0),
                end: UnitPoint::new(0.0, 1.0),
            }
        );
        assert_eq!(state.angle, 45.0);
        assert_eq!(state.angle_center, Some(UnitPoint::new(0.5, 0.5)));

        let surface = GradientSurface::new();
        assert!(surface.plan().is_none());
        assert_eq!(surface.clip_path().bounds(), Size::ZERO.to_rect());
    }

    #[test]
    fn default_positions_run_top_to_bottom() {
        let surface = ready_surface();
        let plan = surface.plan().unwrap();
        assert_eq!(plan.start, Point::ZERO);
        assert_eq!(plan.end, Point::new(0.0, 100.0));
    }

    #[test]
    fn angle_needs_a_center() {
        let mut surface = ready_surface();
        surface.set_use_angle(true);
        surface.set_angle(90.0);
        assert_eq!(surface.plan().unwrap().end, Point::new(200.0, 0.0));

        surface.set_angle_center(None);
        assert_eq!(surface.plan().unwrap().end, Point::new(0.0, 100.0));
    }

    #[test]
    fn inconsistent_updates_keep_previous_plan() {
        let mut surface = ready_surface();
        surface.take_redraw_request();
        let before = surface.plan().cloned();

        surface.set_colors(vec![RED, BLUE, RED]);
        surface.set_locations(Some(vec![0.0, 1.0]));
        assert_eq!(surface.plan().cloned().map(|p| p.colors.len()), Some(3));
        surface.take_redraw_request();

        surface.set_start_position((1.0, 1.0));
        assert!(!surface.take_redraw_request());
        assert_ne!(surface.plan().cloned(), before);
        assert_eq!(surface.plan().unwrap().start, Point::ZERO);

        surface.set_locations(Some(vec![0.0, 0.5, 1.0]));
        assert!(surface.take_redraw_request());
        assert_eq!(surface.plan().unwrap().start, Point::new(200.0, 100.0));
    }

    #[test]
    fn setters_are_idempotent() {
        let mut once = ready_surface();
        once.set_use_angle(true);
        once.set_angle(30.0);
        once.set_border_radii(BorderRadii::uniform(12.0));

        let mut twice = once.clone();
        twice.set_angle(30.0);
        twice.set_border_radii(BorderRadii::uniform(12.0));
        twice.set_size(Size::new(200.0, 100.0));

        assert_eq!(once.plan(), twice.plan());
        assert_eq!(once.clip_path(), twice.clip_path());
        assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn cached_outputs_match_compute() {
        let mut surface = ready_surface();
        surface.set_use_angle(true);
        surface.set_angle(-120.0);
        surface.set_border_radii(BorderRadii::new(4.0, 8.0, 0.0, 2.0));
        let computed = surface.state().compute(surface.config());
        assert_eq!(computed.plan.as_ref(), surface.plan());
        assert_eq!(&computed.clip, surface.clip_path());
    }

    #[test]
    fn radii_are_scaled_to_pixels() {
        let config = SurfaceConfig::default().with_scale_factor(2.0);
        let mut surface = GradientSurface::with_config(config);
        surface.set_size(Size::new(100.0, 100.0));
        surface.set_border_radii(BorderRadii::uniform(10.0));
        assert_eq!(surface.state().border_radii, BorderRadii::uniform(20.0));
        assert!(surface.clip_path().area() < 100.0 * 100.0);
    }

    #[test]
    fn extend_mode_reaches_the_plan() {
        let mut surface = ready_surface();
        assert_eq!(surface.plan().unwrap().extend, ExtendMode::Clamp);
        surface.set_extend_mode(ExtendMode::Reflect);
        assert_eq!(surface.plan().unwrap().extend, ExtendMode::Reflect);
        let computed = surface.state().compute(surface.config());
        assert_eq!(computed.plan.unwrap().extend, ExtendMode::Reflect);
    }

    #[test]
    fn resize_updates_clip_and_plan() {
        let mut surface = ready_surface();
        surface.set_end_position((1.0, 1.0));
        surface.set_size(Size::new(50.0, 40.0));
        assert_eq!(surface.clip_path().bounds().size(), Size::new(50.0, 40.0));
        assert_eq!(surface.plan().unwrap().end, Point::new(50.0, 40.0));
    }
}
