// Copyright 2024 the Lingrad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient specifications and the plans resolved from them.

use kurbo::{Point, Size};

use crate::{endpoints_from_angle, Color};

/// A representation of a point relative to a unit rectangle.
///
/// `(0.0, 0.0)` is the top-left of the surface and `(1.0, 1.0)` the
/// bottom-right. Values outside of that range are allowed and extrapolate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitPoint {
    u: f64,
    v: f64,
}

impl UnitPoint {
    pub const TOP_LEFT: UnitPoint = UnitPoint::new(0.0, 0.0);
    pub const TOP: UnitPoint = UnitPoint::new(0.5, 0.0);
    pub const TOP_RIGHT: UnitPoint = UnitPoint::new(1.0, 0.0);
    pub const LEFT: UnitPoint = UnitPoint::new(0.0, 0.5);
    pub const CENTER: UnitPoint = UnitPoint::new(0.5, 0.5);
    pub const RIGHT: UnitPoint = UnitPoint::new(1.0, 0.5);
    pub const BOTTOM_LEFT: UnitPoint = UnitPoint::new(0.0, 1.0);
    pub const BOTTOM: UnitPoint = UnitPoint::new(0.5, 1.0);
    pub const BOTTOM_RIGHT: UnitPoint = UnitPoint::new(1.0, 1.0);

    /// Create a new UnitPoint.
    ///
    /// The `u` and `v` coordinates describe the point, with (0.0, 0.0) being
    /// the top-left, and (1.0, 1.0) being the bottom-right.
    pub const fn new(u: f64, v: f64) -> UnitPoint {
        UnitPoint { u, v }
    }

    /// The horizontal fraction.
    pub const fn u(self) -> f64 {
        self.u
    }

    /// The vertical fraction.
    pub const fn v(self) -> f64 {
        self.v
    }

    /// Given the size of a surface, resolve the point in surface pixels.
    pub fn resolve(self, size: Size) -> Point {
        Point::new(self.u * size.width, self.v * size.height)
    }
}

impl From<(f64, f64)> for UnitPoint {
    fn from((u, v): (f64, f64)) -> UnitPoint {
        UnitPoint::new(u, v)
    }
}

/// How a renderer paints beyond the ends of the gradient line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtendMode {
    /// The first and last colors continue past the endpoints.
    #[default]
    Clamp,
    /// The gradient repeats.
    Repeat,
    /// The gradient repeats, mirrored every other time.
    Reflect,
}

/// Specification of a gradient stop.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    /// The coordinate of the stop.
    pub pos: f32,
    /// The color at that stop.
    pub color: Color,
}

/// Which of the two ways of placing the gradient line is in effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientMode {
    /// A bearing angle in degrees, rotated around `center`.
    Angle { angle: f64, center: UnitPoint },
    /// Explicit endpoints relative to the surface.
    Positions { start: UnitPoint, end: UnitPoint },
}

impl GradientMode {
    /// Resolve the start and end of the gradient line on a surface of `size`.
    pub fn endpoints(&self, size: Size) -> (Point, Point) {
        match *self {
            GradientMode::Angle { angle, center } => endpoints_from_angle(size, angle, center),
            GradientMode::Positions { start, end } => (start.resolve(size), end.resolve(size)),
        }
    }
}

/// A linear gradient resolved to surface pixels.
///
/// This is everything a renderer needs to create its shader: the start
/// point maps to position 0.0 and the end point to 1.0.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientPlan {
    /// The start point (corresponding to pos 0.0).
    pub start: Point,
    /// The end point (corresponding to pos 1.0).
    pub end: Point,
    /// The colors, in order along the line.
    pub colors: Vec<Color>,
    /// The position of each color along the line.
    ///
    /// When absent the colors are spaced evenly.
    pub stops: Option<Vec<f32>>,
    /// Painting beyond the endpoints.
    pub extend: ExtendMode,
}

impl GradientPlan {
    /// A builder-style method for changing how the gradient extends past
    /// its endpoints.
    pub fn with_extend(mut self, extend: ExtendMode) -> Self {
        self.extend = extend;
        self
    }

    /// Both endpoints have finite coordinates.
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Pair every color with its position along the line.
    ///
    /// Without explicit stops the colors are spread evenly from 0.0 to 1.0;
    /// a single color sits at 0.0.
    pub fn gradient_stops(&self) -> Vec<GradientStop> {
        match &self.stops {
            Some(stops) => self
                .colors
                .iter()
                .zip(stops)
                .map(|(&color, &pos)| GradientStop { pos, color })
                .collect(),
            None => {
                let denom = (self.colors.len().max(2) - 1) as f32;
                self.colors
                    .iter()
                    .enumerate()
                    .map(|(i, &color)| GradientStop {
                        pos: (i as f32) / denom,
                        color,
                    })
                    .collect()
            }
        }
    }
}

/// Assemble the plan for a gradient on a surface of `size`.
///
/// Returns `None` when there are no colors yet, or when stops are given
/// and their count differs from the color count. Hosts that set these
/// properties one at a time pass through such states, and the previous
/// plan should stay in effect until they are consistent again.
///
/// ```
/// use lingrad::{build_plan, Color, GradientMode, UnitPoint};
/// use lingrad::kurbo::{Point, Size};
///
/// let mode = GradientMode::Positions {
///     start: UnitPoint::TOP_LEFT,
///     end: UnitPoint::BOTTOM_RIGHT,
/// };
/// let colors = [Color::WHITE, Color::BLACK];
/// let plan = build_plan(&mode, Some(&colors[..]), None, Size::new(200.0, 100.0)).unwrap();
/// assert_eq!(plan.start, Point::ZERO);
/// assert_eq!(plan.end, Point::new(200.0, 100.0));
///
/// let missing = build_plan(&mode, Some(&colors[..]), Some(&[0.0][..]), Size::new(200.0, 100.0));
/// assert!(missing.is_none());
/// ```
pub fn build_plan(
    mode: &GradientMode,
    colors: Option<&[Color]>,
    stops: Option<&[f32]>,
    size: Size,
) -> Option<GradientPlan> {
    let Some(colors) = colors else {
        log::debug!("gradient plan suppressed: no colors");
        return None;
    };
    if let Some(stops) = stops {
        if stops.len() != colors.len() {
            log::debug!(
                "gradient plan suppressed: {} colors but {} locations",
                colors.len(),
                stops.len()
            );
            return None;
        }
        if stops.windows(2).any(|pair| pair[0] > pair[1]) {
            log::trace!("gradient locations are not sorted, passing them through");
        }
    }

    let (start, end) = mode.endpoints(size);
    Some(GradientPlan {
        start,
        end,
        colors: colors.to_vec(),
        stops: stops.map(<[f32]>::to_vec),
        extend: ExtendMode::Clamp,
    })
}
