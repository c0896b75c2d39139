// Copyright 2024 the Lingrad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Endpoints of a linear gradient described by a bearing angle.
//!
//! The gradient line is centered on the rotation center and is long enough
//! that the bands perpendicular to it cover the whole surface, the same way
//! CSS resolves `linear-gradient(<angle>, ...)`.

use kurbo::{Point, Size};

use crate::UnitPoint;

/// Signs of the far corner relative to the surface center, in Cartesian
/// space (+y up), for each quarter turn of the bearing starting at 0°.
const QUADRANT_CORNERS: [(f64, f64); 4] = [(1.0, 1.0), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0)];

/// Reduce an angle in degrees to the range `[0, 360)`.
///
/// Non-finite angles stay non-finite.
pub fn normalize_angle(degrees: f64) -> f64 {
    let angle = degrees.rem_euclid(360.0);
    // rem_euclid rounds up to the modulus for tiny negative inputs.
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

/// Resolve the start and end points of a gradient line from a bearing angle.
///
/// `degrees` is a bearing: 0° points at the top edge and angles grow
/// clockwise. `center` is the point the line rotates around, in unit
/// coordinates of a surface of the given `size`; it is not clamped.
///
/// The four cardinal angles map to lines spanning exactly one edge of the
/// surface, whatever the center:
///
/// ```
/// use lingrad::{endpoints_from_angle, UnitPoint};
/// use lingrad::kurbo::{Point, Size};
///
/// let size = Size::new(200.0, 100.0);
/// let (start, end) = endpoints_from_angle(size, 90.0, UnitPoint::TOP_LEFT);
/// assert_eq!(start, Point::ZERO);
/// assert_eq!(end, Point::new(200.0, 0.0));
/// ```
///
/// Every other angle is resolved so that the end point is the projection of
/// the corner the angle points towards onto the gradient line. The result is
/// plain floating point: a non-finite angle yields non-finite points.
pub fn endpoints_from_angle(size: Size, degrees: f64, center: UnitPoint) -> (Point, Point) {
    let angle = normalize_angle(degrees);
    let Size { width, height } = size;

    // Cardinal angles have undefined or zero slopes.
    if angle == 0.0 {
        return (Point::new(0.0, height), Point::ZERO);
    }
    if angle == 90.0 {
        return (Point::ZERO, Point::new(width, 0.0));
    }
    if angle == 180.0 {
        return (Point::ZERO, Point::new(0.0, height));
    }
    if angle == 270.0 {
        return (Point::new(width, 0.0), Point::ZERO);
    }

    // A bearing has 0° up and 90° right, tan expects 0° right and 90° up.
    let slope = (90.0 - angle).to_radians().tan();
    let perpendicular_slope = -1.0 / slope;

    let quadrant = ((angle / 90.0) as usize).min(QUADRANT_CORNERS.len() - 1);
    let (sign_x, sign_y) = QUADRANT_CORNERS[quadrant];
    let corner_x = sign_x * width / 2.0;
    let corner_y = sign_y * height / 2.0;

    // Intersect the gradient line through the origin with its perpendicular
    // through the corner.
    let c = corner_y - perpendicular_slope * corner_x;
    let end_x = c / (slope - perpendicular_slope);
    let end_y = perpendicular_slope * end_x + c;

    // Back to surface space (+y down), around the rotation center.
    let origin = center.resolve(size);
    let start = Point::new(origin.x - end_x, origin.y + end_y);
    let end = Point::new(origin.x + end_x, origin.y - end_y);
    (start, end)
}
