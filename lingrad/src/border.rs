// Copyright 2024 the Lingrad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rounded clip paths from per-corner border radii.

use std::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Arc, BezPath, Point, Rect, Shape, Size, Vec2};

use crate::Error;

/// The default accuracy used when approximating corner arcs with curves.
pub const DEFAULT_ARC_TOLERANCE: f64 = 0.1;

/// Radii of the four corners of a rounded rectangle, in pixels.
///
/// Each corner has its own horizontal and vertical radius, so corners are
/// quarter ellipses. A corner with either radius at zero is square.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderRadii {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
}

impl BorderRadii {
    /// Square corners.
    pub const ZERO: BorderRadii = BorderRadii::uniform(0.0);

    /// The same circular radius on every corner.
    pub const fn uniform(radius: f64) -> BorderRadii {
        BorderRadii::new(radius, radius, radius, radius)
    }

    /// A circular radius per corner, clockwise from the top-left.
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        BorderRadii {
            top_left: Vec2::new(top_left, top_left),
            top_right: Vec2::new(top_right, top_right),
            bottom_right: Vec2::new(bottom_right, bottom_right),
            bottom_left: Vec2::new(bottom_left, bottom_left),
        }
    }

    /// Radii from the `x, y` pairs of each corner, clockwise from the top-left.
    pub const fn from_array(radii: [f64; 8]) -> BorderRadii {
        let [tlx, tly, trx, try_, brx, bry, blx, bly] = radii;
        BorderRadii {
            top_left: Vec2::new(tlx, tly),
            top_right: Vec2::new(trx, try_),
            bottom_right: Vec2::new(brx, bry),
            bottom_left: Vec2::new(blx, bly),
        }
    }

    /// Radii from a list as handed over by a host.
    ///
    /// Eight values are the `x, y` pairs of each corner, four values are one
    /// circular radius per corner; both run clockwise from the top-left.
    /// Any other length is [`Error::InvalidInput`].
    pub fn from_slice(radii: &[f64]) -> Result<BorderRadii, Error> {
        match *radii {
            [tl, tr, br, bl] => Ok(BorderRadii::new(tl, tr, br, bl)),
            [..] => <[f64; 8]>::try_from(radii)
                .map(BorderRadii::from_array)
                .map_err(|_| Error::InvalidInput),
        }
    }

    /// The `x, y` pairs of each corner, clockwise from the top-left.
    pub const fn to_array(self) -> [f64; 8] {
        [
            self.top_left.x,
            self.top_left.y,
            self.top_right.x,
            self.top_right.y,
            self.bottom_right.x,
            self.bottom_right.y,
            self.bottom_left.x,
            self.bottom_left.y,
        ]
    }

    /// Multiply every radius, for instance to go from logical units to pixels.
    pub fn scale(self, factor: f64) -> BorderRadii {
        BorderRadii {
            top_left: self.top_left * factor,
            top_right: self.top_right * factor,
            bottom_right: self.bottom_right * factor,
            bottom_left: self.bottom_left * factor,
        }
    }

    /// Every corner is square.
    pub fn is_square(&self) -> bool {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
        .iter()
        .all(|r| !is_round(*r))
    }
}

impl From<[f64; 8]> for BorderRadii {
    fn from(radii: [f64; 8]) -> BorderRadii {
        BorderRadii::from_array(radii)
    }
}

impl TryFrom<&[f64]> for BorderRadii {
    type Error = Error;

    fn try_from(radii: &[f64]) -> Result<BorderRadii, Error> {
        BorderRadii::from_slice(radii)
    }
}

/// The outline a gradient is clipped to.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipPath {
    path: BezPath,
    size: Size,
}

impl ClipPath {
    /// The outline, in surface pixels.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// The size of the surface the outline was built for.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The rectangle the outline is inscribed in.
    pub fn bounds(&self) -> Rect {
        self.size.to_rect()
    }
}

/// Build the clip outline for a surface of `size` with the given corners.
///
/// The outline is closed and runs clockwise on screen, starting where the
/// top-left corner meets the top edge. Radii are used as given; radii that
/// add up to more than a side are left for the renderer to deal with.
///
/// ```
/// use lingrad::{build_clip_path, BorderRadii, DEFAULT_ARC_TOLERANCE};
/// use lingrad::kurbo::{Rect, Shape, Size};
///
/// let size = Size::new(120.0, 80.0);
/// let clip = build_clip_path(size, &BorderRadii::ZERO, DEFAULT_ARC_TOLERANCE);
/// assert_eq!(clip.path().bounding_box(), Rect::new(0.0, 0.0, 120.0, 80.0));
/// ```
pub fn build_clip_path(size: Size, radii: &BorderRadii, tolerance: f64) -> ClipPath {
    let Size { width, height } = size;
    let mut path = BezPath::new();

    let BorderRadii {
        top_left: tl,
        top_right: tr,
        bottom_right: br,
        bottom_left: bl,
    } = *radii;

    let start_x = if is_round(tl) { tl.x } else { 0.0 };
    path.move_to(Point::new(start_x, 0.0));
    corner(
        &mut path,
        Point::new(width, 0.0),
        Point::new(width - tr.x, tr.y),
        tr,
        -FRAC_PI_2,
        tolerance,
    );
    corner(
        &mut path,
        Point::new(width, height),
        Point::new(width - br.x, height - br.y),
        br,
        0.0,
        tolerance,
    );
    corner(
        &mut path,
        Point::new(0.0, height),
        Point::new(bl.x, height - bl.y),
        bl,
        FRAC_PI_2,
        tolerance,
    );
    // A square top-left corner is the start point, closing reaches it.
    if is_round(tl) {
        corner(&mut path, Point::ZERO, Point::new(tl.x, tl.y), tl, PI, tolerance);
    }
    path.close_path();

    ClipPath { path, size }
}

fn is_round(radius: Vec2) -> bool {
    radius.x != 0.0 && radius.y != 0.0
}

/// Line up to a corner and round it with a clockwise quarter ellipse.
fn corner(
    path: &mut BezPath,
    vertex: Point,
    center: Point,
    radii: Vec2,
    start_angle: f64,
    tolerance: f64,
) {
    if !is_round(radii) {
        path.line_to(vertex);
        return;
    }
    let arc = Arc {
        center,
        radii,
        start_angle,
        sweep_angle: FRAC_PI_2,
        x_rotation: 0.0,
    };
    let (sin, cos) = start_angle.sin_cos();
    path.line_to(center + Vec2::new(radii.x * cos, radii.y * sin));
    path.extend(arc.append_iter(tolerance));
}

impl Shape for ClipPath {
    type PathElementsIter<'iter> = <BezPath as Shape>::PathElementsIter<'iter>;

    fn path_elements(&self, tolerance: f64) -> Self::PathElementsIter<'_> {
        self.path.path_elements(tolerance)
    }

    fn area(&self) -> f64 {
        self.path.area()
    }

    fn perimeter(&self, accuracy: f64) -> f64 {
        self.path.perimeter(accuracy)
    }

    fn winding(&self, pt: Point) -> i32 {
        self.path.winding(pt)
    }

    fn bounding_box(&self) -> Rect {
        self.path.bounding_box()
    }

    fn as_path_slice(&self) -> Option<&[kurbo::PathEl]> {
        self.path.as_path_slice()
    }
}
