// Copyright 2024 the Lingrad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gradient configurations for exercising backends.

use crate::kurbo::Size;
use crate::{BorderRadii, Color, Error, GradientSurface, RenderContext, UnitPoint};

/// The total number of samples in this module.
pub const SAMPLE_COUNT: usize = 4;

const CORAL: Color = Color::rgb8(0xff, 0x7f, 0x50);
const TEAL: Color = Color::rgb8(0x00, 0x80, 0x80);
const GOLD: Color = Color::rgb8(0xff, 0xd7, 0x00);
const NAVY: Color = Color::rgb8(0x00, 0x00, 0x80);

/// Return a specific sample, or `None` if there is no sample with that number.
pub fn get(number: usize) -> Option<SamplePicture> {
    let (size, setup): (Size, fn(&mut GradientSurface)) = match number {
        0 => (Size::new(200.0, 120.0), top_to_bottom),
        1 => (Size::new(320.0, 120.0), angled_rounded),
        2 => (Size::new(240.0, 240.0), off_center_stops),
        3 => (Size::new(300.0, 160.0), elliptical_diagonal),
        _ => return None,
    };
    Some(SamplePicture { size, setup })
}

/// A surface configuration and the size it is laid out at.
pub struct SamplePicture {
    size: Size,
    setup: fn(&mut GradientSurface),
}

impl SamplePicture {
    pub fn size(&self) -> Size {
        self.size
    }

    /// A surface laid out at this sample's size with its properties set.
    pub fn surface(&self) -> GradientSurface {
        let mut surface = GradientSurface::new();
        surface.set_size(self.size);
        (self.setup)(&mut surface);
        surface
    }

    /// Paint the sample into a render context.
    pub fn draw(&self, rc: &mut impl RenderContext) -> Result<(), Error> {
        self.surface().paint(rc)?;
        rc.status()
    }
}

fn top_to_bottom(surface: &mut GradientSurface) {
    surface.set_colors(vec![CORAL, TEAL]);
}

fn angled_rounded(surface: &mut GradientSurface) {
    surface.set_colors(vec![GOLD, CORAL, NAVY]);
    surface.set_use_angle(true);
    surface.set_angle(60.0);
    surface.set_border_radii(BorderRadii::uniform(24.0));
}

fn off_center_stops(surface: &mut GradientSurface) {
    surface.set_colors(vec![NAVY, TEAL, GOLD]);
    surface.set_locations(Some(vec![0.0, 0.2, 1.0]));
    surface.set_use_angle(true);
    surface.set_angle_center(Some(UnitPoint::new(0.3, 0.7)));
    surface.set_angle(200.0);
    surface.set_border_radii(BorderRadii::new(0.0, 40.0, 0.0, 40.0));
}

fn elliptical_diagonal(surface: &mut GradientSurface) {
    surface.set_colors(vec![TEAL, GOLD]);
    surface.set_start_position(UnitPoint::TOP_LEFT);
    surface.set_end_position(UnitPoint::BOTTOM_RIGHT);
    surface.set_border_radii(BorderRadii::from_array([
        40.0, 20.0, 40.0, 20.0, 40.0, 20.0, 40.0, 20.0,
    ]));
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::NullRenderContext;

    #[test]
    fn every_sample_plans() {
        for number in 0..SAMPLE_COUNT {
            let sample = get(number).unwrap();
            let surface = sample.surface();
            assert!(surface.plan().unwrap().is_finite(), "sample {number}");
            sample.draw(&mut NullRenderContext::new()).unwrap();
        }
        assert!(get(SAMPLE_COUNT).is_none());
    }
}
