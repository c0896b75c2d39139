// Copyright 2024 the Lingrad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inputs and outputs survive a trip through JSON.

#![cfg(feature = "serde")]

use lingrad::kurbo::Size;
use lingrad::{
    BorderRadii, ClipPath, Color, ExtendMode, GradientPlan, GradientState, GradientStop,
    GradientSurface, UnitPoint,
};

fn surface() -> GradientSurface {
    let mut surface = GradientSurface::new();
    surface.set_size(Size::new(160.0, 90.0));
    surface.set_colors(vec![Color::rgb8(0xff, 0x7f, 0x50), Color::BLACK]);
    surface.set_locations(Some(vec![0.25, 1.0]));
    surface.set_use_angle(true);
    surface.set_angle(30.0);
    surface.set_angle_center(Some(UnitPoint::new(0.25, 0.5)));
    surface.set_extend_mode(ExtendMode::Repeat);
    surface.set_border_radii(BorderRadii::from_array([
        12.0, 6.0, 0.0, 0.0, 8.0, 8.0, 4.0, 2.0,
    ]));
    surface
}

#[test]
fn state_round_trip() {
    let surface = surface();
    let json = serde_json::to_string(surface.state()).unwrap();
    let state: GradientState = serde_json::from_str(&json).unwrap();
    assert_eq!(&state, surface.state());
    assert_eq!(state.compute(surface.config()).plan.as_ref(), surface.plan());
}

#[test]
fn plan_round_trip() {
    let surface = surface();
    let plan = surface.plan().unwrap();
    let json = serde_json::to_string(plan).unwrap();
    let back: GradientPlan = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, plan);

    let stops = plan.gradient_stops();
    let json = serde_json::to_string(&stops).unwrap();
    let back: Vec<GradientStop> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, stops);
}

#[test]
fn clip_path_round_trip() {
    let surface = surface();
    let json = serde_json::to_string(surface.clip_path()).unwrap();
    let clip: ClipPath = serde_json::from_str(&json).unwrap();
    assert_eq!(&clip, surface.clip_path());
    assert_eq!(clip.size(), Size::new(160.0, 90.0));
}
