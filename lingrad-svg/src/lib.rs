// Copyright 2024 the Lingrad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG output support for lingrad
//!
//! Every fill becomes a `<linearGradient>` in user space plus a `<rect>`
//! painted with it, clipped by the most recent `<clipPath>`.

#![deny(clippy::trivially_copy_pass_by_ref)]

use std::{fmt, io, mem};

use lingrad::kurbo::{Rect, Size};
use lingrad::{ClipPath, Color, Error, ExtendMode, GradientPlan};
use svg::node::Node;

type Result<T> = std::result::Result<T, Error>;

/// `lingrad::RenderContext` for generating SVG images
pub struct RenderContext {
    stack: Vec<State>,
    state: State,
    doc: svg::Document,
    next_id: u64,
}

impl RenderContext {
    /// Construct an empty `RenderContext`
    pub fn new(size: Option<Size>) -> Self {
        let mut doc = svg::Document::new();
        if let Some(size) = size {
            doc = doc
                .set("viewBox", (0, 0, size.width, size.height))
                .set("width", size.width)
                .set("height", size.height);
        }
        Self {
            stack: Vec::new(),
            state: State::default(),
            doc,
            next_id: 0,
        }
    }

    /// Write graphics rendered so far to an `std::io::Write` impl, such as `std::fs::File`
    ///
    /// Additional rendering can be done afterwards.
    pub fn write(&self, writer: impl io::Write) -> io::Result<()> {
        svg::write(writer, &self.doc)
    }

    /// Returns an object that can write the svg somewhere.
    pub fn display(&self) -> &impl fmt::Display {
        &self.doc
    }

    fn new_id(&mut self) -> Id {
        let x = Id(self.next_id);
        self.next_id += 1;
        x
    }
}

impl lingrad::RenderContext for RenderContext {
    fn status(&mut self) -> Result<()> {
        Ok(())
    }

    fn clip(&mut self, clip: &ClipPath) {
        let id = self.new_id();
        let mut path = svg::node::element::Path::new().set("d", clip.path().to_svg());
        // Nested clips intersect.
        if let Some(outer) = self.state.clip {
            path.assign("clip-path", format!("url(#{})", outer));
        }
        let clip_path = svg::node::element::ClipPath::new().set("id", id).add(path);
        self.doc.append(clip_path);
        self.state.clip = Some(id);
    }

    fn fill(&mut self, rect: Rect, plan: &GradientPlan) -> Result<()> {
        let id = self.new_id();
        let mut gradient = svg::node::element::LinearGradient::new()
            .set("gradientUnits", "userSpaceOnUse")
            .set("id", id)
            .set("x1", plan.start.x)
            .set("y1", plan.start.y)
            .set("x2", plan.end.x)
            .set("y2", plan.end.y)
            .set("spreadMethod", spread_method(plan.extend));
        for stop in plan.gradient_stops() {
            gradient.append(
                svg::node::element::Stop::new()
                    .set("offset", stop.pos)
                    .set("stop-color", fmt_color(stop.color))
                    .set("stop-opacity", fmt_opacity(stop.color)),
            );
        }
        self.doc.append(gradient);

        let mut x = svg::node::element::Rectangle::new()
            .set("x", rect.x0)
            .set("y", rect.y0)
            .set("width", rect.width())
            .set("height", rect.height())
            .set("fill", format!("url(#{})", id));
        if let Some(clip) = self.state.clip {
            x.assign("clip-path", format!("url(#{})", clip));
        }
        self.doc.append(x);
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let new = self.state.clone();
        self.stack.push(mem::replace(&mut self.state, new));
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.state = self.stack.pop().ok_or(Error::StackUnbalance)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if !self.stack.is_empty() {
            log::warn!("finishing svg with {} unrestored states", self.stack.len());
        }
        Ok(())
    }
}

fn spread_method(extend: ExtendMode) -> &'static str {
    match extend {
        ExtendMode::Clamp => "pad",
        ExtendMode::Repeat => "repeat",
        ExtendMode::Reflect => "reflect",
    }
}

#[derive(Debug, Clone, Default)]
struct State {
    clip: Option<Id>,
}

// RGB in hex representation
fn fmt_color(color: Color) -> String {
    format!("#{:06x}", color.as_rgba32() >> 8)
}

// Opacity as value from [0, 1]
fn fmt_opacity(color: Color) -> String {
    format!("{}", color.as_rgba().3)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Id(u64);

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
        let mut x = self.0;
        loop {
            let digit = (x % ALPHABET.len() as u64) as usize;
            write!(f, "{}", ALPHABET[digit] as char)?;
            x /= ALPHABET.len() as u64;
            if x == 0 {
                break;
            }
        }
        Ok(())
    }
}

impl From<Id> for svg::node::Value {
    fn from(x: Id) -> Self {
        x.to_string().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_letters() {
        assert_eq!(Id(0).to_string(), "a");
        assert_eq!(Id(51).to_string(), "Z");
        assert_eq!(Id(52).to_string(), "ab");
    }

    #[test]
    fn colors() {
        let color = Color::rgba8(0x12, 0x34, 0x56, 0xff);
        assert_eq!(fmt_color(color), "#123456");
        assert_eq!(fmt_opacity(color), "1");
        assert_eq!(fmt_opacity(Color::TRANSPARENT), "0");
    }
}
