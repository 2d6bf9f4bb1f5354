// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use std::time::Duration;

use crate::color::Color;
use crate::effect::{commit_frame, Effect};
use crate::playsync::CancelHandle;
use crate::strip::Strip;

/// Fills the strip with a single color one pixel at a time, committing after
/// each pixel.
pub struct ColorWipe {
    color: Color,
    wait: Duration,
}

impl ColorWipe {
    /// Creates a new color wipe.
    pub fn new(color: Color, wait: Duration) -> ColorWipe {
        ColorWipe { color, wait }
    }
}

impl Effect for ColorWipe {
    fn name(&self) -> &'static str {
        "color wipe"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        for i in 0..strip.len() {
            if cancel.is_cancelled() {
                return;
            }
            strip.set_pixel(i, self.color);
            if !commit_frame(strip, cancel, self.wait) {
                return;
            }
        }
    }
}

/// Wipes a single color over and over until cancelled. This replaces the
/// per-color solid pattern variants with one parameterized effect.
pub struct SolidColorLoop {
    wipe: ColorWipe,
}

impl SolidColorLoop {
    /// Creates a new solid color loop.
    pub fn new(color: Color, wait: Duration) -> SolidColorLoop {
        SolidColorLoop {
            wipe: ColorWipe::new(color, wait),
        }
    }
}

impl Effect for SolidColorLoop {
    fn name(&self) -> &'static str {
        "solid color loop"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        while !cancel.is_cancelled() {
            self.wipe.run(strip, cancel);
        }
    }
}

/// Flips the strip between two alternating colorings: even pixels hold the
/// first color and odd pixels the second, then the assignment swaps. Each
/// repeat is one such two-frame flip.
pub struct AlternateColor {
    color_a: Color,
    color_b: Color,
    wait: Duration,
    repeats: usize,
}

impl AlternateColor {
    /// Creates a new alternating color effect.
    pub fn new(color_a: Color, color_b: Color, wait: Duration, repeats: usize) -> AlternateColor {
        AlternateColor {
            color_a,
            color_b,
            wait,
            repeats,
        }
    }

    fn paint(strip: &mut dyn Strip, even: Color, odd: Color) {
        for i in 0..strip.len() {
            strip.set_pixel(i, if i % 2 == 0 { even } else { odd });
        }
    }
}

impl Effect for AlternateColor {
    fn name(&self) -> &'static str {
        "alternate color"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        for _ in 0..self.repeats {
            if cancel.is_cancelled() {
                return;
            }
            AlternateColor::paint(strip, self.color_a, self.color_b);
            if !commit_frame(strip, cancel, self.wait) {
                return;
            }

            AlternateColor::paint(strip, self.color_b, self.color_a);
            if !commit_frame(strip, cancel, self.wait) {
                return;
            }
        }
    }
}
