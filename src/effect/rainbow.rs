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

use crate::color::{wheel, Color};
use crate::effect::{commit_frame, Effect};
use crate::playsync::CancelHandle;
use crate::strip::Strip;

/// A flowing rainbow along the whole strip. The hue of the first pixel runs
/// five complete loops around the color wheel in steps of 256; every pixel is
/// offset so one full revolution spans the strip. Colors are gamma corrected
/// after HSV conversion.
pub struct Rainbow {
    wait: Duration,
}

impl Rainbow {
    /// Creates a new rainbow effect.
    pub fn new(wait: Duration) -> Rainbow {
        Rainbow { wait }
    }
}

impl Effect for Rainbow {
    fn name(&self) -> &'static str {
        "rainbow"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        for first_pixel_hue in (0..5 * 65536u32).step_by(256) {
            if cancel.is_cancelled() {
                return;
            }
            for i in 0..strip.len() {
                let pixel_hue = first_pixel_hue + (i * 65536 / strip.len()) as u32;
                let color = Color::from_hsv(pixel_hue as u16, 255, 255).gamma_corrected();
                strip.set_pixel(i, color);
            }
            if !commit_frame(strip, cancel, self.wait) {
                return;
            }
        }
    }
}

/// Sweeps the 256-step color wheel across the strip, writing in reverse
/// pixel order. Pixel `i` on frame `j` holds `wheel(((i * 256 / N) + j) & 255)`.
pub struct RainbowCycle {
    sets: usize,
    wait: Duration,
}

impl RainbowCycle {
    /// Creates a new rainbow cycle.
    pub fn new(sets: usize, wait: Duration) -> RainbowCycle {
        RainbowCycle { sets, wait }
    }
}

impl Effect for RainbowCycle {
    fn name(&self) -> &'static str {
        "rainbow cycle"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        for j in 0..256 * self.sets {
            if cancel.is_cancelled() {
                return;
            }
            for i in 0..strip.len() {
                let pos = ((i * 256 / strip.len()) + j) & 255;
                strip.set_pixel(strip.len() - i - 1, wheel(pos as u8));
            }
            if !commit_frame(strip, cancel, self.wait) {
                return;
            }
        }
    }
}

/// Six-color stripe cycle (red, yellow, green, cyan, blue, magenta) marching
/// along the strip in reverse pixel order, one pixel per frame.
pub struct RainbowStripe {
    sets: usize,
    width: usize,
    wait: Duration,
}

impl RainbowStripe {
    const COLORS: [Color; 6] = [
        Color::RED,
        Color::YELLOW,
        Color::GREEN,
        Color::CYAN,
        Color::BLUE,
        Color::MAGENTA,
    ];

    /// Creates a new rainbow stripe effect with stripes of the given width.
    pub fn new(sets: usize, width: usize, wait: Duration) -> RainbowStripe {
        RainbowStripe { sets, width, wait }
    }
}

impl Effect for RainbowStripe {
    fn name(&self) -> &'static str {
        "rainbow stripe"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        for j in 0..self.sets * self.width * 6 {
            if cancel.is_cancelled() {
                return;
            }
            for i in 0..strip.len() {
                let color = RainbowStripe::COLORS[((i + j) / self.width) % 6];
                strip.set_pixel(strip.len() - i - 1, color);
            }
            if !commit_frame(strip, cancel, self.wait) {
                return;
            }
        }
    }
}
