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

/// Theater-marquee crawling lights: every group-size-th pixel lights up,
/// commits, then clears before the phase advances by one.
pub struct TheaterChase {
    color: Color,
    wait: Duration,
    cycles: usize,
    group_size: usize,
}

impl TheaterChase {
    /// Creates a new theater chase with the classic group size of 3.
    pub fn new(color: Color, wait: Duration, cycles: usize) -> TheaterChase {
        TheaterChase {
            color,
            wait,
            cycles,
            group_size: 3,
        }
    }

    /// Overrides the pixel group size.
    pub fn with_group_size(mut self, group_size: usize) -> TheaterChase {
        self.group_size = group_size;
        self
    }
}

impl Effect for TheaterChase {
    fn name(&self) -> &'static str {
        "theater chase"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        for _ in 0..self.cycles {
            for phase in 0..self.group_size {
                if cancel.is_cancelled() {
                    return;
                }
                for i in (phase..strip.len()).step_by(self.group_size) {
                    strip.set_pixel(i, self.color);
                }
                if !commit_frame(strip, cancel, self.wait) {
                    return;
                }
                for i in (phase..strip.len()).step_by(self.group_size) {
                    strip.set_pixel(i, Color::BLACK);
                }
            }
        }
    }
}

/// Theater chase where the lit pixels take their hue from their position
/// along the strip, with the whole wheel advancing a step on every sub-frame.
pub struct TheaterChaseRainbow {
    wait: Duration,
}

impl TheaterChaseRainbow {
    /// Creates a new rainbow theater chase.
    pub fn new(wait: Duration) -> TheaterChaseRainbow {
        TheaterChaseRainbow { wait }
    }
}

impl Effect for TheaterChaseRainbow {
    fn name(&self) -> &'static str {
        "theater chase rainbow"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        let mut first_pixel_hue: u32 = 0;

        for _ in 0..30 {
            for phase in 0..3 {
                if cancel.is_cancelled() {
                    return;
                }
                strip.clear();
                for i in (phase..strip.len()).step_by(3) {
                    // One full revolution of the color wheel along the strip.
                    let hue = first_pixel_hue + (i * 65536 / strip.len()) as u32;
                    let color = Color::from_hsv(hue as u16, 255, 255).gamma_corrected();
                    strip.set_pixel(i, color);
                }
                if !commit_frame(strip, cancel, self.wait) {
                    return;
                }
                // One wheel cycle every 90 sub-frames.
                first_pixel_hue += 65536 / 90;
            }
        }
    }
}
