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

/// Alternating red and white stripes of a fixed width, shifting by one pixel
/// per frame. Written in reverse order so the last strip pixel is the first
/// logical position: position `p` on frame `f` is red when
/// `(p + f) % (2 * width) < width`, else white.
pub struct CandyCane {
    sets: usize,
    width: usize,
    wait: Duration,
}

impl CandyCane {
    /// Creates a new candy cane effect with stripes of the given width.
    pub fn new(sets: usize, width: usize, wait: Duration) -> CandyCane {
        CandyCane { sets, width, wait }
    }
}

impl Effect for CandyCane {
    fn name(&self) -> &'static str {
        "candy cane"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        for j in 0..self.sets * self.width {
            if cancel.is_cancelled() {
                return;
            }
            for i in 0..strip.len() {
                let color = if (i + j) % (self.width * 2) < self.width {
                    Color::RED
                } else {
                    Color::WHITE
                };
                strip.set_pixel(strip.len() - i - 1, color);
            }
            if !commit_frame(strip, cancel, self.wait) {
                return;
            }
        }
    }
}
