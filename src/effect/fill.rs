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

/// Expands a lit region outward from the center over N/2 frames, then turns
/// the strip off from the ends inward over another N/2 frames.
pub struct MiddleFill {
    color: Color,
    wait: Duration,
}

impl MiddleFill {
    /// Creates a new middle fill.
    pub fn new(color: Color, wait: Duration) -> MiddleFill {
        MiddleFill { color, wait }
    }
}

impl Effect for MiddleFill {
    fn name(&self) -> &'static str {
        "middle fill"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        let half = strip.len() / 2;

        for i in 0..half {
            if cancel.is_cancelled() {
                return;
            }
            strip.set_pixel(half + i, self.color);
            strip.set_pixel(half - i, self.color);
            if !commit_frame(strip, cancel, self.wait) {
                return;
            }
        }

        for i in 0..half {
            if cancel.is_cancelled() {
                return;
            }
            strip.set_pixel(i, Color::BLACK);
            strip.set_pixel(strip.len() - i - 1, Color::BLACK);
            if !commit_frame(strip, cancel, self.wait) {
                return;
            }
        }
    }
}

/// Fills the strip inward from both ends over N/2 frames, then turns it off
/// outward from the center over another N/2 frames.
pub struct SideFill {
    color: Color,
    wait: Duration,
}

impl SideFill {
    /// Creates a new side fill.
    pub fn new(color: Color, wait: Duration) -> SideFill {
        SideFill { color, wait }
    }
}

impl Effect for SideFill {
    fn name(&self) -> &'static str {
        "side fill"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        let half = strip.len() / 2;

        for i in 0..half {
            if cancel.is_cancelled() {
                return;
            }
            strip.set_pixel(i, self.color);
            strip.set_pixel(strip.len() - i - 1, self.color);
            if !commit_frame(strip, cancel, self.wait) {
                return;
            }
        }

        for i in 0..half {
            if cancel.is_cancelled() {
                return;
            }
            strip.set_pixel(half + i, Color::BLACK);
            strip.set_pixel(half - i, Color::BLACK);
            if !commit_frame(strip, cancel, self.wait) {
                return;
            }
        }
    }
}

/// Three interleaved color wipes: pixels in residue class k (mod 3) take the
/// k-th color, advancing all three heads by one group per frame until every
/// head has run off the end of the strip. Writes past the end are no-ops.
pub struct TriColorSweep {
    colors: [Color; 3],
    wait: Duration,
}

impl TriColorSweep {
    /// Creates a new tri-color sweep.
    pub fn new(colors: [Color; 3], wait: Duration) -> TriColorSweep {
        TriColorSweep { colors, wait }
    }
}

impl Effect for TriColorSweep {
    fn name(&self) -> &'static str {
        "tri-color sweep"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        let mut heads = [0usize, 1, 2];

        for _ in 0..strip.len() {
            if cancel.is_cancelled() {
                return;
            }
            for (head, color) in heads.iter_mut().zip(self.colors) {
                strip.set_pixel(*head, color);
                *head += 3;
            }
            if !commit_frame(strip, cancel, self.wait) {
                return;
            }
        }
    }
}
