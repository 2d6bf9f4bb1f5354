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

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::color::Color;
use crate::effect::{commit_frame, Effect};
use crate::playsync::CancelHandle;
use crate::strip::Strip;

fn random_color(rng: &mut SmallRng) -> Color {
    Color::new(rng.gen(), rng.gen(), rng.gen())
}

/// Assigns every pixel an independent random grayscale value, repeated over a
/// number of frames.
pub struct RandomWhite {
    sets: usize,
    wait: Duration,
    rng: SmallRng,
}

impl RandomWhite {
    /// Creates a new random grayscale effect.
    pub fn new(sets: usize, wait: Duration) -> RandomWhite {
        RandomWhite::with_rng(sets, wait, SmallRng::from_entropy())
    }

    /// Creates a new random grayscale effect with the given RNG.
    pub fn with_rng(sets: usize, wait: Duration, rng: SmallRng) -> RandomWhite {
        RandomWhite { sets, wait, rng }
    }
}

impl Effect for RandomWhite {
    fn name(&self) -> &'static str {
        "random white"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        for _ in 0..self.sets {
            if cancel.is_cancelled() {
                return;
            }
            for i in 0..strip.len() {
                let v: u8 = self.rng.gen();
                strip.set_pixel(i, Color::new(v, v, v));
            }
            if !commit_frame(strip, cancel, self.wait) {
                return;
            }
        }
    }
}

/// Assigns every pixel an independent random color, repeated over a number of
/// frames.
pub struct RandomColor {
    sets: usize,
    wait: Duration,
    rng: SmallRng,
}

impl RandomColor {
    /// Creates a new random color effect.
    pub fn new(sets: usize, wait: Duration) -> RandomColor {
        RandomColor::with_rng(sets, wait, SmallRng::from_entropy())
    }

    /// Creates a new random color effect with the given RNG.
    pub fn with_rng(sets: usize, wait: Duration, rng: SmallRng) -> RandomColor {
        RandomColor { sets, wait, rng }
    }
}

impl Effect for RandomColor {
    fn name(&self) -> &'static str {
        "random color"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        for _ in 0..self.sets {
            if cancel.is_cancelled() {
                return;
            }
            for i in 0..strip.len() {
                let color = random_color(&mut self.rng);
                strip.set_pixel(i, color);
            }
            if !commit_frame(strip, cancel, self.wait) {
                return;
            }
        }
    }
}

/// A single randomly colored pixel sweeps the unlit portion of the strip,
/// leaving one pixel of its color behind at the far end of each sweep. Each
/// outer pass draws a fresh random color, so the strip gradually fills with a
/// random color per position.
pub struct RandomColorFill {
    wait: Duration,
    rng: SmallRng,
}

impl RandomColorFill {
    /// Creates a new random color fill.
    pub fn new(wait: Duration) -> RandomColorFill {
        RandomColorFill::with_rng(wait, SmallRng::from_entropy())
    }

    /// Creates a new random color fill with the given RNG.
    pub fn with_rng(wait: Duration, rng: SmallRng) -> RandomColorFill {
        RandomColorFill { wait, rng }
    }
}

impl Effect for RandomColorFill {
    fn name(&self) -> &'static str {
        "random color fill"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        for i in 0..strip.len() {
            if cancel.is_cancelled() {
                return;
            }
            let color = random_color(&mut self.rng);

            // Sweep over the pixels that haven't been filled yet, turning the
            // previous pixel off as the lit one advances. The original code
            // wrote to index -1 on the first step; that write was an
            // out-of-range no-op, preserved here by skipping it.
            for j in 0..strip.len() - i {
                if cancel.is_cancelled() {
                    return;
                }
                if j > 0 {
                    strip.set_pixel(j - 1, Color::BLACK);
                }
                strip.set_pixel(j, color);
                if !commit_frame(strip, cancel, self.wait) {
                    return;
                }
            }
        }
    }
}

/// Lights uniformly random unlit pixels one at a time. Stops once all but one
/// pixel is lit; the original terminated at N-1 lights, so the last pixel is
/// never guaranteed to be lit.
pub struct RandomPositionFill {
    color: Color,
    wait: Duration,
    rng: SmallRng,
}

impl RandomPositionFill {
    /// Creates a new random position fill.
    pub fn new(color: Color, wait: Duration) -> RandomPositionFill {
        RandomPositionFill::with_rng(color, wait, SmallRng::from_entropy())
    }

    /// Creates a new random position fill with the given RNG.
    pub fn with_rng(color: Color, wait: Duration, rng: SmallRng) -> RandomPositionFill {
        RandomPositionFill { color, wait, rng }
    }
}

impl Effect for RandomPositionFill {
    fn name(&self) -> &'static str {
        "random position fill"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        let mut used = vec![false; strip.len()];
        let mut lights = 0;

        while lights + 1 < strip.len() {
            if cancel.is_cancelled() {
                return;
            }
            let j = self.rng.gen_range(0..strip.len());
            if !used[j] {
                strip.set_pixel(j, self.color);
                used[j] = true;
                lights += 1;
                if !commit_frame(strip, cancel, self.wait) {
                    return;
                }
            }
        }
    }
}

/// Twinkles random pixels in a three-color palette: each round lights one
/// uniformly random pixel per palette color, committing after each.
pub struct Twinkle {
    colors: [Color; 3],
    count: usize,
    wait: Duration,
    rng: SmallRng,
}

impl Twinkle {
    /// Creates a new twinkle effect running for the given number of rounds.
    pub fn new(colors: [Color; 3], count: usize, wait: Duration) -> Twinkle {
        Twinkle::with_rng(colors, count, wait, SmallRng::from_entropy())
    }

    /// Creates a new twinkle effect with the given RNG.
    pub fn with_rng(colors: [Color; 3], count: usize, wait: Duration, rng: SmallRng) -> Twinkle {
        Twinkle {
            colors,
            count,
            wait,
            rng,
        }
    }
}

impl Effect for Twinkle {
    fn name(&self) -> &'static str {
        "twinkle"
    }

    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        if strip.is_empty() {
            return;
        }
        for _ in 0..self.count {
            for color in self.colors {
                if cancel.is_cancelled() {
                    return;
                }
                let i = self.rng.gen_range(0..strip.len());
                strip.set_pixel(i, color);
                if !commit_frame(strip, cancel, self.wait) {
                    return;
                }
            }
        }
    }
}
