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

use crate::playsync::CancelHandle;
use crate::strip::Strip;

mod chase;
mod fill;
mod rainbow;
mod random;
mod stripes;
#[cfg(test)]
mod tests;
mod wipe;

pub use chase::{TheaterChase, TheaterChaseRainbow};
pub use fill::{MiddleFill, SideFill, TriColorSweep};
pub use rainbow::{Rainbow, RainbowCycle, RainbowStripe};
pub use random::{RandomColor, RandomColorFill, RandomPositionFill, RandomWhite, Twinkle};
pub use stripes::CandyCane;
pub use wipe::{AlternateColor, ColorWipe, SolidColorLoop};

/// One lighting pattern step. An effect runs a loop of frames against the
/// strip: mutate some pixels, commit, wait. Effects never report errors;
/// cancellation is a normal termination path and may leave a partially
/// rendered frame on the strip.
pub trait Effect {
    /// The name of this effect, for logging.
    fn name(&self) -> &'static str;

    /// Runs the effect to its natural completion or until the cancel handle
    /// trips, whichever comes first.
    fn run(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle);
}

/// Finishes a frame: polls cancellation, commits the strip, and waits out the
/// frame interval. Returns false if cancellation was observed, in which case
/// nothing was committed and the caller should return immediately.
pub(crate) fn commit_frame(strip: &mut dyn Strip, cancel: &CancelHandle, wait: Duration) -> bool {
    if cancel.is_cancelled() {
        return false;
    }
    strip.show();
    spin_sleep::sleep(wait);
    true
}
