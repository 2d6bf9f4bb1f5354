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

use crate::color::Color;
use crate::playsync::CancelHandle;
use crate::strip::Strip;

/// A strip for tests: keeps a snapshot of the pixel state at every commit and
/// can trip a cancel handle after a configured number of commits, which lets
/// tests bound cancellation latency in commits.
pub(crate) struct MockStrip {
    pixels: Vec<Color>,
    frames: Vec<Vec<Color>>,
    cancel_after: Option<(CancelHandle, usize)>,
}

impl MockStrip {
    /// Creates a new mock strip with the given number of pixels.
    pub(crate) fn new(len: usize) -> MockStrip {
        MockStrip {
            pixels: vec![Color::BLACK; len],
            frames: Vec::new(),
            cancel_after: None,
        }
    }

    /// Trips the given cancel handle once `commits` commits have happened.
    pub(crate) fn cancel_after(mut self, cancel: CancelHandle, commits: usize) -> MockStrip {
        self.cancel_after = Some((cancel, commits));
        self
    }

    /// The number of commits so far.
    pub(crate) fn commits(&self) -> usize {
        self.frames.len()
    }

    /// The pixel snapshots taken at each commit.
    pub(crate) fn frames(&self) -> &[Vec<Color>] {
        &self.frames
    }

    /// The current in-memory pixel values.
    pub(crate) fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

impl Strip for MockStrip {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    fn get_pixel(&self, index: usize) -> Color {
        self.pixels.get(index).copied().unwrap_or(Color::BLACK)
    }

    fn clear(&mut self) {
        self.pixels.fill(Color::BLACK);
    }

    fn show(&mut self) {
        self.frames.push(self.pixels.clone());
        if let Some((cancel, commits)) = &self.cancel_after {
            if self.frames.len() >= *commits {
                cancel.cancel();
            }
        }
    }
}
