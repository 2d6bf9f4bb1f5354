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

pub mod terminal;

/// A fixed-length ordered surface of RGB pixels. Mutations are in-memory;
/// `show` commits the current values to the underlying display and is the one
/// operation allowed to be slow. Every index always holds a defined color,
/// black before the first write.
pub trait Strip {
    /// The number of pixels on the strip.
    fn len(&self) -> usize;

    /// Returns true if the strip has no pixels.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sets the pixel at the given index. Out of range writes are silently
    /// ignored; the effects rely on this for their boundary arithmetic.
    fn set_pixel(&mut self, index: usize, color: Color);

    /// Gets the pixel at the given index, or black if out of range.
    fn get_pixel(&self, index: usize) -> Color;

    /// Sets every pixel to black. In-memory only; does not commit.
    fn clear(&mut self);

    /// Commits the in-memory pixel values to the display.
    fn show(&mut self);
}

/// A plain in-memory strip. `show` is a no-op; useful as a render target when
/// the committed frames are read back rather than displayed.
pub struct BufferStrip {
    pixels: Vec<Color>,
}

impl BufferStrip {
    /// Creates a new buffer strip with the given number of pixels, all black.
    pub fn new(len: usize) -> BufferStrip {
        BufferStrip {
            pixels: vec![Color::BLACK; len],
        }
    }

    /// The current pixel values.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

impl Strip for BufferStrip {
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

    fn show(&mut self) {}
}
