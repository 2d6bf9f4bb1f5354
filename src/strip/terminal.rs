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
use std::io::{self, Write};

use crate::color::Color;
use crate::strip::{BufferStrip, Strip};

/// A strip that renders to the terminal as a row of truecolor blocks,
/// redrawn in place on every commit. Lets the engine run without LED
/// hardware attached.
pub struct TerminalStrip {
    buffer: BufferStrip,
}

impl TerminalStrip {
    /// Creates a new terminal strip with the given number of pixels.
    pub fn new(len: usize) -> TerminalStrip {
        TerminalStrip {
            buffer: BufferStrip::new(len),
        }
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "\r")?;
        for pixel in self.buffer.pixels() {
            write!(out, "\x1b[38;2;{};{};{}m\u{2588}", pixel.r, pixel.g, pixel.b)?;
        }
        write!(out, "\x1b[0m")?;
        out.flush()
    }
}

impl Strip for TerminalStrip {
    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn set_pixel(&mut self, index: usize, color: Color) {
        self.buffer.set_pixel(index, color);
    }

    fn get_pixel(&self, index: usize) -> Color {
        self.buffer.get_pixel(index)
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn show(&mut self) {
        // A failed write to stdout is not actionable mid-frame.
        let _ = self.render(&mut io::stdout().lock());
    }
}
