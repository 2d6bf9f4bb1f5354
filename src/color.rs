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

/// One sixth of the 16-bit hue circle. Hue values are divided by this to find
/// the HSV sector.
const HUE_SECTOR: u16 = 10923;

/// Gamma 2.6 lookup table. Remaps each channel so that brightness steps look
/// perceptually linear on LED strips. Applied after HSV conversion, never
/// before.
const GAMMA_TABLE: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3,
    3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 5, 6, 6, 6, 6, 7,
    7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 10, 11, 11, 11, 12, 12,
    13, 13, 13, 14, 14, 15, 15, 16, 16, 17, 17, 18, 18, 19, 19, 20,
    20, 21, 21, 22, 22, 23, 24, 24, 25, 25, 26, 27, 27, 28, 29, 29,
    30, 31, 31, 32, 33, 34, 34, 35, 36, 37, 38, 38, 39, 40, 41, 42,
    42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57,
    58, 59, 60, 61, 62, 63, 64, 65, 66, 68, 69, 70, 71, 72, 73, 75,
    76, 77, 78, 80, 81, 82, 84, 85, 86, 88, 89, 90, 92, 93, 94, 96,
    97, 99, 100, 102, 103, 105, 106, 108, 109, 111, 112, 114, 115, 117, 119, 120,
    122, 124, 125, 127, 129, 130, 132, 134, 136, 137, 139, 141, 143, 145, 146, 148,
    150, 152, 154, 156, 158, 160, 162, 164, 166, 168, 170, 172, 174, 176, 178, 180,
    182, 184, 186, 188, 191, 193, 195, 197, 199, 202, 204, 206, 209, 211, 213, 215,
    218, 220, 223, 225, 227, 230, 232, 235, 237, 240, 242, 245, 247, 250, 252, 255,
];

/// An RGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const CYAN: Color = Color::new(0, 255, 255);
    pub const MAGENTA: Color = Color::new(255, 0, 255);
    /// The autumn orange used by the fall pattern.
    pub const ORANGE: Color = Color::new(255, 35, 0);
    /// The warm, slightly green-tinged yellow used by the fall pattern.
    pub const GOLD: Color = Color::new(255, 255, 15);

    /// Creates a new color from the given channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Converts an HSV color to RGB. The hue covers the full 16-bit range
    /// (0 = red, wrapping back around to red at 65535), while saturation and
    /// value are 8-bit. Integer six-sector conversion: the hue picks one of
    /// six sectors and the remainder interpolates between the adjacent
    /// primaries.
    pub fn from_hsv(hue: u16, sat: u8, val: u8) -> Color {
        let v = val as u32;
        if sat == 0 {
            return Color::new(val, val, val);
        }

        let s = sat as u32;
        let sector = hue / HUE_SECTOR;
        let f = (hue % HUE_SECTOR) as u32 * 255 / (HUE_SECTOR as u32 - 1);

        let p = v * (255 - s) / 255;
        let q = v * (255 - s * f / 255) / 255;
        let t = v * (255 - s * (255 - f) / 255) / 255;

        let (r, g, b) = match sector {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Color::new(r as u8, g as u8, b as u8)
    }

    /// Returns the gamma corrected version of this color.
    pub fn gamma_corrected(&self) -> Color {
        Color::new(
            GAMMA_TABLE[self.r as usize],
            GAMMA_TABLE[self.g as usize],
            GAMMA_TABLE[self.b as usize],
        )
    }
}

/// Maps a position on a 256-step color wheel to a saturated rainbow color.
/// Cheaper than a full HSV conversion; the bands transition green to red to
/// blue and back, with boundaries at 85 and 170.
pub fn wheel(pos: u8) -> Color {
    if pos < 85 {
        Color::new(pos * 3, 255 - pos * 3, 0)
    } else if pos < 170 {
        let pos = pos - 85;
        Color::new(255 - pos * 3, 0, pos * 3)
    } else {
        let pos = pos - 170;
        Color::new(0, pos * 3, 255 - pos * 3)
    }
}
