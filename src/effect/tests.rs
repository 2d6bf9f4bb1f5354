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

use super::*;
use crate::color::{wheel, Color};
use crate::playsync::CancelHandle;
use crate::strip::Strip;
use crate::testutil::MockStrip;

fn run_effect(effect: &mut dyn Effect, len: usize) -> MockStrip {
    let mut strip = MockStrip::new(len);
    effect.run(&mut strip, &CancelHandle::new());
    strip
}

#[test]
fn test_color_wipe_sets_every_pixel() {
    for len in [1, 2, 9, 30] {
        let mut wipe = ColorWipe::new(Color::RED, Duration::ZERO);
        let strip = run_effect(&mut wipe, len);

        assert_eq!(strip.commits(), len);
        for i in 0..len {
            assert_eq!(strip.get_pixel(i), Color::RED, "pixel {} of {}", i, len);
        }
    }
}

#[test]
fn test_theater_chase_lights_one_residue_class_per_phase() {
    let cycles = 4;
    let len = 10;
    let mut chase = TheaterChase::new(Color::WHITE, Duration::ZERO, cycles);
    let strip = run_effect(&mut chase, len);

    assert_eq!(strip.commits(), cycles * 3);
    for (f, frame) in strip.frames().iter().enumerate() {
        let phase = f % 3;
        for (i, pixel) in frame.iter().enumerate() {
            if i % 3 == phase {
                assert_eq!(*pixel, Color::WHITE, "frame {} pixel {}", f, i);
            } else {
                // Pixels outside the residue class were never touched.
                assert_eq!(*pixel, Color::BLACK, "frame {} pixel {}", f, i);
            }
        }
    }

    // Every phase ends cleared before the next begins.
    for i in 0..len {
        assert_eq!(strip.get_pixel(i), Color::BLACK);
    }
}

#[test]
fn test_theater_chase_with_wider_groups() {
    let mut chase = TheaterChase::new(Color::WHITE, Duration::ZERO, 2).with_group_size(4);
    let strip = run_effect(&mut chase, 8);

    assert_eq!(strip.commits(), 2 * 4);
    for (f, frame) in strip.frames().iter().enumerate() {
        let phase = f % 4;
        for (i, pixel) in frame.iter().enumerate() {
            let expected = if i % 4 == phase {
                Color::WHITE
            } else {
                Color::BLACK
            };
            assert_eq!(*pixel, expected, "frame {} pixel {}", f, i);
        }
    }
}

#[test]
fn test_theater_chase_rainbow_frame_count() {
    let mut chase = TheaterChaseRainbow::new(Duration::ZERO);
    let strip = run_effect(&mut chase, 6);
    assert_eq!(strip.commits(), 90);
}

#[test]
fn test_rainbow_frame_count_and_hue_offsets() {
    let len = 4;
    let mut rainbow = Rainbow::new(Duration::ZERO);
    let strip = run_effect(&mut rainbow, len);

    // Five full loops around the wheel in steps of 256.
    assert_eq!(strip.commits(), 5 * 65536 / 256);
    for (j, frame) in strip.frames().iter().enumerate().step_by(100) {
        let first_pixel_hue = j as u32 * 256;
        for i in 0..len {
            let hue = first_pixel_hue + (i * 65536 / len) as u32;
            let expected = Color::from_hsv(hue as u16, 255, 255).gamma_corrected();
            assert_eq!(frame[i], expected, "frame {} pixel {}", j, i);
        }
    }
}

#[test]
fn test_rainbow_cycle_matches_wheel_formula() {
    let len = 8;
    let mut cycle = RainbowCycle::new(1, Duration::ZERO);
    let strip = run_effect(&mut cycle, len);

    assert_eq!(strip.commits(), 256);
    for (j, frame) in strip.frames().iter().enumerate() {
        for i in 0..len {
            let expected = wheel((((i * 256 / len) + j) & 255) as u8);
            assert_eq!(frame[len - i - 1], expected, "frame {} pixel {}", j, i);
        }
    }
}

#[test]
fn test_rainbow_cycle_is_periodic_every_256_frames() {
    let mut cycle = RainbowCycle::new(2, Duration::ZERO);
    let strip = run_effect(&mut cycle, 8);

    assert_eq!(strip.commits(), 512);
    assert_eq!(strip.frames()[256], strip.frames()[0]);
    assert_eq!(strip.frames()[511], strip.frames()[255]);
}

#[test]
fn test_candy_cane_stripe_boundary() {
    let (sets, width, len) = (3, 4, 10);
    let mut cane = CandyCane::new(sets, width, Duration::ZERO);
    let strip = run_effect(&mut cane, len);

    assert_eq!(strip.commits(), sets * width);
    for (f, frame) in strip.frames().iter().enumerate() {
        for p in 0..len {
            // Logical position p lives at the far end of the strip.
            let expected = if (p + f) % (width * 2) < width {
                Color::RED
            } else {
                Color::WHITE
            };
            assert_eq!(frame[len - p - 1], expected, "frame {} position {}", f, p);
        }
    }
}

#[test]
fn test_rainbow_stripe_six_color_cycle() {
    let (sets, width, len) = (1, 2, 12);
    let mut stripe = RainbowStripe::new(sets, width, Duration::ZERO);
    let strip = run_effect(&mut stripe, len);

    assert_eq!(strip.commits(), sets * width * 6);
    let colors = [
        Color::RED,
        Color::YELLOW,
        Color::GREEN,
        Color::CYAN,
        Color::BLUE,
        Color::MAGENTA,
    ];
    for (f, frame) in strip.frames().iter().enumerate() {
        for p in 0..len {
            let expected = colors[((p + f) / width) % 6];
            assert_eq!(frame[len - p - 1], expected, "frame {} position {}", f, p);
        }
    }
}

#[test]
fn test_alternate_color_end_state_swaps_parity() {
    // ColorWipe then AlternateColor on nine pixels: the alternation's second
    // frame leaves even pixels holding the second color.
    let mut strip = MockStrip::new(9);
    let cancel = CancelHandle::new();

    ColorWipe::new(Color::RED, Duration::ZERO).run(&mut strip, &cancel);
    AlternateColor::new(Color::RED, Color::BLUE, Duration::ZERO, 1).run(&mut strip, &cancel);

    for i in 0..9 {
        let expected = if i % 2 == 0 { Color::BLUE } else { Color::RED };
        assert_eq!(strip.get_pixel(i), expected, "pixel {}", i);
    }
}

#[test]
fn test_alternate_color_commits_two_frames_per_repeat() {
    let mut alternate = AlternateColor::new(Color::RED, Color::GREEN, Duration::ZERO, 3);
    let strip = run_effect(&mut alternate, 4);
    assert_eq!(strip.commits(), 6);
}

#[test]
fn test_cancellation_stops_within_one_frame() {
    // The cancel handle trips during the third commit; no commit happens
    // after cancellation is observed.
    let cancel = CancelHandle::new();
    let mut strip = MockStrip::new(10).cancel_after(cancel.clone(), 3);
    ColorWipe::new(Color::RED, Duration::ZERO).run(&mut strip, &cancel);

    assert_eq!(strip.commits(), 3);
    // The wipe never reached the back of the strip.
    assert_eq!(strip.get_pixel(9), Color::BLACK);
}

#[test]
fn test_cancellation_stops_inner_loop_effects() {
    let cancel = CancelHandle::new();
    let mut strip = MockStrip::new(10).cancel_after(cancel.clone(), 5);
    let rng = SmallRng::seed_from_u64(1);
    RandomColorFill::with_rng(Duration::ZERO, rng).run(&mut strip, &cancel);

    assert_eq!(strip.commits(), 5);
}

#[test]
fn test_solid_color_loop_runs_until_cancelled() {
    let cancel = CancelHandle::new();
    let mut strip = MockStrip::new(5).cancel_after(cancel.clone(), 12);
    SolidColorLoop::new(Color::BLUE, Duration::ZERO).run(&mut strip, &cancel);

    // Three wipes in: the handle trips mid pass and the loop exits.
    assert_eq!(strip.commits(), 12);
}

#[test]
fn test_random_position_fill_terminates_and_lights_all_but_one() {
    for len in [1, 2, 9, 30] {
        let rng = SmallRng::seed_from_u64(42);
        let mut fill = RandomPositionFill::with_rng(Color::GREEN, Duration::ZERO, rng);
        let strip = run_effect(&mut fill, len);

        // One commit per newly lit pixel; stops one short of a full strip.
        let expected_lights = len.saturating_sub(1);
        assert_eq!(strip.commits(), expected_lights, "length {}", len);

        let lit = strip
            .pixels()
            .iter()
            .filter(|pixel| **pixel == Color::GREEN)
            .count();
        assert_eq!(lit, expected_lights, "length {}", len);
    }
}

#[test]
fn test_random_color_fill_leaves_a_color_per_position() {
    let len = 6;
    let seed = 7;
    let rng = SmallRng::seed_from_u64(seed);
    let mut fill = RandomColorFill::with_rng(Duration::ZERO, rng);
    let strip = run_effect(&mut fill, len);

    // One commit per inner sweep step.
    assert_eq!(strip.commits(), len * (len + 1) / 2);

    // Pass i parks its color at position len - i - 1, so the final strip
    // holds the draws in reverse order.
    let mut expected_rng = SmallRng::seed_from_u64(seed);
    let mut draws = Vec::new();
    for _ in 0..len {
        draws.push(Color::new(
            expected_rng.gen(),
            expected_rng.gen(),
            expected_rng.gen(),
        ));
    }
    for k in 0..len {
        assert_eq!(strip.get_pixel(k), draws[len - k - 1], "pixel {}", k);
    }
}

#[test]
fn test_random_white_is_grayscale() {
    let rng = SmallRng::seed_from_u64(3);
    let mut white = RandomWhite::with_rng(4, Duration::ZERO, rng);
    let strip = run_effect(&mut white, 8);

    assert_eq!(strip.commits(), 4);
    for pixel in strip.pixels() {
        assert_eq!(pixel.r, pixel.g);
        assert_eq!(pixel.g, pixel.b);
    }
}

#[test]
fn test_random_color_commits_one_frame_per_set() {
    let rng = SmallRng::seed_from_u64(3);
    let mut random = RandomColor::with_rng(5, Duration::ZERO, rng);
    let strip = run_effect(&mut random, 8);
    assert_eq!(strip.commits(), 5);
}

#[test]
fn test_twinkle_uses_palette_colors_only() {
    let palette = [Color::RED, Color::GOLD, Color::ORANGE];
    let rng = SmallRng::seed_from_u64(9);
    let mut twinkle = Twinkle::with_rng(palette, 20, Duration::ZERO, rng);
    let strip = run_effect(&mut twinkle, 12);

    assert_eq!(strip.commits(), 20 * 3);
    for pixel in strip.pixels() {
        assert!(
            *pixel == Color::BLACK || palette.contains(pixel),
            "unexpected color {:?}",
            pixel
        );
    }
}

#[test]
fn test_tri_color_sweep_interleaves_residue_classes() {
    let colors = [Color::RED, Color::BLUE, Color::WHITE];
    let len = 9;
    let mut sweep = TriColorSweep::new(colors, Duration::ZERO);
    let strip = run_effect(&mut sweep, len);

    assert_eq!(strip.commits(), len);
    for i in 0..len {
        assert_eq!(strip.get_pixel(i), colors[i % 3], "pixel {}", i);
    }
}

#[test]
fn test_middle_fill_clears_back_to_black_on_even_strips() {
    let mut fill = MiddleFill::new(Color::CYAN, Duration::ZERO);
    let strip = run_effect(&mut fill, 6);

    assert_eq!(strip.commits(), 6);
    for i in 0..6 {
        assert_eq!(strip.get_pixel(i), Color::BLACK, "pixel {}", i);
    }
}

#[test]
fn test_middle_fill_leaves_center_pixel_on_odd_strips() {
    let mut fill = MiddleFill::new(Color::CYAN, Duration::ZERO);
    let strip = run_effect(&mut fill, 7);

    for i in 0..7 {
        let expected = if i == 3 { Color::CYAN } else { Color::BLACK };
        assert_eq!(strip.get_pixel(i), expected, "pixel {}", i);
    }
}

#[test]
fn test_side_fill_clear_phase_misses_the_edges() {
    // The clear phase walks outward from the middle, so it never reaches
    // pixel 0 (nor the far end on odd strips). Faithful to the original.
    let mut fill = SideFill::new(Color::MAGENTA, Duration::ZERO);
    let strip = run_effect(&mut fill, 6);
    assert_eq!(strip.get_pixel(0), Color::MAGENTA);
    for i in 1..6 {
        assert_eq!(strip.get_pixel(i), Color::BLACK, "pixel {}", i);
    }

    let mut fill = SideFill::new(Color::MAGENTA, Duration::ZERO);
    let strip = run_effect(&mut fill, 7);
    assert_eq!(strip.get_pixel(0), Color::MAGENTA);
    assert_eq!(strip.get_pixel(6), Color::MAGENTA);
    for i in 1..6 {
        assert_eq!(strip.get_pixel(i), Color::BLACK, "pixel {}", i);
    }
}

#[test]
fn test_effects_tolerate_single_pixel_strips() {
    let cancel = CancelHandle::new();
    let mut effects: Vec<Box<dyn Effect>> = vec![
        Box::new(ColorWipe::new(Color::RED, Duration::ZERO)),
        Box::new(TheaterChase::new(Color::RED, Duration::ZERO, 2)),
        Box::new(CandyCane::new(2, 2, Duration::ZERO)),
        Box::new(RainbowCycle::new(1, Duration::ZERO)),
        Box::new(MiddleFill::new(Color::RED, Duration::ZERO)),
        Box::new(SideFill::new(Color::RED, Duration::ZERO)),
        Box::new(TriColorSweep::new(
            [Color::RED, Color::BLUE, Color::WHITE],
            Duration::ZERO,
        )),
        Box::new(RandomPositionFill::with_rng(
            Color::RED,
            Duration::ZERO,
            SmallRng::seed_from_u64(5),
        )),
    ];
    for effect in &mut effects {
        let mut strip = MockStrip::new(1);
        effect.run(&mut strip, &cancel);
    }
}
