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
use crate::effect::{
    AlternateColor, CandyCane, ColorWipe, Effect, MiddleFill, Rainbow, RainbowCycle, RainbowStripe,
    RandomColor, RandomColorFill, RandomPositionFill, RandomWhite, SideFill, SolidColorLoop,
    TheaterChase, TheaterChaseRainbow, TriColorSweep, Twinkle,
};
use crate::playsync::CancelHandle;
use crate::strip::Strip;

/// Typed error for pattern construction, so division-by-zero in the effects'
/// position arithmetic is ruled out before a run starts.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
    #[error("the strip must have at least one pixel")]
    EmptyStrip,
}

/// A named, fixed, ordered list of effects. The sequencer plays the list from
/// the start and restarts it when exhausted.
pub struct Pattern {
    name: String,
    effects: Vec<Box<dyn Effect>>,
}

impl Pattern {
    /// The names of the built-in patterns.
    pub const NAMES: [&'static str; 7] =
        ["fall", "july", "xmas", "normal", "alert", "blue", "pink"];

    /// Builds the built-in pattern with the given name, validating that the
    /// strip it will run against has at least one pixel.
    pub fn by_name(name: &str, pixels: usize) -> Result<Pattern, PatternError> {
        if pixels == 0 {
            return Err(PatternError::EmptyStrip);
        }
        match name {
            "fall" => Ok(Pattern::fall()),
            "july" => Ok(Pattern::july()),
            "xmas" => Ok(Pattern::xmas()),
            "normal" => Ok(Pattern::normal()),
            "alert" => Ok(Pattern::solid("alert", Color::MAGENTA, Duration::from_millis(50))),
            "blue" => Ok(Pattern::solid("blue", Color::BLUE, Duration::from_millis(255))),
            "pink" => Ok(Pattern::solid("pink", Color::MAGENTA, Duration::from_millis(255))),
            other => Err(PatternError::UnknownPattern(other.to_string())),
        }
    }

    /// Creates a pattern from an explicit effect list.
    pub fn new(name: &str, effects: Vec<Box<dyn Effect>>) -> Pattern {
        Pattern {
            name: name.to_string(),
            effects,
        }
    }

    /// The name of this pattern.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs each effect in order once, stopping early if cancelled.
    pub(crate) fn run_once(&mut self, strip: &mut dyn Strip, cancel: &CancelHandle) {
        for effect in &mut self.effects {
            if cancel.is_cancelled() {
                return;
            }
            tracing::debug!("Running effect '{}'", effect.name());
            effect.run(strip, cancel);
        }
    }

    /// Autumn colors: red, gold and orange wipes and chases, then an
    /// interleaved sweep and twinkling.
    fn fall() -> Pattern {
        let ms = Duration::from_millis;
        Pattern::new(
            "fall",
            vec![
                Box::new(ColorWipe::new(Color::RED, ms(20))),
                Box::new(ColorWipe::new(Color::GOLD, ms(20))),
                Box::new(ColorWipe::new(Color::ORANGE, ms(20))),
                Box::new(TheaterChase::new(Color::GOLD, ms(30), 5)),
                Box::new(TheaterChase::new(Color::RED, ms(30), 5)),
                Box::new(TheaterChase::new(Color::ORANGE, ms(30), 5)),
                Box::new(TriColorSweep::new(
                    [Color::RED, Color::ORANGE, Color::GOLD],
                    ms(50),
                )),
                Box::new(Twinkle::new(
                    [Color::RED, Color::GOLD, Color::ORANGE],
                    200,
                    ms(50),
                )),
            ],
        )
    }

    /// Patriotic red, white and blue.
    fn july() -> Pattern {
        let ms = Duration::from_millis;
        Pattern::new(
            "july",
            vec![
                Box::new(ColorWipe::new(Color::RED, ms(50))),
                Box::new(ColorWipe::new(Color::WHITE, ms(50))),
                Box::new(ColorWipe::new(Color::BLUE, ms(50))),
                Box::new(TheaterChase::new(Color::WHITE, ms(50), 10)),
                Box::new(TheaterChase::new(Color::RED, ms(50), 10)),
                Box::new(TheaterChase::new(Color::BLUE, ms(50), 10)),
                Box::new(TriColorSweep::new(
                    [Color::RED, Color::BLUE, Color::WHITE],
                    ms(50),
                )),
                Box::new(Twinkle::new(
                    [Color::RED, Color::WHITE, Color::BLUE],
                    200,
                    ms(50),
                )),
            ],
        )
    }

    /// The big holiday playlist: stripes, random fills, wipes in six colors,
    /// wheel cycles, red/green alternation and the fill family, ending with a
    /// wipe to black.
    fn xmas() -> Pattern {
        let ms = Duration::from_millis;
        let mut effects: Vec<Box<dyn Effect>> = vec![
            Box::new(CandyCane::new(30, 8, ms(50))),
            Box::new(RainbowStripe::new(5, 4, ms(75))),
            Box::new(RandomWhite::new(50, ms(200))),
            Box::new(RandomColor::new(50, ms(200))),
        ];
        for color in [
            Color::RED,
            Color::YELLOW,
            Color::GREEN,
            Color::CYAN,
            Color::BLUE,
            Color::MAGENTA,
        ] {
            effects.push(Box::new(ColorWipe::new(color, ms(50))));
        }
        effects.push(Box::new(RainbowCycle::new(10, ms(2))));
        effects.push(Box::new(AlternateColor::new(
            Color::RED,
            Color::GREEN,
            ms(100),
            50,
        )));
        effects.push(Box::new(RandomColorFill::new(ms(10))));
        for color in [
            Color::BLUE,
            Color::GREEN,
            Color::MAGENTA,
            Color::RED,
            Color::YELLOW,
        ] {
            effects.push(Box::new(RandomPositionFill::new(color, ms(50))));
        }
        for color in [
            Color::RED,
            Color::YELLOW,
            Color::WHITE,
            Color::GREEN,
            Color::MAGENTA,
            Color::CYAN,
        ] {
            effects.push(Box::new(MiddleFill::new(color, ms(50))));
        }
        for color in [
            Color::RED,
            Color::YELLOW,
            Color::RED,
            Color::YELLOW,
            Color::WHITE,
            Color::GREEN,
            Color::MAGENTA,
            Color::CYAN,
        ] {
            effects.push(Box::new(SideFill::new(color, ms(50))));
        }
        effects.push(Box::new(ColorWipe::new(Color::BLACK, ms(5))));
        Pattern::new("xmas", effects)
    }

    /// Primary color wipes, half-brightness chases, and the two rainbow
    /// variants.
    fn normal() -> Pattern {
        let ms = Duration::from_millis;
        Pattern::new(
            "normal",
            vec![
                Box::new(ColorWipe::new(Color::RED, ms(50))),
                Box::new(ColorWipe::new(Color::GREEN, ms(50))),
                Box::new(ColorWipe::new(Color::BLUE, ms(50))),
                Box::new(TheaterChase::new(Color::new(127, 127, 127), ms(50), 10)),
                Box::new(TheaterChase::new(Color::new(127, 0, 0), ms(50), 10)),
                Box::new(TheaterChase::new(Color::new(0, 0, 127), ms(50), 10)),
                Box::new(Rainbow::new(ms(10))),
                Box::new(TheaterChaseRainbow::new(ms(50))),
            ],
        )
    }

    /// A single solid color wiped in a loop. Collapses the old per-color
    /// pattern variants into one parameterized playlist entry.
    fn solid(name: &str, color: Color, wait: Duration) -> Pattern {
        Pattern::new(name, vec![Box::new(SolidColorLoop::new(color, wait))])
    }
}
