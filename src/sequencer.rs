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
use tracing::info;

use crate::pattern::Pattern;
use crate::playsync::CancelHandle;
use crate::strip::Strip;

/// Plays patterns on a strip. The sequencer exclusively borrows the strip for
/// the duration of a run, so exactly one effect is ever mutating it.
pub struct Sequencer<'a> {
    strip: &'a mut dyn Strip,
}

impl<'a> Sequencer<'a> {
    /// Creates a new sequencer over the given strip.
    pub fn new(strip: &'a mut dyn Strip) -> Sequencer<'a> {
        Sequencer { strip }
    }

    /// Plays the pattern's effect list in order, restarting from the first
    /// effect when the list is exhausted, until cancellation is observed.
    /// Returns as soon as any effect observes cancellation; a later run always
    /// starts over from the pattern's first effect.
    pub fn run(&mut self, pattern: &mut Pattern, cancel: &CancelHandle) {
        info!("Starting pattern '{}'", pattern.name());
        while !cancel.is_cancelled() {
            pattern.run_once(self.strip, cancel);
        }
        info!("Pattern '{}' stopped", pattern.name());
    }
}
