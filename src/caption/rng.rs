//! Injectable randomness for tier, template, and shuffle draws.
//!
//! Everything random in the composition path goes through [`Roller`] so
//! tests can force a specific tier or template.

use rand::Rng;

/// A source of uniform random draws.
pub trait Roller {
    /// Uniform draw in `[0, upper)`. Callers must pass `upper >= 1`.
    fn roll(&mut self, upper: u32) -> u32;
}

/// Production roller backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRoller;

impl Roller for ThreadRoller {
    fn roll(&mut self, upper: u32) -> u32 {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Replays a fixed sequence of rolls, then yields 0 forever.
///
/// The trailing zeros matter for exhaustion-path tests: the caption loop
/// keeps drawing until its chance counter tops out, and a scripted roller
/// that panicked on an empty script would make those tests unwritable.
#[derive(Debug, Default)]
pub struct ScriptedRoller {
    rolls: std::collections::VecDeque<u32>,
}

impl ScriptedRoller {
    pub fn new(rolls: &[u32]) -> Self {
        ScriptedRoller {
            rolls: rolls.iter().copied().collect(),
        }
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, upper: u32) -> u32 {
        self.rolls.pop_front().map_or(0, |r| r.min(upper - 1))
    }
}
