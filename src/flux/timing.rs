use std::fmt;

use log::{info, warn};

// One revolution at 360rpm sampled by a 25MHz clock is 4166667 ticks, plus or minus 2.5%.
const REV25_MIN: f64 = 4_062_500.0;
const REV25_MAX: f64 = 4_270_833.0;

// Transition spacing limits, in 25MHz ticks.
const MIN_CLOCKS: u64 = 60;
const MAX_CLOCKS: u64 = 270;

// Revolution-time multiplier of each recognizable capture setup, relative to 25MHz at 360rpm.
// Checked in order; the first match wins.
const CANDIDATES: [(f64, u32, u16); 6] = [
    (1.0, 25_000_000, 360),
    (1.2, 25_000_000, 300),
    (2.0, 50_000_000, 360),
    (2.4, 50_000_000, 300),
    (4.0, 100_000_000, 360),
    (4.8, 100_000_000, 300),
];

// The sample clock and drive speed a dump was captured with.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct CaptureTiming {
    pub clock_hz: u32,
    pub rpm: u16,
    // False when the revolution time matched no known setup and the default was assumed.
    pub recognized: bool,
}

impl CaptureTiming {
    pub const DEFAULT: CaptureTiming = CaptureTiming { clock_hz: 100_000_000, rpm: 360, recognized: false };

    // Guess the capture setup from the number of ticks one revolution took.
    pub fn classify(onerev_time: u64) -> CaptureTiming {
        let time = onerev_time as f64;
        let matched = CANDIDATES.iter()
            .find(|(multiplier, _, _)| time > REV25_MIN * multiplier && time < REV25_MAX * multiplier);
        match matched {
            Some(&(_, clock_hz, rpm)) => {
                let timing = CaptureTiming { clock_hz, rpm, recognized: true };
                info!("DFI capture guess: {timing}.");
                timing
            }
            None => {
                warn!("Cannot guess DFI capture speed from a revolution of {onerev_time} ticks. Assuming {}.",
                    CaptureTiming::DEFAULT);
                CaptureTiming::DEFAULT
            }
        }
    }

    fn clock_multiple(self) -> u64 {
        u64::from(self.clock_hz / 25_000_000)
    }

    // Transitions this close to the previous one are noise.
    pub fn min_delta(self) -> u64 {
        MIN_CLOCKS * self.clock_multiple()
    }

    // Transitions further apart than this imply one was missed.
    pub fn max_delta(self) -> u64 {
        MAX_CLOCKS * self.clock_multiple()
    }
}

impl fmt::Display for CaptureTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}MHz clock at {}rpm", self.clock_hz / 1_000_000, self.rpm)
    }
}
