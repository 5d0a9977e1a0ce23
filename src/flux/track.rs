use std::collections::BTreeMap;
use std::fmt;

use crate::flux::timing::CaptureTiming;

// Container word layout: the polarity flag above a 28-bit time field.
pub const MG_A: u32 = 0;
pub const MG_B: u32 = 1 << 28;
pub const TIME_MASK: u32 = 0x0FFF_FFFF;

// One revolution is normalized to this many time units.
pub const REVOLUTION_TIME: u64 = 200_000_000;

// Magnetic orientation after a flux transition.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Polarity {
    A,
    B,
}

impl Polarity {
    pub fn toggled(self) -> Polarity {
        match self {
            Polarity::A => Polarity::B,
            Polarity::B => Polarity::A,
        }
    }

    pub fn flag(self) -> u32 {
        match self {
            Polarity::A => MG_A,
            Polarity::B => MG_B,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Transition {
    pub time: u32,
    pub polarity: Polarity,
}

impl Transition {
    // Times past the 28-bit field (about 1.34 revolutions) are clamped to its maximum.
    pub fn to_word(self) -> u32 {
        self.polarity.flag() | self.time.min(TIME_MASK)
    }

    pub fn fits_word(self) -> bool {
        self.time <= TIME_MASK
    }
}

// The flux transitions of one track side, in normalized time units.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct FluxTrack {
    transitions: Vec<Transition>,
    level: Polarity,
    index_count: u32,
    synthesized_count: u32,
}

impl FluxTrack {
    pub fn new() -> FluxTrack {
        FluxTrack {
            transitions: Vec::new(),
            level: Polarity::A,
            index_count: 0,
            synthesized_count: 0,
        }
    }

    // Every recorded transition flips the level, starting from MG_A.
    pub fn push(&mut self, time: u32) {
        self.level = self.level.toggled();
        self.transitions.push(Transition { time, polarity: self.level });
    }

    // A transition guessed to have been missed by the capture hardware.
    pub fn push_synthesized(&mut self, time: u32) {
        self.synthesized_count += 1;
        self.push(time);
    }

    pub fn set_index_count(&mut self, index_count: u32) {
        self.index_count = index_count;
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    pub fn synthesized_count(&self) -> u32 {
        self.synthesized_count
    }

    // The track as container words: a leading MG_A|0 level marker, then one word per transition.
    pub fn to_words(&self) -> Vec<u32> {
        std::iter::once(MG_A)
            .chain(self.transitions.iter().map(|transition| transition.to_word()))
            .collect()
    }
}

impl Default for FluxTrack {
    fn default() -> FluxTrack {
        FluxTrack::new()
    }
}

// Every decoded track of a disk, keyed by (track, head).
#[derive(Clone, Debug, Default)]
pub struct FluxImage {
    tracks: BTreeMap<(u16, u16), FluxTrack>,
    timing: Option<CaptureTiming>,
}

impl FluxImage {
    pub fn new() -> FluxImage {
        FluxImage::default()
    }

    pub fn track(&self, track: u16, head: u16) -> Option<&FluxTrack> {
        self.tracks.get(&(track, head))
    }

    pub fn tracks(&self) -> impl Iterator<Item = (u16, u16, &FluxTrack)> {
        self.tracks.iter().map(|(&(track, head), flux)| (track, head, flux))
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    // The capture clock and drive speed the tracks were decoded with.
    pub fn timing(&self) -> Option<CaptureTiming> {
        self.timing
    }

    // A later record for the same (track, head) replaces the earlier one.
    pub fn replace(&mut self, tracks: BTreeMap<(u16, u16), FluxTrack>, timing: CaptureTiming) {
        self.tracks = tracks;
        self.timing = Some(timing);
    }
}

impl fmt::Display for FluxImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.timing {
            Some(timing) => write!(f, "{} tracks, {timing}", self.tracks.len()),
            None => write!(f, "{} tracks", self.tracks.len()),
        }
    }
}
