use std::collections::BTreeMap;

use log::{debug, info, warn};

use crate::flux::error::DfiError;
use crate::flux::floppy_format::FloppyFormat;
use crate::flux::timing::CaptureTiming;
use crate::flux::track::{FluxImage, FluxTrack, REVOLUTION_TIME};

const DFE2_MAGIC: &[u8; 4] = b"DFE2";
const DFER_MAGIC: &[u8; 4] = b"DFER";
const HEADER_LENGTH: usize = 10;

// DiscFerret flux dumps.
//
// After the four byte magic, the file is a sequence of track records:
// * u16 BE track, u16 BE head, u16 BE sector (unused), u32 BE payload length
// * the payload, one byte per sample event:
//   0x7F (low bits all set): no event, 0x7F ticks elapse
//   0x80 set: index pulse after the low 7 bits of ticks
//   otherwise: flux transition after the low 7 bits of ticks
//   0xFF: never produced by working hardware
pub struct DfiFormat;

impl FloppyFormat for DfiFormat {
    type Error = DfiError;

    fn name(&self) -> &'static str {
        "dfi"
    }

    fn description(&self) -> &'static str {
        "DiscFerret flux dump format"
    }

    fn extensions(&self) -> &'static str {
        "dfi"
    }

    fn identify(&self, data: &[u8]) -> u8 {
        identify(data)
    }

    fn load(&self, data: &[u8], image: &mut FluxImage) -> Result<(), DfiError> {
        load(data, image)
    }
}

pub fn identify(data: &[u8]) -> u8 {
    if data.starts_with(DFE2_MAGIC) { 100 } else { 0 }
}

// Decode a whole DFE2 image. The image is only replaced once every track has decoded.
pub fn load(data: &[u8], image: &mut FluxImage) -> Result<(), DfiError> {
    if data.starts_with(DFER_MAGIC) {
        return Err(DfiError::LegacyFormat);
    } else if !data.starts_with(DFE2_MAGIC) {
        return Err(DfiError::BadMagic);
    }

    let records = records(data)?;
    let summaries = records.iter()
        .map(TrackRecord::summarize)
        .collect::<Result<Vec<_>, _>>()?;

    let timing = records.iter().zip(&summaries)
        .find(|(record, _)| record.track == 0 && record.head == 0)
        .map(|(_, summary)| CaptureTiming::classify(summary.first_index_time.unwrap_or(summary.total_time)))
        .unwrap_or_else(|| {
            warn!("DFI image has no track 0 head 0 to guess the capture speed from. Assuming {}.",
                CaptureTiming::DEFAULT);
            CaptureTiming::DEFAULT
        });

    let mut tracks = BTreeMap::new();
    for (record, summary) in records.iter().zip(&summaries) {
        let flux = record.decode(summary, timing);
        debug!(target: "fluxtracks", "{:02}:{} total time: {:10}, index time: {:10}, indexes: {}, transitions: {}",
            record.track, record.head, summary.total_time, summary.index_time(), summary.index_count, flux.len());
        tracks.insert((record.track, record.head), flux);
    }

    image.replace(tracks, timing);
    info!("DFI image decoded. {image}");
    Ok(())
}

struct TrackRecord<'a> {
    track: u16,
    head: u16,
    payload: &'a [u8],
}

// Split the image into its track records without decoding anything.
fn records(data: &[u8]) -> Result<Vec<TrackRecord<'_>>, DfiError> {
    let mut records = Vec::new();
    let mut offset = DFE2_MAGIC.len();
    while offset < data.len() {
        let header = data.get(offset..offset + HEADER_LENGTH)
            .ok_or(DfiError::TruncatedHeader { offset })?;
        let track = u16::from_be_bytes([header[0], header[1]]);
        let head = u16::from_be_bytes([header[2], header[3]]);
        // Bytes 4 and 5 are the sector, which flux dumps don't use.
        let length = u32::from_be_bytes([header[6], header[7], header[8], header[9]]);

        offset += HEADER_LENGTH;
        let available = data.len() - offset;
        if length as usize > available {
            return Err(DfiError::TruncatedTrack { track, head, length, available });
        }

        records.push(TrackRecord { track, head, payload: &data[offset..offset + length as usize] });
        offset += length as usize;
    }

    Ok(records)
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum FluxEvent {
    Carry,
    Index(u8),
    Transition(u8),
}

impl FluxEvent {
    fn ticks(self) -> u64 {
        match self {
            FluxEvent::Carry => 0x7F,
            FluxEvent::Index(ticks) | FluxEvent::Transition(ticks) => u64::from(ticks),
        }
    }
}

// Tick totals from the first pass over a track.
struct TrackSummary {
    total_time: u64,
    first_index_time: Option<u64>,
    index_count: u32,
}

impl TrackSummary {
    // The revolution length that times are normalized against.
    fn index_time(&self) -> u64 {
        self.first_index_time.unwrap_or(self.total_time)
    }
}

impl TrackRecord<'_> {
    fn events(&self) -> impl Iterator<Item = Result<FluxEvent, DfiError>> + '_ {
        self.payload.iter().enumerate().map(move |(position, &byte)| {
            match byte {
                0xFF => Err(DfiError::CorruptFluxByte { track: self.track, head: self.head, position }),
                _ if byte & 0x7F == 0x7F => Ok(FluxEvent::Carry),
                _ if byte & 0x80 != 0 => Ok(FluxEvent::Index(byte & 0x7F)),
                _ => Ok(FluxEvent::Transition(byte)),
            }
        })
    }

    fn summarize(&self) -> Result<TrackSummary, DfiError> {
        let mut summary = TrackSummary { total_time: 0, first_index_time: None, index_count: 0 };
        for event in self.events() {
            let event = event?;
            summary.total_time += event.ticks();
            if let FluxEvent::Index(_) = event {
                summary.first_index_time.get_or_insert(summary.total_time);
                summary.index_count += 1;
            }
        }

        Ok(summary)
    }

    // Only called on records that summarized successfully, so every byte is known to be valid.
    fn decode(&self, summary: &TrackSummary, timing: CaptureTiming) -> FluxTrack {
        let index_time = summary.index_time().max(1);
        let normalize = |time: u64| -> u32 {
            let scaled = (u128::from(REVOLUTION_TIME) * u128::from(time) * 2 + u128::from(index_time))
                / (u128::from(index_time) * 2);
            u32::try_from(scaled).unwrap_or(u32::MAX)
        };

        let mut flux = FluxTrack::new();
        flux.set_index_count(summary.index_count);

        let mut time = 0;
        let mut previous_time = None;
        for event in self.events().flatten() {
            time += event.ticks();
            if !matches!(event, FluxEvent::Transition(_)) {
                continue;
            }

            let Some(previous) = previous_time else {
                flux.push(normalize(time));
                previous_time = Some(time);
                continue;
            };

            let delta = time - previous;
            if delta <= timing.min_delta() {
                continue;
            }

            if delta > timing.max_delta() {
                if self.track % 2 == 0 && self.head == 0 {
                    info!(target: "fluxtracks", "Missed transition on track {}, total time for transition is {delta}.",
                        self.track);
                }

                flux.push_synthesized(normalize(time - delta / 2));
            }

            flux.push(normalize(time));
            previous_time = Some(time);
        }

        let clamped = flux.transitions().iter().filter(|transition| !transition.fits_word()).count();
        if clamped > 0 {
            warn!("Track {}.{}: {clamped} transitions lie past the longest time a flux word can hold.",
                self.track, self.head);
        }

        flux
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flux::track::Polarity;

    fn image(records: &[(u16, u16, &[u8])]) -> Vec<u8> {
        let mut data = DFE2_MAGIC.to_vec();
        for &(track, head, payload) in records {
            data.extend_from_slice(&track.to_be_bytes());
            data.extend_from_slice(&head.to_be_bytes());
            data.extend_from_slice(&[0, 0]);
            data.extend_from_slice(&(payload.len() as u32).to_be_bytes());
            data.extend_from_slice(payload);
        }

        data
    }

    #[test]
    fn identify_only_accepts_dfe2() {
        assert_eq!(identify(b"DFE2"), 100);
        assert_eq!(identify(b"DFER"), 0);
        assert_eq!(identify(b"DF"), 0);
        assert_eq!(DfiFormat.identify(b"DFE2\x00\x00"), 100);
        assert!(!DfiFormat.supports_save());
    }

    #[test]
    fn empty_image_decodes_to_no_tracks() {
        let mut flux = FluxImage::new();
        load(b"DFE2", &mut flux).unwrap();
        assert!(flux.is_empty());
        assert_eq!(flux.timing(), Some(CaptureTiming::DEFAULT));
    }

    #[test]
    fn short_header_is_rejected() {
        let mut data = image(&[]);
        data.extend_from_slice(&[0, 0, 0]);
        assert_eq!(load(&data, &mut FluxImage::new()), Err(DfiError::TruncatedHeader { offset: 4 }));
    }

    #[test]
    fn payload_past_end_is_rejected() {
        let mut data = image(&[(1, 0, &[0x10, 0x10])]);
        data.pop();
        assert_eq!(
            load(&data, &mut FluxImage::new()),
            Err(DfiError::TruncatedTrack { track: 1, head: 0, length: 2, available: 1 }),
        );
    }

    #[test]
    fn short_deltas_are_dropped_without_moving_the_previous_transition() {
        // Default timing: deltas must exceed 240 ticks.
        let payload = [0x7F, 0x7F, 0x32, 0x64, 0x7F, 0x7F, 0x05, 0x85];
        let data = image(&[(0, 0, &payload)]);
        let mut flux = FluxImage::new();
        load(&data, &mut flux).unwrap();

        let track = flux.track(0, 0).unwrap();
        // 304, then 404 (dropped, delta 100), then 663 (delta 359 from 304).
        assert_eq!(track.len(), 2);
        assert_eq!(track.index_count(), 1);
        let index_time = 668;
        assert_eq!(track.transitions()[1].time, ((200_000_000u64 * 663 + index_time / 2) / index_time) as u32);
    }

    #[test]
    fn first_transition_is_always_recorded() {
        let data = image(&[(0, 0, &[0x01, 0x81])]);
        let mut flux = FluxImage::new();
        load(&data, &mut flux).unwrap();
        let track = flux.track(0, 0).unwrap();
        assert_eq!(track.len(), 1);
        assert_eq!(track.transitions()[0].polarity, Polarity::B);
        assert_eq!(track.transitions()[0].time, 100_000_000);
    }

    #[test]
    fn track_without_index_normalizes_against_its_length() {
        let data = image(&[(3, 1, &[0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x7F, 0x08])]);
        let mut flux = FluxImage::new();
        load(&data, &mut flux).unwrap();
        let track = flux.track(3, 1).unwrap();
        assert_eq!(track.index_count(), 0);
        assert_eq!(track.transitions()[0].time, 200_000_000);
    }

    #[test]
    fn failed_load_leaves_image_untouched() {
        let mut flux = FluxImage::new();
        load(&image(&[(0, 0, &[0x7F, 0x40, 0x81])]), &mut flux).unwrap();
        let before = flux.track(0, 0).cloned();

        let result = load(&image(&[(0, 0, &[0x40]), (1, 0, &[0x20, 0xFF])]), &mut flux);
        assert_eq!(result, Err(DfiError::CorruptFluxByte { track: 1, head: 0, position: 1 }));
        assert_eq!(flux.track(0, 0).cloned(), before);
        assert!(flux.track(1, 0).is_none());
    }
}
