use thiserror::Error;

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum DfiError {
    #[error("Not a DiscFerret DFE2 image.")]
    BadMagic,
    #[error("Old style DiscFerret DFER image. Only DFE2 images can be decoded.")]
    LegacyFormat,
    #[error("Track header at byte {offset} is cut short by the end of the image.")]
    TruncatedHeader { offset: usize },
    #[error("Track {track} head {head} claims {length} bytes of flux, but only {available} remain.")]
    TruncatedTrack { track: u16, head: u16, length: u32, available: usize },
    #[error("Track {track} head {head} has a 0xFF flux byte at position {position}.")]
    CorruptFluxByte { track: u16, head: u16, position: usize },
}
