use crate::flux::track::FluxImage;

// A disk image container that can be recognized and decoded into flux tracks.
pub trait FloppyFormat {
    type Error: std::error::Error;

    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    // Comma separated, without dots.
    fn extensions(&self) -> &'static str;

    fn supports_save(&self) -> bool {
        false
    }

    // Confidence from 0 (not this format) to 100 (certainly this format).
    fn identify(&self, data: &[u8]) -> u8;

    // On failure the image must be left exactly as it was.
    fn load(&self, data: &[u8], image: &mut FluxImage) -> Result<(), Self::Error>;
}
