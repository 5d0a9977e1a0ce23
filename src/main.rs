use std::path::Path;
use std::process;

use enum_iterator::all;
use itertools::Itertools;
use log::error;
use structopt::StructOpt;

use bankflux::config::{Config, Opt};
use bankflux::flux::dfi::DfiFormat;
use bankflux::flux::floppy_format::FloppyFormat;
use bankflux::flux::track::FluxImage;
use bankflux::logging::logger;
use bankflux::mapper_list::Board;

fn main() {
    let opt = Opt::from_args();
    if let Err(err) = logger::init(Config::logger(&opt)) {
        eprintln!("Failed to install logger: {err}");
    }

    if opt.list_boards {
        list_boards();
        return;
    }

    if let Err(err) = decode(&opt) {
        error!("{err}");
        process::exit(1);
    }
}

fn list_boards() {
    for board in all::<Board>() {
        let number = board.mapper_number()
            .map_or_else(|| "-".to_string(), |number| number.to_string());
        println!("{:<16} {number:>4}", board.to_string());
    }
}

fn decode(opt: &Opt) -> Result<(), String> {
    let config = Config::new(opt)?;
    let image = load_image(config.image_path(), config.image())?;

    println!("{}: {image}", config.image_path().display());
    for (track, head, flux) in image.tracks() {
        let words = flux.to_words();
        let bytes = words.iter().flat_map(|word| word.to_le_bytes()).collect_vec();
        let details = [
            format!("{} transitions", flux.len()),
            format!("{} synthesized", flux.synthesized_count()),
            format!("{} index pulses", flux.index_count()),
            format!("CRC32 {:08X}", crc32fast::hash(&bytes)),
        ];
        println!("{track:02}:{head} {}", details.iter().join(", "));
    }

    Ok(())
}

fn load_image(path: &Path, data: &[u8]) -> Result<FluxImage, String> {
    let mut image = FluxImage::new();
    DfiFormat.load(data, &mut image)
        .map_err(|err| format!("Failed to load '{}'. {err}", path.display()))?;
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_dump_is_reported_as_legacy() {
        let err = load_image(Path::new("old.dfi"), b"DFER\0\0\0\0").err().unwrap();
        assert_eq!(err, "Failed to load 'old.dfi'. Old style DiscFerret DFER image. Only DFE2 images can be decoded.");

        let err = load_image(Path::new("other.img"), b"MFM!").err().unwrap();
        assert_eq!(err, "Failed to load 'other.img'. Not a DiscFerret DFE2 image.");
    }

    #[test]
    fn empty_dump_loads_no_tracks() {
        let image = load_image(Path::new("empty.dfi"), b"DFE2").unwrap();
        assert!(image.is_empty());
    }
}
