use std::path::{Path, PathBuf};

use structopt::StructOpt;

use crate::logging::logger::Logger;

pub struct Config {
    image_path: PathBuf,
    image: Vec<u8>,
}

impl Config {
    pub fn new(opt: &Opt) -> Result<Config, String> {
        let image_path = opt.image_path.as_deref()
            .ok_or("An image path is required unless --list-boards is passed.")?;
        Config::load(image_path)
    }

    pub fn load(image_path: &Path) -> Result<Config, String> {
        let image = std::fs::read(image_path)
            .map_err(|err| format!("Failed to read image '{}': {err}", image_path.display()))?;
        Ok(Config { image_path: image_path.to_path_buf(), image })
    }

    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn logger(opt: &Opt) -> Logger {
        Logger {
            log_mapper_writes: opt.log_mapper_writes,
            log_mapper_reads: opt.log_mapper_reads,
            log_flux_tracks: opt.log_flux_tracks,
            log_sd_commands: opt.log_sd_commands,
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(name = "bankflux", about = "Decodes DiscFerret flux dumps and lists supported multicart boards.")]
pub struct Opt {
    #[structopt(name = "IMAGE", parse(from_os_str))]
    pub image_path: Option<PathBuf>,

    #[structopt(name = "listboards", long = "list-boards")]
    pub list_boards: bool,

    #[structopt(name = "logfluxtracks", long = "log-flux-tracks")]
    pub log_flux_tracks: bool,

    #[structopt(name = "logmapperwrites", long = "log-mapper-writes")]
    pub log_mapper_writes: bool,

    #[structopt(name = "logmapperreads", long = "log-mapper-reads")]
    pub log_mapper_reads: bool,

    #[structopt(name = "logsdcommands", long = "log-sd-commands")]
    pub log_sd_commands: bool,
}
