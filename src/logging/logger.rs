use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

pub fn init(logger: Logger) -> Result<(), SetLoggerError> {
    let max_level = if logger.any_debug_target() { LevelFilter::Debug } else { LevelFilter::Info };
    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(max_level))
}

#[derive(Default)]
pub struct Logger {
    pub log_mapper_writes: bool,
    pub log_mapper_reads: bool,
    pub log_flux_tracks: bool,
    pub log_sd_commands: bool,
}

impl Logger {
    // Every named target logs at debug level.
    fn any_debug_target(&self) -> bool {
        self.log_mapper_writes || self.log_mapper_reads || self.log_flux_tracks || self.log_sd_commands
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match metadata.target() {
            "" => true,
            "mapperwrites" => self.log_mapper_writes,
            "mapperreads" => self.log_mapper_reads,
            "fluxtracks" => self.log_flux_tracks,
            "sdcommands" => self.log_sd_commands,
            target => {
                let chunks: Vec<&str> = target.split("::").collect();
                match chunks[..] {
                    // Module path targets only carry info and above.
                    ["bankflux", ..] => metadata.level() <= Level::Info,
                    _ => false,
                }
            }
        }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if record.level() < Level::Info {
                print!("{} - ", record.level());
            }

            match record.target() {
                "mapperwrites" | "mapperreads" => print!("MAPPER "),
                "fluxtracks" => print!("FLUX "),
                "sdcommands" => print!("SDCARD "),
                _ => {}
            }

            println!("{}", record.args());
        }
    }

    fn flush(&self) {}
}
