pub mod bus;
pub mod cartridge;
pub mod config;
pub mod flux;
pub mod logging;
pub mod mapper;
pub mod mapper_list;
pub mod mappers;
pub mod memory;
pub mod sdcard;
pub mod slot;
pub mod state;
pub mod util;
