pub mod block_device;
pub mod spi_sdcard;
