pub mod dfi;
pub mod error;
pub mod floppy_format;
pub mod timing;
pub mod track;

pub use error::DfiError;
