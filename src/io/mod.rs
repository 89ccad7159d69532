// Purpose - external interfaces, format conversions

pub mod converter;
pub mod wav;

pub use wav::{decode_reference, read_reference, write_wav};
