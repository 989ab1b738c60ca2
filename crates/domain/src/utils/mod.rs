//! Pure parsing and encoding helpers

pub mod names;
pub mod slot_codec;
pub mod window_parser;
