//! JWT handling: claims, encoding, decoding.

pub mod claims;
pub mod decoder;
pub mod encoder;
