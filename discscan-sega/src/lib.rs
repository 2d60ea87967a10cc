//! Serial decoders for Sega disc images.
//!
//! - Sega CD / Mega CD
//! - Saturn
//! - Dreamcast

pub mod dreamcast;
pub mod saturn;
pub mod sega_cd;
