//! Serial decoders for Nintendo disc images.
//!
//! - GameCube

pub mod gamecube;
