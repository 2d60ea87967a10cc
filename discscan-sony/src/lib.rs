//! Serial decoders for Sony disc images.
//!
//! - PlayStation (PS1/PSX), from the `BOOT` line of `SYSTEM.CNF`
//! - PlayStation Portable (PSP), from the UMD product code

pub mod ps1;
pub mod psp;
