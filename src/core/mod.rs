//! Core encoding functionality
//!
//! Contains the static Morse table and the encoder built on top of it.

pub mod encoder;
pub mod table;

pub use encoder::Encoder;
pub use table::Mark;
