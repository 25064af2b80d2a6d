//! Just intonation utilities: ratios, MIDI cents, Partch diamonds and reductions.

pub mod convert;
pub mod diamond;
pub mod modulation;
pub mod pitch;
pub mod reduce;

// Host binding
pub mod objects;
pub mod parse;
pub mod pretty;
pub mod value;

// Utility modules
pub mod error;
pub mod rational;

pub use error::{Error, Result};
