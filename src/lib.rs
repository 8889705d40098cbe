#![doc = include_str!("../README.md")]

pub(crate) mod error;
pub(crate) mod gauge;
pub(crate) mod progress_bar;
pub(crate) mod style;


/// Re-exports of all public types.
pub mod prelude {
    pub use crate::error::ConfigError;
    pub use crate::gauge::{FULL_BLOCK, Fill, GLYPHS, Gauge};
    pub use crate::progress_bar::{DEFAULT_WIDTH, ProgressBar, THUNDER};
    pub use crate::style::Urgency;
}

pub use crate::prelude::*;
