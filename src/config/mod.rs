//! Configuration: settings read from the environment (and `.env`) plus the
//! constants shared across layers.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
