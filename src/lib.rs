mod client;
mod diff;
mod error;
mod json;
mod logger;
mod protocol;
mod schedule;
mod transport;
mod types;

pub use client::{Infinitude, InfinitudeBuilder, System, Zone};
pub use error::{Error, Result};
pub use logger::MessageLogMode;
pub use types::*;
