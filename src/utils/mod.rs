/// Logging initialisation built on `tracing-subscriber`
pub mod logger;

pub use logger::*;
