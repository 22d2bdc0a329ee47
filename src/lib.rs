pub use ahash;
pub use glam;

pub mod consts;
mod logging;
pub mod math;
mod sim;

pub use sim::*;

/// Installs the crate's `env_logger` backend.
///
/// Safe to call more than once; later calls return the logger error and change nothing.
pub fn init_logging() -> Result<(), log::SetLoggerError> {
    logging::try_init()
}
