mod camera;
mod collectible;
mod collision;
pub(crate) mod config_error;
mod effects;
mod input;
mod session;
mod vehicle;

pub use camera::*;
pub use collectible::*;
pub use collision::*;
pub use config_error::ConfigError;
pub use effects::*;
pub use input::*;
pub use session::*;
pub use vehicle::*;
