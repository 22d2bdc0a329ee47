mod fixed_stepper;
mod game_stats;
mod session;
mod session_config;
mod sim_event;

pub use fixed_stepper::*;
pub use game_stats::*;
pub use session::*;
pub use session_config::*;
pub use sim_event::*;
