mod vehicle;
mod vehicle_config;
mod vehicle_state;

pub use vehicle::*;
pub use vehicle_config::*;
pub use vehicle_state::*;
