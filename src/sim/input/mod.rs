mod action;
mod control_state;
mod input_conditioner;
mod input_config;
mod key_state;

pub use action::*;
pub use control_state::*;
pub use input_conditioner::*;
pub use input_config::*;
pub use key_state::*;
