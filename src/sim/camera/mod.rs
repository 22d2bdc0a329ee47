mod camera_config;
mod camera_state;
mod chase_camera;

pub use camera_config::*;
pub use camera_state::*;
pub use chase_camera::*;
