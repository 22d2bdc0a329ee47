mod effects_config;
mod particle;
mod particle_pool;

pub use effects_config::*;
pub use particle::*;
pub use particle_pool::*;
