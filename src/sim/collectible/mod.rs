mod collectible;
mod collectible_set;
pub mod portfolio;
mod ring_layout;

pub use collectible::*;
pub use collectible_set::*;
pub use ring_layout::*;
