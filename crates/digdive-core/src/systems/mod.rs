//! Systems - logic that operates on components, once per tick

mod ai;
mod combat;
mod dig;
mod movement;
mod oxygen;
mod projectile;
mod treasure;

pub use ai::*;
pub use combat::*;
pub use dig::*;
pub use movement::*;
pub use oxygen::*;
pub use projectile::*;
pub use treasure::*;
