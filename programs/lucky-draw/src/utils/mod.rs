pub mod draw;
pub mod input;
pub mod random;
pub mod reconcile;

pub use draw::*;
pub use input::*;
pub use random::*;
pub use reconcile::*;
