pub mod activity;
pub mod organizer;
pub mod participant;
pub mod prize;
pub mod roster;
pub mod winner;
pub mod winner_log;

pub use activity::*;
pub use organizer::*;
pub use participant::*;
pub use prize::*;
pub use roster::*;
pub use winner::*;
pub use winner_log::*;
