pub mod draw_session;
pub mod lottery;
pub mod memory_store;
pub mod store;

pub use draw_session::*;
pub use lottery::*;
pub use memory_store::*;
pub use store::*;
