pub mod activity_created;
pub mod activity_deleted;
pub mod participants_saved;
pub mod winner_records_saved;

pub use activity_created::*;
pub use activity_deleted::*;
pub use participants_saved::*;
pub use winner_records_saved::*;
