#![allow(ambiguous_glob_reexports)]

pub mod create_activity;
pub mod delete_activity;
pub mod initialize_organizer;
pub mod save_participants;
pub mod save_winner_records;

pub use create_activity::*;
pub use delete_activity::*;
pub use initialize_organizer::*;
pub use save_participants::*;
pub use save_winner_records::*;
