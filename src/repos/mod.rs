pub mod error;
pub mod note_repo;
