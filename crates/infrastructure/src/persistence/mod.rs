//! Durable storage adapters

mod file_system;
mod memory_storage;
mod session_storage;

pub use file_system::TokioFileSystem;
pub use memory_storage::MemorySessionStorage;
pub use session_storage::{FileSessionStorage, SESSION_FILE_NAME};
