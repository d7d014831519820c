//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod file_system;
mod identity_client;
mod session_storage;

pub use file_system::{FileSystem, FileSystemError};
pub use identity_client::{IdentityClient, IdentityRequest, IdentityResponse, TransportError};
pub use session_storage::{SessionStorage, StorageError};
