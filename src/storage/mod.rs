//! Storage implementations for the store and local storage collaborators

pub mod fixtures;
pub mod in_memory;

#[cfg(feature = "mock")]
pub mod mock;

#[cfg(feature = "api")]
pub mod api;

pub use in_memory::InMemoryLocalStorage;

#[cfg(feature = "mock")]
pub use mock::{CallLog, MOCK_FILE_BASE_URL, MockOperation, MockStore};

#[cfg(feature = "api")]
pub use api::ApiStore;
