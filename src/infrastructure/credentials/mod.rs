//! Credentials management infrastructure
//!
//! Implementations of the secure config store port:
//! - JSON document kept by the sibling research project
//! - In-memory store

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
