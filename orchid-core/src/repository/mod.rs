//! Repository Layer
//!
//! Durable storage abstractions and implementations.

mod traits;
mod db;
mod memory;

#[cfg(test)]
mod tests;

pub use traits::KeyValueStore;
pub use db::SqliteStore;
pub use memory::MemoryStore;
