//! Domain Layer
//!
//! Catalog entities and the shared error type.

mod entity;
mod orchid;
mod category;

pub use entity::{Entity, DomainError, DomainResult};
pub use orchid::Orchid;
pub use category::Category;
