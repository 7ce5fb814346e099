//! Orchid Catalog Core
//!
//! Layered architecture:
//! - domain: Catalog entities and the error type
//! - repository: Durable key-value storage
//! - store: The favorites store
//! - catalog: Remote catalog source and favorite flag derivation
//! - view_model: Screen state built from the two
//! - context: Dependency wiring for a running app

pub mod domain;
pub mod repository;
pub mod store;
pub mod catalog;
pub mod view_model;
pub mod config;
pub mod context;

pub use config::AppConfig;
pub use context::AppContext;
pub use domain::{Category, DomainError, DomainResult, Entity, Orchid};
pub use store::{FavoriteSet, FavoritesStore, FAVORITES_KEY};
