//! Catalog Layer
//!
//! Fetching the remote catalog and annotating it with favorite flags.

mod source;
mod http_source;
mod merge;

pub use source::CatalogSource;
pub use http_source::{HttpCatalogSource, DEFAULT_CATALOG_URL};
pub use merge::{derive_favorite_flag, merge_favorites};
