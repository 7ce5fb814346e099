//! Category
//!
//! Display grouping of orchids as returned by the catalog API.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::orchid::Orchid;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub items: Vec<Orchid>,
}

impl Category {
    pub fn new(name: impl Into<String>, items: Vec<Orchid>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

impl Entity for Category {
    fn key(&self) -> &str {
        &self.name
    }
}
