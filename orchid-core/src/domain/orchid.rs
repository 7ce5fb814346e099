//! Orchid Entity
//!
//! A catalog entry. The API owns every field except `favorite`, which the
//! client derives from the favorite set each time the catalog is loaded.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A catalog item, identified by `name`
///
/// Only `name` is required when decoding; any other missing field takes its
/// default so one partial record does not reject a whole payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orchid {
    /// Unique name (no separate ID exists)
    pub name: String,
    /// Weight in grams
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub is_top_of_the_week: bool,
    /// Image URI
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub bonus: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub category: String,
    /// Derived membership flag, never authoritative
    #[serde(default)]
    pub favorite: bool,
}

impl Orchid {
    /// Create an orchid with only its name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Copy of this orchid with the favorite flag replaced
    pub fn with_favorite(&self, favorite: bool) -> Self {
        Self {
            favorite,
            ..self.clone()
        }
    }
}

impl Entity for Orchid {
    fn key(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn test_identity_is_name_only() {
        let mut a = Orchid::named("Vanda");
        a.price = 12.5;
        let mut b = Orchid::named("Vanda");
        b.origin = "Thailand".to_string();

        assert_ne!(a, b);
        assert!(a.same_entity(&b));
        assert!(!a.same_entity(&Orchid::named("Cattleya")));
    }

    #[test]
    fn test_api_payload_decoding() {
        let json = r#"{
            "name": "Phalaenopsis",
            "weight": 34,
            "rating": "4.8",
            "price": 19.99,
            "isTopOfTheWeek": true,
            "image": "https://example.com/p.jpg",
            "color": "white",
            "bonus": "No",
            "origin": "Taiwan",
            "category": "Natural",
            "id": "7"
        }"#;
        let orchid: Orchid = serde_json::from_str(json).unwrap();
        assert_eq!(orchid.name, "Phalaenopsis");
        assert_eq!(orchid.weight, 34.0);
        assert!(orchid.is_top_of_the_week);
        assert!(!orchid.favorite);
    }

    #[test]
    fn test_partial_record_takes_defaults() {
        let json = r#"[{"name": "Natural", "items": [
            {"name": "Vanda", "weight": 20, "rating": "4.1", "price": 15.5,
             "isTopOfTheWeek": false, "image": "", "color": "blue",
             "origin": "Thailand", "category": "Natural"}
        ]}]"#;
        let categories: Vec<Category> = serde_json::from_str(json).unwrap();
        let vanda = &categories[0].items[0];
        assert_eq!(vanda.name, "Vanda");
        assert_eq!(vanda.bonus, "");
        assert_eq!(vanda.origin, "Thailand");

        let bare: Orchid = serde_json::from_str(r#"{"name": "Cattleya"}"#).unwrap();
        assert_eq!(bare, Orchid::named("Cattleya"));
    }

    #[test]
    fn test_name_is_required() {
        let err = serde_json::from_str::<Orchid>(r#"{"origin": "Peru", "price": 3}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `name`"), "{}", err);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(Orchid::named("Vanda")).unwrap();
        assert!(value.get("isTopOfTheWeek").is_some());
        assert!(value.get("is_top_of_the_week").is_none());
    }

    #[test]
    fn test_with_favorite_keeps_fields() {
        let mut orchid = Orchid::named("Dendrobium");
        orchid.color = "purple".to_string();
        let flagged = orchid.with_favorite(true);
        assert!(flagged.favorite);
        assert_eq!(flagged.color, "purple");
        assert!(!orchid.favorite);
    }
}
