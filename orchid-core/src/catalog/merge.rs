//! Favorite flag derivation
//!
//! `favorite` on a catalog item is always recomputed from the favorite set
//! at merge time. Whatever the payload carried is discarded.

use crate::domain::{Category, Entity, Orchid};

/// Copy of `orchid` whose `favorite` reflects membership in `favorites`
pub fn derive_favorite_flag(orchid: &Orchid, favorites: &[Orchid]) -> Orchid {
    let favorite = favorites.iter().any(|fav| fav.same_entity(orchid));
    orchid.with_favorite(favorite)
}

/// Apply [`derive_favorite_flag`] to every item of every category
pub fn merge_favorites(categories: Vec<Category>, favorites: &[Orchid]) -> Vec<Category> {
    categories
        .into_iter()
        .map(|Category { name, items }| Category {
            name,
            items: items
                .iter()
                .map(|orchid| derive_favorite_flag(orchid, favorites))
                .collect(),
        })
        .collect()
}
