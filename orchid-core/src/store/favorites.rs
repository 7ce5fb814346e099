//! Favorites Store
//!
//! Owns the authoritative favorite set and mirrors it to durable storage
//! under a single key.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};

use crate::domain::{DomainError, DomainResult, Entity, Orchid};
use crate::repository::KeyValueStore;
use super::writer::{spawn_writer, WriterMessage};

/// Storage key holding the serialized favorite set
pub const FAVORITES_KEY: &str = "favorites";

/// Immutable snapshot of the favorite set, in insertion order
pub type FavoriteSet = Arc<Vec<Orchid>>;

/// Single source of truth for which orchids are favorited
///
/// One instance per running application, shared by `Arc`. Every mutation
/// installs a freshly built vector, so a snapshot obtained earlier is never
/// changed underneath its holder.
pub struct FavoritesStore {
    key: String,
    favorites: watch::Sender<FavoriteSet>,
    writer: mpsc::UnboundedSender<WriterMessage>,
}

impl FavoritesStore {
    /// Create an empty store backed by `storage`.
    ///
    /// Must be called from within a tokio runtime: the background writer is
    /// spawned here. Call [`load`](Self::load) before trusting membership.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(storage, FAVORITES_KEY)
    }

    /// Like [`new`](Self::new) with a non-default storage key
    pub fn with_key(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let (favorites, _) = watch::channel(Arc::new(Vec::new()));
        let writer = spawn_writer(storage, key.clone());

        Self {
            key,
            favorites,
            writer,
        }
    }

    /// Create a store and load the persisted set
    pub async fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let store = Self::new(storage);
        store.load().await;
        store
    }

    /// Replace the in-memory set with the persisted one.
    ///
    /// The read goes through the writer queue, so it sees every change made
    /// before the call. A missing key, a failed read or an undecodable value
    /// all load as the empty set; the failure is logged and not returned.
    pub async fn load(&self) {
        let loaded = match self.read_stored().await {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Orchid>>(&json) {
                Ok(favorites) => favorites,
                Err(e) => {
                    log::warn!("Stored favorites under '{}' are unreadable, starting empty: {}", self.key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Failed to read favorites under '{}', starting empty: {}", self.key, e);
                Vec::new()
            }
        };

        log::info!("Loaded {} favorites", loaded.len());
        self.favorites.send_replace(Arc::new(loaded));
    }

    /// True iff an orchid with the same name is in the set
    pub fn is_favorite(&self, orchid: &Orchid) -> bool {
        self.contains(orchid.key())
    }

    /// Membership by name
    pub fn contains(&self, name: &str) -> bool {
        self.favorites.borrow().iter().any(|fav| fav.key() == name)
    }

    /// Current set
    pub fn snapshot(&self) -> FavoriteSet {
        Arc::clone(&self.favorites.borrow())
    }

    pub fn len(&self) -> usize {
        self.favorites.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.borrow().is_empty()
    }

    /// Receive every replacement of the set
    pub fn subscribe(&self) -> watch::Receiver<FavoriteSet> {
        self.favorites.subscribe()
    }

    /// Remove the orchid (by name) if present, otherwise append it.
    ///
    /// The new set is visible immediately; the durable write is queued and
    /// completes in the background. Returns whether the orchid is a
    /// favorite afterwards.
    pub fn toggle(&self, orchid: &Orchid) -> bool {
        let mut now_favorite = false;

        self.favorites.send_modify(|current| {
            let (next, added) = toggled(current.as_slice(), orchid);
            now_favorite = added;
            *current = Arc::new(next);
            self.queue_write(Arc::clone(current));
        });

        log::info!(
            "{} '{}' {} favorites",
            if now_favorite { "Added" } else { "Removed" },
            orchid.name,
            if now_favorite { "to" } else { "from" }
        );
        now_favorite
    }

    /// Remove the orchid (by name) if present.
    ///
    /// Check and removal happen under one lock of the set; nothing is
    /// written when the orchid was not a favorite. Returns whether it was
    /// removed.
    pub fn remove(&self, orchid: &Orchid) -> bool {
        let removed = self.favorites.send_if_modified(|current| {
            if !current.iter().any(|fav| fav.same_entity(orchid)) {
                return false;
            }
            let (next, _) = toggled(current.as_slice(), orchid);
            *current = Arc::new(next);
            self.queue_write(Arc::clone(current));
            true
        });

        if removed {
            log::info!("Removed '{}' from favorites", orchid.name);
        }
        removed
    }

    /// Replace the whole set and persist it
    pub fn replace_all(&self, favorites: Vec<Orchid>) {
        self.favorites.send_modify(|current| {
            *current = Arc::new(favorites);
            self.queue_write(Arc::clone(current));
        });
    }

    /// Wait for every write queued so far.
    ///
    /// Returns the first write failure since the previous flush, if any.
    pub async fn flush(&self) -> DomainResult<()> {
        let (reply, rx) = oneshot::channel();
        self.writer
            .send(WriterMessage::Flush { reply })
            .map_err(|_| writer_gone())?;
        rx.await.map_err(|_| writer_gone())?
    }

    async fn read_stored(&self) -> DomainResult<Option<String>> {
        let (reply, rx) = oneshot::channel();
        self.writer
            .send(WriterMessage::Load { reply })
            .map_err(|_| writer_gone())?;
        rx.await.map_err(|_| writer_gone())?
    }

    /// Called with the watch value locked, which keeps queue order equal to
    /// mutation order.
    fn queue_write(&self, snapshot: FavoriteSet) {
        if self.writer.send(WriterMessage::Persist(snapshot)).is_err() {
            log::warn!("Favorites writer is gone, change to '{}' will not be persisted", self.key);
        }
    }
}

/// The set after toggling `orchid`, and whether it was added
pub fn toggled(current: &[Orchid], orchid: &Orchid) -> (Vec<Orchid>, bool) {
    if current.iter().any(|fav| fav.same_entity(orchid)) {
        let next = current
            .iter()
            .filter(|fav| !fav.same_entity(orchid))
            .cloned()
            .collect();
        (next, false)
    } else {
        let mut next = current.to_vec();
        next.push(orchid.clone());
        (next, true)
    }
}

fn writer_gone() -> DomainError {
    DomainError::Internal("favorites writer is no longer running".to_string())
}
