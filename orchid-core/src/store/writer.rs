//! Background writer that mirrors the favorite set to durable storage.
//!
//! A single task owns the write side of the key-value store and drains an
//! unbounded queue in FIFO order, so the write for one mutation is always
//! issued before the write for the next. Every queued snapshot is written
//! in full; nothing is coalesced.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};

use crate::domain::{DomainError, DomainResult, Orchid};
use crate::repository::KeyValueStore;

/// Messages sent from `FavoritesStore` to the writer task.
pub(crate) enum WriterMessage {
    /// Serialize and store this snapshot, overwriting the previous value.
    Persist(Arc<Vec<Orchid>>),

    /// Reply once every earlier message has been processed.
    ///
    /// Carries back the first write failure seen since the previous flush.
    Flush {
        reply: oneshot::Sender<DomainResult<()>>,
    },

    /// Read the stored value after every earlier write has landed.
    Load {
        reply: oneshot::Sender<DomainResult<Option<String>>>,
    },
}

/// Start the writer task on the current tokio runtime.
///
/// The task exits once every sender is dropped and the queue is drained,
/// so writes queued before the store goes away still complete.
pub(crate) fn spawn_writer(
    storage: Arc<dyn KeyValueStore>,
    key: String,
) -> mpsc::UnboundedSender<WriterMessage> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(run_writer(storage, key, rx));
    tx
}

async fn run_writer(
    storage: Arc<dyn KeyValueStore>,
    key: String,
    mut rx: mpsc::UnboundedReceiver<WriterMessage>,
) {
    let mut first_failure: Option<DomainError> = None;

    while let Some(msg) = rx.recv().await {
        match msg {
            WriterMessage::Persist(snapshot) => {
                if let Err(e) = persist(storage.as_ref(), &key, &snapshot).await {
                    log::warn!(
                        "Failed to persist {} favorites under '{}': {}",
                        snapshot.len(),
                        key,
                        e
                    );
                    first_failure.get_or_insert(e);
                }
            }
            WriterMessage::Flush { reply } => {
                let result = match first_failure.take() {
                    Some(e) => Err(e),
                    None => Ok(()),
                };
                // The caller may have stopped waiting; nothing to do then.
                let _ = reply.send(result);
            }
            WriterMessage::Load { reply } => {
                let _ = reply.send(storage.get(&key).await);
            }
        }
    }

    log::debug!("Favorites writer for '{}' stopped", key);
}

async fn persist(storage: &dyn KeyValueStore, key: &str, favorites: &[Orchid]) -> DomainResult<()> {
    let json = serde_json::to_string(favorites)?;
    storage.set(key, &json).await
}
