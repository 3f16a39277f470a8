use store::{ChangeKind, StoreChange};
use tokio::sync::broadcast::{Receiver, error::RecvError};
use tracing::{debug, error, info, warn};

/// Log every change the store publishes until the store is dropped.
pub async fn consume_store_changes(mut rx: Receiver<StoreChange>) {
    info!("Starting store change consumer");

    loop {
        match rx.recv().await {
            Ok(change) => record(&change),
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "Store change consumer fell behind, changes dropped");
            }
            Err(RecvError::Closed) => break,
        }
    }

    error!("Store change consumer stopped, the store has shut down");
}

fn record(change: &StoreChange) {
    match change.kind {
        ChangeKind::Rejected => debug!(
            topic = %change.topic(),
            id = %change.id,
            "Store refused a change"
        ),
        ChangeKind::Deleted => info!(
            topic = %change.topic(),
            id = %change.id,
            cascaded = change.cascaded,
            "Store change"
        ),
        ChangeKind::Created | ChangeKind::Updated => info!(
            topic = %change.topic(),
            id = %change.id,
            name = change.name.as_deref().unwrap_or_default(),
            "Store change"
        ),
    }
}
