use tokio::sync::{Mutex, MutexGuard};

/// Global write lock over the zone store.
///
/// Every mutating use case holds the guard for its whole run so that batch
/// operations never interleave with each other or with single writes.
#[derive(Debug, Default)]
pub struct ZoneMutationGate {
    lock: Mutex<()>,
}

impl ZoneMutationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }
}
