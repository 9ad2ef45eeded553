use crate::domain::checklist::PersistedState;
use crate::domain::ports::KeyValueStore;
use anyhow::{Context, Result, anyhow};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Commands processed by the autosave task.
#[derive(Debug)]
pub enum AutosaveCommand {
    /// Persist this snapshot (may be superseded by a newer one still queued)
    Save(PersistedState),

    /// Acknowledge once every earlier save has settled
    Flush(oneshot::Sender<()>),
}

impl AutosaveCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Save(_) => "Save",
            Self::Flush(_) => "Flush",
        }
    }
}

/// Counters exposed for diagnostics and tests.
#[derive(Debug, Default)]
pub struct AutosaveStats {
    writes: AtomicU64,
    failed_writes: AtomicU64,
    coalesced: AtomicU64,
}

impl AutosaveStats {
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::SeqCst)
    }

    /// Snapshots skipped because a newer one was already queued.
    pub fn coalesced(&self) -> u64 {
        self.coalesced.load(Ordering::SeqCst)
    }
}

/// Sender side of the autosave task. Cheap to clone, never blocks.
#[derive(Clone)]
pub struct AutosaveHandle {
    cmd_tx: mpsc::UnboundedSender<AutosaveCommand>,
    stats: Arc<AutosaveStats>,
}

impl AutosaveHandle {
    /// Queues a snapshot for writing. Fire-and-forget.
    pub fn schedule(&self, state: PersistedState) {
        if self.cmd_tx.send(AutosaveCommand::Save(state)).is_err() {
            warn!("Autosave task is not running, state change will not be persisted");
        }
    }

    /// Waits until every snapshot scheduled before this call has been written (or failed).
    pub async fn flush(&self) -> Result<()> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.cmd_tx
            .send(AutosaveCommand::Flush(ack_tx))
            .map_err(|_| anyhow!("Autosave task is not running"))?;
        ack_rx
            .await
            .context("Autosave task dropped the flush request")?;
        Ok(())
    }

    pub fn stats(&self) -> Arc<AutosaveStats> {
        Arc::clone(&self.stats)
    }
}

/// Background writer for checklist snapshots.
///
/// Snapshots are written in the order they were scheduled. When several are
/// waiting, only the newest is written. Write failures are logged and
/// counted; they never reach the caller.
pub struct AutosaveService {
    store: Arc<dyn KeyValueStore>,
    key: String,
    cmd_rx: mpsc::UnboundedReceiver<AutosaveCommand>,
    stats: Arc<AutosaveStats>,
}

impl AutosaveService {
    /// Spawns the task on the current tokio runtime.
    pub fn spawn(
        store: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
    ) -> (AutosaveHandle, JoinHandle<()>) {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let stats = Arc::new(AutosaveStats::default());

        let service = Self {
            store,
            key: key.into(),
            cmd_rx,
            stats: Arc::clone(&stats),
        };
        let join = tokio::spawn(service.run());

        (AutosaveHandle { cmd_tx, stats }, join)
    }

    async fn run(mut self) {
        info!("Autosave started for key '{}'", self.key);

        while let Some(first) = self.cmd_rx.recv().await {
            let mut batch = vec![first];
            while let Ok(next) = self.cmd_rx.try_recv() {
                batch.push(next);
            }
            self.process_batch(batch).await;
        }

        info!("Autosave stopped (all handles dropped)");
    }

    async fn process_batch(&self, batch: Vec<AutosaveCommand>) {
        let mut pending: Option<PersistedState> = None;

        for cmd in batch {
            debug!("Autosave command: {}", cmd.name());
            match cmd {
                AutosaveCommand::Save(state) => {
                    if pending.replace(state).is_some() {
                        self.stats.coalesced.fetch_add(1, Ordering::SeqCst);
                    }
                }
                AutosaveCommand::Flush(ack) => {
                    if let Some(state) = pending.take() {
                        self.write(&state).await;
                    }
                    // Requester may have given up waiting
                    let _ = ack.send(());
                }
            }
        }

        if let Some(state) = pending {
            self.write(&state).await;
        }
    }

    async fn write(&self, state: &PersistedState) {
        let payload = match state.to_json() {
            Ok(payload) => payload,
            Err(e) => {
                self.stats.failed_writes.fetch_add(1, Ordering::SeqCst);
                error!("Persistence write failed: could not encode state: {}", e);
                return;
            }
        };

        match self.store.set(&self.key, &payload).await {
            Ok(()) => {
                self.stats.writes.fetch_add(1, Ordering::SeqCst);
                debug!(
                    "Persisted checklist state ({} bytes, ts={})",
                    payload.len(),
                    state.timestamp
                );
            }
            Err(e) => {
                self.stats.failed_writes.fetch_add(1, Ordering::SeqCst);
                error!("Persistence write failed for '{}': {:#}", self.key, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checklist::{DailyChecklist, SetupChecklist, SetupFlag};
    use crate::infrastructure::storage::InMemoryKeyValueStore;

    fn snapshot(setup: SetupChecklist, ts: i64) -> PersistedState {
        PersistedState::new(setup, DailyChecklist::default(), ts)
    }

    #[tokio::test]
    async fn test_flush_waits_for_write() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let (handle, _join) = AutosaveService::spawn(store.clone(), "state");

        let setup = SetupChecklist::default().toggled(SetupFlag::BiasCleared);
        handle.schedule(snapshot(setup, 1));
        handle.flush().await.unwrap();

        let raw = store.get("state").await.unwrap().expect("state written");
        let stored = PersistedState::decode(&raw).unwrap().state;
        assert_eq!(stored.setup_checklist, setup);
        assert_eq!(stored.timestamp, 1);
    }

    #[tokio::test]
    async fn test_task_stops_when_handles_dropped() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let (handle, join) = AutosaveService::spawn(store.clone(), "state");

        handle.schedule(snapshot(SetupChecklist::default(), 7));
        drop(handle);
        join.await.unwrap();

        // Queued snapshot is still written before the task exits
        assert!(store.get("state").await.unwrap().is_some());
    }

    #[test]
    fn test_command_names() {
        let (tx, _rx) = oneshot::channel();
        assert_eq!(AutosaveCommand::Flush(tx).name(), "Flush");
        assert_eq!(
            AutosaveCommand::Save(snapshot(SetupChecklist::default(), 0)).name(),
            "Save"
        );
    }
}
