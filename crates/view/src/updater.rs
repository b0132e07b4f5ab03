//! Latest-request-wins flag updates.
//!
//! Each request is resolved after the configured delay. A newer request
//! supersedes any pending one, so a burst of input publishes only the last
//! query. Resolution itself stays synchronous; only scheduling is async.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use flagcc_core::FlagResolverTrait;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::FlagConfig;
use crate::errors::ViewError;
use crate::flag_view::{FlagQuery, FlagView};

pub struct FlagUpdater {
    resolver: Arc<dyn FlagResolverTrait>,
    config: FlagConfig,
    /// Id of the most recent request. Older tasks drop their result.
    generation: Arc<AtomicU64>,
    pending: Mutex<Option<JoinHandle<()>>>,
    sender: Arc<watch::Sender<Option<FlagView>>>,
}

impl FlagUpdater {
    pub fn new(resolver: Arc<dyn FlagResolverTrait>, config: FlagConfig) -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            resolver,
            config,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
            sender: Arc::new(sender),
        }
    }

    /// Receiver for published views. Starts at `None`.
    pub fn subscribe(&self) -> watch::Receiver<Option<FlagView>> {
        self.sender.subscribe()
    }

    /// Most recently published view.
    pub fn current(&self) -> Option<FlagView> {
        self.sender.borrow().clone()
    }

    /// Schedule a lookup, superseding any pending one.
    ///
    /// Returns `Ok(false)` for an idle query, which leaves any pending
    /// request untouched. Must be called from within a tokio runtime.
    pub fn request(&self, query: FlagQuery) -> Result<bool, ViewError> {
        if query.is_idle() {
            return Ok(false);
        }
        let handle = Handle::try_current().map_err(|_| ViewError::NoRuntime)?;

        // Generation bump, spawn and swap happen under one guard so the
        // newest generation is always the task left pending.
        let mut pending = self.lock_pending();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let resolver = Arc::clone(&self.resolver);
        let sender = Arc::clone(&self.sender);
        let config = self.config.clone();

        let task = handle.spawn(async move {
            tokio::time::sleep(config.debounce).await;
            if latest.load(Ordering::SeqCst) != generation {
                debug!("Flag request {} superseded before resolution", generation);
                return;
            }
            if let Some(view) = FlagView::build(resolver.as_ref(), &config, &query) {
                debug!(
                    "Publishing flag view {} (unknown: {})",
                    view.title, view.is_unknown
                );
                sender.send_replace(Some(view));
            }
        });

        if let Some(previous) = pending.replace(task) {
            previous.abort();
        }
        debug!("Scheduled flag request {}", generation);
        Ok(true)
    }

    /// Drop the pending request, if any.
    pub fn cancel(&self) {
        let mut pending = self.lock_pending();
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(|poisoned| {
            warn!("Flag updater mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl Drop for FlagUpdater {
    fn drop(&mut self) {
        self.cancel();
    }
}
