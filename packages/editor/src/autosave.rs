//! # Persistence Boundary
//!
//! The builder never stores anything itself. It hands documents to a
//! host-supplied [`SaveHandler`], either on request or, with auto-save on,
//! after edits stop for a quiet period.
//!
//! ```text
//! edit → watch::Sender (latest document) → debounce task → handler.save()
//! ```
//!
//! Edits never wait on the task. A burst of edits inside the quiet period
//! produces one save of the final state. Failed saves are logged; the next
//! edit schedules another attempt.

use futures::future::BoxFuture;
use pagecraft_model::Document;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("Save failed: {0}")]
    Failed(String),

    #[error("Save rejected: {0}")]
    Rejected(String),
}

/// Host callback that persists a document
pub trait SaveHandler: Send + Sync {
    fn save(&self, document: Document) -> BoxFuture<'static, Result<(), SaveError>>;
}

impl<F, Fut> SaveHandler for F
where
    F: Fn(Document) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), SaveError>> + Send + 'static,
{
    fn save(&self, document: Document) -> BoxFuture<'static, Result<(), SaveError>> {
        Box::pin(self(document))
    }
}

/// Debounced background saver; dropping it stops the task
pub struct AutoSaver {
    sender: watch::Sender<Option<Document>>,
    task: JoinHandle<()>,
}

impl AutoSaver {
    /// Spawn the debounce task on the current tokio runtime
    pub fn spawn(handler: Arc<dyn SaveHandler>, quiet_period: Duration) -> Self {
        let (sender, receiver) = watch::channel(None);
        let task = tokio::spawn(run(receiver, handler, quiet_period));

        debug!(quiet_period_ms = quiet_period.as_millis() as u64, "Auto-save started");
        Self { sender, task }
    }

    /// Publish the latest document; restarts the quiet period
    pub fn schedule(&self, document: Document) {
        self.sender.send_replace(Some(document));
    }
}

impl Drop for AutoSaver {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    mut receiver: watch::Receiver<Option<Document>>,
    handler: Arc<dyn SaveHandler>,
    quiet_period: Duration,
) {
    loop {
        if receiver.changed().await.is_err() {
            return;
        }

        // Wait until no newer edit arrives for a whole quiet period
        loop {
            match tokio::time::timeout(quiet_period, receiver.changed()).await {
                Ok(Ok(())) => continue,
                Ok(Err(_)) => return,
                Err(_) => break,
            }
        }

        let latest = receiver.borrow_and_update().clone();
        let Some(document) = latest else {
            continue;
        };

        let components = document.len();
        match handler.save(document).await {
            Ok(()) => debug!(components, "Auto-saved document"),
            Err(error) => warn!(%error, "Auto-save failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording_handler(saved: Arc<Mutex<Vec<Document>>>) -> Arc<dyn SaveHandler> {
        Arc::new(move |document: Document| {
            let saved = saved.clone();
            async move {
                saved.lock().unwrap().push(document);
                Ok::<(), SaveError>(())
            }
        })
    }

    fn titled(title: &str) -> Document {
        let mut doc = Document::new();
        doc.metadata.title = Some(title.to_string());
        doc
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_saves_once() {
        let saved = Arc::new(Mutex::new(Vec::new()));
        let saver = AutoSaver::spawn(recording_handler(saved.clone()), Duration::from_millis(2000));

        saver.schedule(titled("one"));
        tokio::time::sleep(Duration::from_millis(500)).await;
        saver.schedule(titled("two"));
        tokio::time::sleep(Duration::from_millis(500)).await;
        saver.schedule(titled("three"));

        tokio::time::sleep(Duration::from_millis(1900)).await;
        assert!(saved.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(200)).await;
        let saved = saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].metadata.title.as_deref(), Some("three"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_is_not_retried() {
        let attempts = Arc::new(Mutex::new(0usize));
        let counter = attempts.clone();
        let handler: Arc<dyn SaveHandler> = Arc::new(move |_document: Document| {
            let counter = counter.clone();
            async move {
                *counter.lock().unwrap() += 1;
                Err::<(), SaveError>(SaveError::Failed("offline".to_string()))
            }
        });
        let saver = AutoSaver::spawn(handler, Duration::from_millis(100));

        saver.schedule(titled("draft"));
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(*attempts.lock().unwrap(), 1);

        // The next edit schedules another attempt
        saver.schedule(titled("draft 2"));
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(*attempts.lock().unwrap(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_saving() {
        let saved = Arc::new(Mutex::new(Vec::new()));
        let saver = AutoSaver::spawn(recording_handler(saved.clone()), Duration::from_millis(100));

        saver.schedule(titled("never"));
        drop(saver);
        tokio::time::sleep(Duration::from_millis(1000)).await;

        assert!(saved.lock().unwrap().is_empty());
    }
}
