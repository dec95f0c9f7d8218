use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Single-shot timer that runs a task once input has been quiet for `delay`.
///
/// Scheduling again before the timer fires aborts the pending task, so at
/// most one task is in flight. Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn schedule<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                tracing::trace!("Cancelling pending debounced task");
            }
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Waits for the pending task, if any, to run to completion.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.pending.take() {
            if let Err(e) = handle.await {
                if e.is_panic() {
                    tracing::error!("Debounced task panicked: {}", e);
                }
            }
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
