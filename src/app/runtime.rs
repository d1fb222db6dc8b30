use crate::input::{spawn_input_thread, InputAction};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Terminal input listener scoped to a mounted carousel.
///
/// Subscribing starts the polling thread; dropping the subscription stops it and waits for
/// it to exit, so no listener outlives the carousel that owned it.
pub struct InputSubscription {
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputSubscription {
    pub fn subscribe(poll_interval: Duration) -> (Self, UnboundedReceiver<InputAction>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let handle = spawn_input_thread(tx, Arc::clone(&shutdown), poll_interval);
        (
            Self {
                shutdown,
                handle: Some(handle),
            },
            rx,
        )
    }

    pub fn unsubscribe(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("input thread panicked");
            }
        }
    }
}

impl Drop for InputSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;

    const POLL: Duration = Duration::from_millis(5);

    #[test]
    fn unsubscribe_joins_and_is_idempotent() {
        let (mut subscription, _rx) = InputSubscription::subscribe(POLL);
        assert!(subscription.handle.is_some());

        subscription.unsubscribe();
        assert!(subscription.handle.is_none());
        assert!(subscription.shutdown.load(Ordering::SeqCst));

        subscription.unsubscribe();
        assert!(subscription.handle.is_none());
    }

    #[test]
    fn dropping_subscription_closes_the_channel() {
        let (subscription, mut rx) = InputSubscription::subscribe(POLL);
        drop(subscription);

        // Anything sent before shutdown may still be queued; after it the sender is gone.
        loop {
            match rx.try_recv() {
                Ok(_) => continue,
                Err(err) => {
                    assert_eq!(err, TryRecvError::Disconnected);
                    break;
                }
            }
        }
    }
}
