use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use horde_core::{Card, CardSource, FetchError, FetchKey};
use tracing::{info, warn};

pub type FetchOutcome = (FetchKey, Result<Vec<Card>, FetchError>);

/// Runs card requests off the UI thread and hands the outcomes back
/// through a channel the event loop drains each tick.
pub struct FetchWorker {
    source: Arc<dyn CardSource>,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
}

impl FetchWorker {
    pub fn new(source: Arc<dyn CardSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { source, tx, rx }
    }

    pub fn start(&self, key: FetchKey) {
        info!(?key, "requesting cards");
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let spawned = thread::Builder::new()
            .name(format!("fetch-{:?}", key))
            .spawn(move || {
                let outcome = source.load(key);
                // The UI may already be gone; nothing to report to then.
                let _ = tx.send((key, outcome));
            });
        if let Err(e) = spawned {
            warn!(?key, %e, "could not start fetch thread");
            let _ = self
                .tx
                .send((key, Err(FetchError::Http(format!("could not start fetch: {e}")))));
        }
    }

    /// Outcomes that have arrived since the last call, in arrival order
    pub fn drain(&self) -> Vec<FetchOutcome> {
        self.rx.try_iter().collect()
    }

    /// Block up to `timeout` for the next outcome
    #[cfg(test)]
    pub fn wait(&self, timeout: std::time::Duration) -> Option<FetchOutcome> {
        self.rx.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting(AtomicUsize);

    impl CardSource for Counting {
        fn load(&self, _key: FetchKey) -> Result<Vec<Card>, FetchError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(vec![Card::default()])
        }
    }

    #[test]
    fn test_outcome_comes_back_with_its_key() {
        let source = Arc::new(Counting(AtomicUsize::new(0)));
        let worker = FetchWorker::new(source.clone());

        worker.start(FetchKey::ZombieNonToken(3));
        let (key, outcome) = worker.wait(std::time::Duration::from_secs(5)).unwrap();

        assert_eq!(key, FetchKey::ZombieNonToken(3));
        assert_eq!(outcome.unwrap().len(), 1);
        assert_eq!(source.0.load(Ordering::SeqCst), 1);
        assert!(worker.drain().is_empty());
    }
}
