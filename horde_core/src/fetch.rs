use std::collections::HashMap;

use tracing::{debug, warn};

use crate::card::Card;
use crate::error::FetchError;

/// What a cached request is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKey {
    /// The session-long pool of token zombies
    ZombieTokens,
    /// The random non-token zombie for one wave
    ZombieNonToken(u32),
}

/// Something that can answer a [`FetchKey`], e.g. the card-search API
pub trait CardSource: Send + Sync {
    fn load(&self, key: FetchKey) -> Result<Vec<Card>, FetchError>;
}

/// Snapshot a caller renders from, borrowed from the cache
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchState<'a> {
    pub loading: bool,
    pub cards: &'a [Card],
    pub error: Option<&'a FetchError>,
}

#[derive(Debug, Clone)]
enum Entry {
    InFlight,
    Ready(Vec<Card>),
    Failed(FetchError),
}

/// Request memo keyed by [`FetchKey`].
///
/// The first lookup of a key marks it in flight and asks the caller to start
/// the request; every later lookup is served from the cache. Entries are
/// never revalidated.
#[derive(Debug, Default)]
pub struct FetchCache {
    entries: HashMap<FetchKey, Entry>,
}

impl FetchCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `key`, calling `start` exactly once over the cache's lifetime
    /// if nothing has been requested for it yet.
    pub fn fetch<F>(&mut self, key: FetchKey, start: F) -> FetchState<'_>
    where
        F: FnOnce(FetchKey),
    {
        self.request(key, start);
        self.peek(key)
    }

    /// The starting half of [`FetchCache::fetch`], without building a snapshot
    pub fn request<F>(&mut self, key: FetchKey, start: F)
    where
        F: FnOnce(FetchKey),
    {
        if !self.entries.contains_key(&key) {
            debug!(?key, "starting fetch");
            self.entries.insert(key, Entry::InFlight);
            start(key);
        }
    }

    /// Current state for `key` without starting anything
    pub fn peek(&self, key: FetchKey) -> FetchState<'_> {
        match self.entries.get(&key) {
            None => FetchState::default(),
            Some(Entry::InFlight) => FetchState {
                loading: true,
                ..FetchState::default()
            },
            Some(Entry::Ready(cards)) => FetchState {
                loading: false,
                cards: cards.as_slice(),
                error: None,
            },
            Some(Entry::Failed(err)) => FetchState {
                loading: false,
                cards: &[],
                error: Some(err),
            },
        }
    }

    /// Record the outcome of a request started by [`FetchCache::fetch`].
    /// Outcomes for keys that were never requested are dropped.
    pub fn resolve(&mut self, key: FetchKey, result: Result<Vec<Card>, FetchError>) {
        let Some(entry) = self.entries.get_mut(&key) else {
            debug!(?key, "dropping result for unrequested key");
            return;
        };
        *entry = match result {
            Ok(cards) => {
                debug!(?key, count = cards.len(), "fetch resolved");
                Entry::Ready(cards)
            }
            Err(err) => {
                warn!(?key, %err, "fetch failed");
                Entry::Failed(err)
            }
        };
    }

    pub fn is_requested(&self, key: FetchKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Forget per-wave entries older than `wave`; the token pool is kept
    pub fn forget_waves_before(&mut self, wave: u32) {
        self.entries.retain(|key, _| match key {
            FetchKey::ZombieTokens => true,
            FetchKey::ZombieNonToken(w) => *w >= wave,
        });
    }
}
