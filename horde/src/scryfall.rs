use std::time::Duration;

use horde_core::card::{ApiError, Card, CardList};
use horde_core::{CardSource, FetchError, FetchKey, HordeConfig};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tracing::info;

/// Any top-level object the card API answers with
#[derive(Debug, Deserialize)]
#[serde(tag = "object", rename_all = "lowercase")]
enum Payload {
    List(CardList),
    Card(Card),
    Error(ApiError),
}

/// Cards from a `/cards/search` response. Only the first page is used.
pub fn parse_search(body: &str) -> Result<Vec<Card>, FetchError> {
    match serde_json::from_str::<Payload>(body)? {
        Payload::List(list) => Ok(list.data),
        Payload::Card(_) => Err(FetchError::Decode("expected a list, got a card".into())),
        Payload::Error(err) => Err(err.into()),
    }
}

/// The card from a `/cards/random` response
pub fn parse_random(body: &str) -> Result<Card, FetchError> {
    match serde_json::from_str::<Payload>(body)? {
        Payload::Card(card) => Ok(card),
        Payload::List(_) => Err(FetchError::Decode("expected a card, got a list".into())),
        Payload::Error(err) => Err(err.into()),
    }
}

/// Blocking client for the public card-search API
pub struct ScryfallClient {
    client: Client,
    config: HordeConfig,
}

impl ScryfallClient {
    pub fn new(config: HordeConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Http(format!("http client init failed: {e}")))?;
        Ok(Self { client, config })
    }

    fn get(&self, url: &str, query: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .query(&[("q", query)])
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| FetchError::Http(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| FetchError::Http(e.to_string()))?;
        info!(%url, %status, bytes = body.len(), "card api responded");
        Ok(body)
    }

    pub fn zombie_tokens(&self) -> Result<Vec<Card>, FetchError> {
        let body = self.get(&self.config.token_search_url(), &self.config.token_query)?;
        parse_search(&body)
    }

    pub fn random_zombie(&self) -> Result<Card, FetchError> {
        let body = self.get(&self.config.random_card_url(), &self.config.zombie_query)?;
        parse_random(&body)
    }
}

impl CardSource for ScryfallClient {
    fn load(&self, key: FetchKey) -> Result<Vec<Card>, FetchError> {
        match key {
            FetchKey::ZombieTokens => self.zombie_tokens(),
            FetchKey::ZombieNonToken(_) => self.random_zombie().map(|card| vec![card]),
        }
    }
}
