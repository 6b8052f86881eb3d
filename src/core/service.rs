use serde::de::DeserializeOwned;

use crate::core::{Ack, DeleteTarget, Hero, NewHero, Notifier, Transport};
use crate::utils::error::{ApiError, Result};

/// Facade over the remote hero collection. Every operation issues exactly one
/// request, records one status message per observed outcome, and converts any
/// failure into the operation's fallback value instead of returning an error.
///
/// The service is stateless between calls; concurrent callers get independent
/// requests with no ordering or deduplication.
pub struct HeroService<T: Transport, N: Notifier> {
    transport: T,
    notifier: N,
    heroes_url: String,
}

impl<T: Transport, N: Notifier> HeroService<T, N> {
    pub fn new(transport: T, notifier: N, heroes_url: impl Into<String>) -> Self {
        Self {
            transport,
            notifier,
            heroes_url: heroes_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch every hero. Returns an empty list on failure.
    pub async fn get_heroes(&self) -> Vec<Hero> {
        match self.fetch::<Vec<Hero>>(&self.heroes_url).await {
            Ok(heroes) => {
                self.log("fetched heroes");
                heroes
            }
            Err(err) => self.recover("getHeroes", err, Vec::new()),
        }
    }

    /// Fetch a single hero by id. `None` covers both "no such hero" and
    /// transport failure; callers treat the two identically.
    pub async fn get_hero(&self, id: u64) -> Option<Hero> {
        let url = format!("{}/{}", self.heroes_url, id);
        match self.fetch::<Hero>(&url).await {
            Ok(hero) => {
                self.log(&format!("fetched hero id={}", id));
                Some(hero)
            }
            Err(err) => self.recover(&format!("getHero id={}", id), err, None),
        }
    }

    /// Create a hero. On success returns the record as echoed by the server,
    /// including its assigned id.
    pub async fn add_hero(&self, hero: NewHero) -> Option<Hero> {
        match self.request_add(&hero).await {
            Ok(created) => {
                self.log(&format!("added hero w/ id={}", created.id));
                Some(created)
            }
            Err(err) => self.recover("addHero", err, None),
        }
    }

    /// Replace an existing hero. The full record, id included, goes in the
    /// request body per the collection's wire contract.
    pub async fn update_hero(&self, hero: &Hero) -> Option<Ack> {
        match self.request_update(hero).await {
            Ok(ack) => {
                self.log(&format!("updated hero id={}", hero.id));
                Some(ack)
            }
            Err(err) => self.recover("updateHero", err, None),
        }
    }

    /// Delete a hero, addressed either by bare id or by a full record.
    pub async fn delete_hero(&self, target: impl Into<DeleteTarget>) -> Option<Ack> {
        let id = target.into().id();
        let url = format!("{}/{}", self.heroes_url, id);
        match self.transport.delete(&url).await {
            Ok(raw) => {
                self.log(&format!("deleted hero id={}", id));
                Some(Ack::new(raw))
            }
            Err(err) => self.recover("deleteHero", err, None),
        }
    }

    /// Search heroes whose name matches `term`. A whitespace-only term
    /// short-circuits: no request, no message, empty result.
    pub async fn search_heroes(&self, term: &str) -> Vec<Hero> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }
        match self.request_search(term).await {
            Ok(heroes) => {
                self.log(&format!("found heroes matching {}", term));
                heroes
            }
            Err(err) => self.recover("searchHeroes", err, Vec::new()),
        }
    }

    async fn fetch<V: DeserializeOwned>(&self, url: &str) -> Result<V> {
        let raw = self.transport.get(url).await?;
        Ok(serde_json::from_value(raw)?)
    }

    async fn request_add(&self, hero: &NewHero) -> Result<Hero> {
        let body = serde_json::to_value(hero)?;
        let raw = self.transport.post(&self.heroes_url, body).await?;
        Ok(serde_json::from_value(raw)?)
    }

    async fn request_update(&self, hero: &Hero) -> Result<Ack> {
        let body = serde_json::to_value(hero)?;
        let raw = self.transport.put(&self.heroes_url, body).await?;
        Ok(Ack::new(raw))
    }

    async fn request_search(&self, term: &str) -> Result<Vec<Hero>> {
        let encoded: String = url::form_urlencoded::byte_serialize(term.as_bytes()).collect();
        let url = format!("{}/?name={}", self.heroes_url, encoded);
        self.fetch(&url).await
    }

    fn log(&self, message: &str) {
        self.notifier.add(&format!("Hero service: {}", message));
    }

    fn recover<V>(&self, operation: &str, err: ApiError, fallback: V) -> V {
        tracing::error!("{} failed: {}", operation, err);
        self.log(&format!("{} failed: {}", operation, err));
        fallback
    }
}
