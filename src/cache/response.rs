//! Bounded response cache with computed per-entry TTLs.
//!
//! Entries are keyed on a deterministic fingerprint of (intent, context)
//! and carry an individually computed TTL:
//!
//! ```text
//! ttl = base_ttl * intent_multiplier * model_multiplier
//! ```
//!
//! Static intents ("get_weather", "get_time", "get_date") cache 10×
//! longer; dynamic intents ("send_message", "create_task", "update_data")
//! 10× shorter; expensive models cache longer since a hit saves more.
//! The static check runs before the dynamic one — first match wins.
//!
//! # Eviction
//!
//! When the cache grows past its configured maximum, the 10% of entries
//! with the oldest last-access time (rounded up, at least one) are
//! removed in a single batch. This is approximate LRU: removals are
//! amortised rather than performed one-at-a-time on every overflow.
//!
//! # Expiry
//!
//! `lookup` re-checks expiry on every read and deletes-then-misses past
//! the boundary, so the background [`Sweeper`](super::sweeper::Sweeper)
//! is purely a memory-reclamation aid.
//!
//! The cache owns its entries outright; all access goes through the
//! methods here, never the raw map.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use crate::config::CacheSettings;
use crate::telemetry;
use crate::types::{EngineResponse, Intent, ModelConfig, Provider};

/// Fraction of entries removed per capacity eviction.
const EVICTION_FRACTION: f64 = 0.1;

/// Intent actions containing any of these cache 10× longer.
const STATIC_INTENT_KEYWORDS: &[&str] = &["get_weather", "get_time", "get_date"];

/// Intent actions containing any of these cache 10× shorter.
const DYNAMIC_INTENT_KEYWORDS: &[&str] = &["send_message", "create_task", "update_data"];

/// Provenance metadata for a cached entry.
#[derive(Debug, Clone)]
pub struct CacheEntryMeta {
    /// Action of the intent that produced this entry.
    pub intent_action: String,
    /// Model that produced the response.
    pub model_id: String,
    /// Provider of that model.
    pub provider: Provider,
    /// Wall time the original invocation took.
    pub processing_time_ms: f64,
    /// Confidence in the cached payload (the producing model's accuracy).
    pub confidence: f64,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    response: EngineResponse,
    created: Instant,
    ttl: Duration,
    hit_count: u64,
    last_accessed: Instant,
    meta: CacheEntryMeta,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.created + self.ttl
    }
}

/// Snapshot of cache state for the administrative surface.
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Number of live entries.
    pub size: usize,
    /// Hits / (hits + misses) over the cache's lifetime; 0 before any access.
    pub hit_rate: f64,
    /// Keys of the live entries.
    pub entries: Vec<String>,
}

/// Bounded in-memory response cache.
///
/// Shared state sits behind a single mutex; the background sweeper takes
/// the same lock as foreground lookups, so compound updates (hit counts,
/// last-accessed bumps) are never torn.
pub struct ResponseCache {
    inner: Mutex<HashMap<String, CacheEntry>>,
    max_size: usize,
    base_ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResponseCache {
    /// Create a cache from settings.
    pub fn new(settings: &CacheSettings) -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            max_size: settings.max_size,
            base_ttl: Duration::from_millis(settings.base_ttl_ms),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a cached response.
    ///
    /// Atomically re-checks expiry: a past-TTL entry is deleted and the
    /// lookup reported as a miss. On hit, bumps the entry's hit count
    /// and last-accessed time before returning a copy of the response.
    pub async fn lookup(&self, key: &str) -> Option<EngineResponse> {
        let now = Instant::now();
        let mut map = self.inner.lock().await;

        if map.get(key).is_some_and(|entry| entry.is_expired(now)) {
            map.remove(key);
            metrics::counter!(telemetry::CACHE_EXPIRED_TOTAL).increment(1);
            metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
            self.misses.fetch_add(1, Ordering::Relaxed);
            return None;
        }

        match map.get_mut(key) {
            Some(entry) => {
                entry.hit_count += 1;
                entry.last_accessed = now;
                metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.response.clone())
            }
            None => {
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store a response, overwriting any existing entry under `key`.
    ///
    /// Computes the entry's TTL from the intent and model multipliers,
    /// then evicts if the cache has grown past its maximum.
    pub async fn store(
        &self,
        key: &str,
        response: EngineResponse,
        intent: &Intent,
        model: &ModelConfig,
        processing_time_ms: f64,
    ) {
        let now = Instant::now();
        let ttl = self.base_ttl.mul_f64(
            intent_ttl_multiplier(&intent.action) * model_ttl_multiplier(model),
        );
        let entry = CacheEntry {
            response,
            created: now,
            ttl,
            hit_count: 0,
            last_accessed: now,
            meta: CacheEntryMeta {
                intent_action: intent.action.clone(),
                model_id: model.id.clone(),
                provider: model.provider,
                processing_time_ms,
                confidence: model.accuracy,
            },
        };

        let mut map = self.inner.lock().await;
        map.insert(key.to_string(), entry);
        if map.len() > self.max_size {
            evict(&mut map);
        }
    }

    /// Delete every fully expired entry. Returns how many were removed.
    ///
    /// Called by the background sweeper; lookups do not depend on it.
    pub async fn remove_expired(&self) -> usize {
        let now = Instant::now();
        let mut map = self.inner.lock().await;
        let before = map.len();
        map.retain(|_, entry| !entry.is_expired(now));
        let removed = before - map.len();
        if removed > 0 {
            metrics::counter!(telemetry::CACHE_EXPIRED_TOTAL).increment(removed as u64);
        }
        removed
    }

    /// Empty the cache unconditionally.
    pub async fn clear(&self) {
        self.inner.lock().await.clear();
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Whether the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Provenance metadata for a live entry, if present.
    ///
    /// Purely observational — does not touch hit counts or access times.
    pub async fn entry_meta(&self, key: &str) -> Option<CacheEntryMeta> {
        self.inner.lock().await.get(key).map(|e| e.meta.clone())
    }

    /// Hit count of a live entry, if present.
    pub async fn entry_hit_count(&self, key: &str) -> Option<u64> {
        self.inner.lock().await.get(key).map(|e| e.hit_count)
    }

    /// Snapshot of size, lifetime hit rate, and live keys.
    pub async fn stats(&self) -> CacheStats {
        let map = self.inner.lock().await;
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let accesses = hits + misses;
        let hit_rate = if accesses == 0 {
            0.0
        } else {
            hits as f64 / accesses as f64
        };
        let mut entries: Vec<String> = map.keys().cloned().collect();
        entries.sort_unstable();
        CacheStats {
            size: map.len(),
            hit_rate,
            entries,
        }
    }
}

/// Remove the least-recently-accessed tenth of entries (at least one).
fn evict(map: &mut HashMap<String, CacheEntry>) {
    let count = ((map.len() as f64 * EVICTION_FRACTION).ceil() as usize).max(1);
    let mut by_access: Vec<(String, Instant)> = map
        .iter()
        .map(|(key, entry)| (key.clone(), entry.last_accessed))
        .collect();
    by_access.sort_by_key(|(_, accessed)| *accessed);
    for (key, _) in by_access.into_iter().take(count) {
        map.remove(&key);
    }
    metrics::counter!(telemetry::CACHE_EVICTIONS_TOTAL).increment(count as u64);
    debug!(evicted = count, remaining = map.len(), "cache eviction");
}

/// TTL multiplier from the intent's action. First matching rule wins;
/// the static check runs before the dynamic one.
fn intent_ttl_multiplier(action: &str) -> f64 {
    if STATIC_INTENT_KEYWORDS.iter().any(|k| action.contains(k)) {
        10.0
    } else if DYNAMIC_INTENT_KEYWORDS.iter().any(|k| action.contains(k)) {
        0.1
    } else {
        1.0
    }
}

/// TTL multiplier from the producing model's cost: expensive responses
/// are worth keeping longer.
fn model_ttl_multiplier(model: &ModelConfig) -> f64 {
    if model.cost_per_token > 0.01 {
        2.0
    } else if model.cost_per_token > 0.005 {
        1.5
    } else {
        1.0
    }
}

/// Compute the deterministic cache key for an (intent, context) pair.
///
/// Entities are sorted by name before serialisation so entity order
/// never changes the key; `serde_json` object keys serialise in sorted
/// order, so equal context values always produce equal JSON. The hash is
/// `DefaultHasher` (SipHash), deterministic within a process lifetime —
/// sufficient for an in-memory cache. No network or time-of-day input.
pub fn fingerprint(intent: &Intent, context: &Value) -> String {
    let mut entities: Vec<(&str, &Value)> = intent
        .entities
        .iter()
        .map(|e| (e.name.as_str(), &e.value))
        .collect();
    entities.sort_by_key(|(name, _)| *name);

    let mut hasher = DefaultHasher::new();
    intent.action.hash(&mut hasher);
    for (name, value) in entities {
        name.hash(&mut hasher);
        value.to_string().hash(&mut hasher);
    }
    context.to_string().hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn model_with_cost(cost: f64) -> ModelConfig {
        ModelConfig::new("m", "m", Provider::OpenAi)
            .cost_per_token(cost)
            .expected_latency_ms(100.0)
            .accuracy(0.9)
    }

    #[test]
    fn intent_multiplier_static_dynamic_neutral() {
        assert_eq!(intent_ttl_multiplier("get_weather_for_city"), 10.0);
        assert_eq!(intent_ttl_multiplier("send_message_to_user"), 0.1);
        assert_eq!(intent_ttl_multiplier("translate_text"), 1.0);
    }

    #[test]
    fn intent_multiplier_static_wins_over_dynamic() {
        // Matches both lists; the static check runs first.
        assert_eq!(intent_ttl_multiplier("get_time_send_message"), 10.0);
    }

    #[test]
    fn model_multiplier_cost_tiers() {
        assert_eq!(model_ttl_multiplier(&model_with_cost(0.02)), 2.0);
        assert_eq!(model_ttl_multiplier(&model_with_cost(0.01)), 1.5);
        assert_eq!(model_ttl_multiplier(&model_with_cost(0.006)), 1.5);
        assert_eq!(model_ttl_multiplier(&model_with_cost(0.005)), 1.0);
        assert_eq!(model_ttl_multiplier(&model_with_cost(0.001)), 1.0);
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let intent = Intent::new("get_weather").with_entity("city", "Oslo");
        let context = json!({"user": "a", "locale": "nb"});
        assert_eq!(
            fingerprint(&intent, &context),
            fingerprint(&intent, &context)
        );
    }

    #[test]
    fn fingerprint_ignores_entity_order() {
        let a = Intent::new("get_weather")
            .with_entity("city", "Oslo")
            .with_entity("unit", "celsius");
        let b = Intent::new("get_weather")
            .with_entity("unit", "celsius")
            .with_entity("city", "Oslo");
        let context = json!({});
        assert_eq!(fingerprint(&a, &context), fingerprint(&b, &context));
    }

    #[test]
    fn fingerprint_differs_on_action_and_context() {
        let intent = Intent::new("get_weather");
        let other = Intent::new("get_time");
        let context = json!({"k": 1});
        assert_ne!(
            fingerprint(&intent, &context),
            fingerprint(&other, &context)
        );
        assert_ne!(
            fingerprint(&intent, &context),
            fingerprint(&intent, &json!({"k": 2}))
        );
    }
}
