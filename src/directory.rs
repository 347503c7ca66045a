//! # Channel Directory
//!
//! The mock channel provider behind every lookup. A seeded directory is
//! embedded at compile time and can be swapped at runtime from a JSON file
//! (admin reload); a malformed file falls back to the seed.
//!
//! Lookups simulate network latency with a configurable delay, the way the
//! real fetch layer would behave. Resolution order: exact id, then
//! case-insensitive name, then fuzzy name match, then a deterministic
//! placeholder carrying the requested id — a lookup always resolves.

use std::fs;
use std::path::Path;
use std::sync::RwLock;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::{info, warn};

use crate::channel::ChannelSummary;

/// Minimum Jaro-Winkler similarity for a fuzzy name hit.
const FUZZY_THRESHOLD: f64 = 0.85;

static SEED: Lazy<Vec<ChannelSummary>> = Lazy::new(|| {
    let raw = include_str!("../channel_directory.json");
    parse_directory(raw).expect("valid embedded channel directory")
});

/// `youtube.com/channel/<id>`, `/c/<name>` and `/@handle` forms all reduce
/// to the trailing identifier.
static URL_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:channel/|c/|@)([^/?]+)").expect("channel url regex"));

#[derive(Deserialize)]
struct DirectoryFile {
    channels: Vec<ChannelSummary>,
}

fn parse_directory(raw: &str) -> anyhow::Result<Vec<ChannelSummary>> {
    let file: DirectoryFile = serde_json::from_str(raw)?;
    Ok(file.channels)
}

/// Reduce a user query (URL, handle, id or plain name) to a lookup key.
pub fn resolve_query(query: &str) -> String {
    let q = query.trim();
    if q.contains("youtube.com/") {
        if let Some(caps) = URL_ID.captures(q) {
            return caps[1].to_string();
        }
    }
    q.to_string()
}

#[derive(Debug)]
pub struct ChannelDirectory {
    channels: RwLock<Vec<ChannelSummary>>,
    latency: Duration,
}

impl ChannelDirectory {
    /// Directory backed by the embedded seed.
    pub fn seeded(latency: Duration) -> Self {
        Self {
            channels: RwLock::new(SEED.clone()),
            latency,
        }
    }

    /// Load from a JSON file, falling back to the embedded seed when the
    /// file is missing or malformed.
    pub fn load_from_file<P: AsRef<Path>>(path: P, latency: Duration) -> Self {
        let channels = match fs::read_to_string(path.as_ref()) {
            Ok(raw) => match parse_directory(&raw) {
                Ok(channels) => channels,
                Err(e) => {
                    warn!(error = ?e, path = %path.as_ref().display(), "bad directory file, using seed");
                    SEED.clone()
                }
            },
            Err(_) => SEED.clone(),
        };
        Self {
            channels: RwLock::new(channels),
            latency,
        }
    }

    /// Replace the directory contents from `path`; seed fallback as above.
    /// Returns the number of channels now served.
    pub fn reload_from_file<P: AsRef<Path>>(&self, path: P) -> usize {
        let fresh = match fs::read_to_string(path.as_ref()).map_err(anyhow::Error::from)
            .and_then(|raw| parse_directory(&raw))
        {
            Ok(channels) => channels,
            Err(e) => {
                warn!(error = ?e, path = %path.as_ref().display(), "directory reload failed, using seed");
                SEED.clone()
            }
        };
        let count = fresh.len();
        *self.channels.write().expect("directory rwlock poisoned") = fresh;
        info!(count, "channel directory reloaded");
        count
    }

    /// Snapshot of the seeded/featured channels, directory order.
    pub fn featured(&self) -> Vec<ChannelSummary> {
        self.channels
            .read()
            .expect("directory rwlock poisoned")
            .clone()
    }

    /// Resolve and look up a user query, simulating fetch latency first.
    pub async fn lookup(&self, query: &str) -> ChannelSummary {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let key = resolve_query(query);
        self.find_now(&key)
    }

    /// Latency-free resolution for callers that batch their own delay
    /// (the comparison handler sleeps once for both channels).
    pub fn find_now(&self, id_or_name: &str) -> ChannelSummary {
        let channels = self.channels.read().expect("directory rwlock poisoned");

        if let Some(ch) = channels.iter().find(|c| c.id == id_or_name) {
            return ch.clone();
        }

        let needle = id_or_name.to_lowercase();
        if let Some(ch) = channels.iter().find(|c| c.name.to_lowercase() == needle) {
            return ch.clone();
        }

        // Fuzzy pass over names; best score wins if it clears the bar.
        let best = channels
            .iter()
            .map(|c| (strsim::jaro_winkler(&needle, &c.name.to_lowercase()), c))
            .max_by(|(a, _), (b, _)| a.total_cmp(b));
        if let Some((score, ch)) = best {
            if score >= FUZZY_THRESHOLD {
                return ch.clone();
            }
        }

        sample_channel(id_or_name)
    }
}

/// Placeholder summary for ids the directory does not know. Deterministic:
/// same id in, same summary out, with the requested id preserved.
fn sample_channel(id: &str) -> ChannelSummary {
    ChannelSummary::new(id, "Sample Channel")
        .with_metrics(1_250_000, 25_000_000, 420)
        .with_growth(12.5)
        .with_description("This is a sample channel for demonstration")
        .with_thumbnail(
            "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?auto=format&fit=crop&w=200&h=200",
        )
}
