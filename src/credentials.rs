//! # Credential Storage & Masking
//!
//! The one persistent pair in the whole service: the user's YouTube Data API
//! key, stored under a fixed name. The store is an injected interface so the
//! API layer and its tests run without a real persistence backend.
//!
//! Masking is display-only. The storage path never transforms the value, so
//! a save followed by a read yields the identical string.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::error::InvalidArgument;

/// Fixed storage name for the YouTube Data API key.
pub const API_KEY_NAME: &str = "youtubeApiKey";

const MASK_CHAR: char = '•';

/// Partially redacted display form of a credential: first four and last four
/// characters preserved, everything between replaced by mask dots.
///
/// Keys of eight characters or fewer have no middle to hide; they pass
/// through whole rather than risking overlapping slices. Character-based so
/// multi-byte keys cannot split a code point.
pub fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len());
    out.extend(&chars[..4]);
    out.extend(std::iter::repeat(MASK_CHAR).take(chars.len() - 8));
    out.extend(&chars[chars.len() - 4..]);
    out
}

/// Short stable fingerprint for log lines. Raw credentials never reach the
/// logs; only this hash does.
pub(crate) fn anon_hash(value: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Validate a credential the user submitted for saving.
/// The only rule is non-empty-after-trim; the exact string is what gets stored.
pub fn validate(key: &str) -> Result<(), InvalidArgument> {
    if key.trim().is_empty() {
        return Err(InvalidArgument::EmptyCredential);
    }
    Ok(())
}

/// Injected key-value storage for credentials.
pub trait CredentialStore: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str);
    fn remove(&self, name: &str);
}

/// In-memory store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, name: &str) -> Option<String> {
        self.inner
            .lock()
            .expect("credential store mutex poisoned")
            .get(name)
            .cloned()
    }

    fn set(&self, name: &str, value: &str) {
        self.inner
            .lock()
            .expect("credential store mutex poisoned")
            .insert(name.to_string(), value.to_string());
    }

    fn remove(&self, name: &str) {
        self.inner
            .lock()
            .expect("credential store mutex poisoned")
            .remove(name);
    }
}

/// JSON-file-backed store. The whole map is rewritten on every mutation;
/// with a single stored pair that is the cheapest correct thing.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    cache: Mutex<HashMap<String, String>>,
}

impl FileCredentialStore {
    /// Open (or lazily create) the store at `path`. An unreadable or
    /// malformed file starts the store empty rather than failing the boot.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let cache = load_map(&path).unwrap_or_default();
        Self {
            path,
            cache: Mutex::new(cache),
        }
    }

    fn persist(&self, cache: &HashMap<String, String>) {
        if let Err(e) = store_map(&self.path, cache) {
            tracing::warn!(error = ?e, path = %self.path.display(), "credential store write failed");
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, name: &str) -> Option<String> {
        self.cache
            .lock()
            .expect("credential store mutex poisoned")
            .get(name)
            .cloned()
    }

    fn set(&self, name: &str, value: &str) {
        let mut cache = self.cache.lock().expect("credential store mutex poisoned");
        cache.insert(name.to_string(), value.to_string());
        self.persist(&cache);
    }

    fn remove(&self, name: &str) {
        let mut cache = self.cache.lock().expect("credential store mutex poisoned");
        cache.remove(name);
        self.persist(&cache);
    }
}

fn load_map(path: &Path) -> Result<HashMap<String, String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading credentials from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn store_map(path: &Path, map: &HashMap<String, String>) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating credential dir {}", dir.display()))?;
        }
    }
    let raw = serde_json::to_string_pretty(map)?;
    fs::write(path, raw).with_context(|| format!("writing credentials to {}", path.display()))?;
    Ok(())
}
