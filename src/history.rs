//! In-memory log of recent channel lookups, for the debug endpoint and
//! eventual trend detection over repeat queries.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::channel::ChannelSummary;

#[derive(Debug, Clone, Serialize)]
pub struct LookupEntry {
    pub ts: DateTime<Utc>,
    pub channel_id: String,
    pub channel_name: String,
    pub subscribers: u64,
}

#[derive(Debug)]
pub struct History {
    inner: Mutex<Vec<LookupEntry>>,
    cap: usize,
}

impl History {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Mutex::new(Vec::with_capacity(cap.min(10_000))),
            cap: cap.min(10_000),
        }
    }

    pub fn push(&self, channel: &ChannelSummary) {
        let entry = LookupEntry {
            ts: Utc::now(),
            channel_id: channel.id.clone(),
            channel_name: channel.name.clone(),
            subscribers: channel.subscribers,
        };

        let mut v = self.inner.lock().expect("history mutex poisoned");
        v.push(entry);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
    }

    pub fn snapshot_last_n(&self, n: usize) -> Vec<LookupEntry> {
        let v = self.inner.lock().expect("history mutex poisoned");
        let len = v.len();
        let start = len.saturating_sub(n);
        v[start..].to_vec()
    }
}
