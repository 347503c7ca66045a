// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod channel;
pub mod chart;
pub mod compare;
pub mod config;
pub mod credentials;
pub mod directory;
pub mod error;
pub mod format;
pub mod history;
pub mod insight;
pub mod metrics;

// ---- Re-exports for stable public API ----
// Router construction: `channel_analyzer::api::router` or `channel_analyzer::router`
pub use crate::api::{router, AppState};

// The presentation core, usable without the HTTP layer
pub use crate::chart::{to_chart_series, ChartKind, ChartSeries, SeriesKeys};
pub use crate::credentials::{mask, CredentialStore, API_KEY_NAME};
pub use crate::error::InvalidArgument;
pub use crate::format::{format_count, format_count_u64};
pub use crate::insight::classify;
