use std::sync::Arc;

use metrics::counter;
use shuttle_axum::axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::channel::ChannelSummary;
use crate::compare::{self, ComparisonReport};
use crate::config::AppConfig;
use crate::credentials::{
    anon_hash, mask, validate, CredentialStore, FileCredentialStore, MemoryCredentialStore,
    API_KEY_NAME,
};
use crate::directory::ChannelDirectory;
use crate::error::InvalidArgument;
use crate::history::{History, LookupEntry};
use crate::insight::{self, Classification, Insight};

#[derive(Clone)]
pub struct AppState {
    directory: Arc<ChannelDirectory>,
    credentials: Arc<dyn CredentialStore>,
    history: Arc<History>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Production wiring: file-backed credentials, directory from the
    /// configured file (seed fallback inside).
    pub fn from_config(config: AppConfig) -> Self {
        let directory =
            ChannelDirectory::load_from_file(&config.directory_path, config.lookup_latency());
        let credentials = FileCredentialStore::open(&config.credentials_path);
        let history = History::with_capacity(config.history_capacity);
        Self {
            directory: Arc::new(directory),
            credentials: Arc::new(credentials),
            history: Arc::new(history),
            config: Arc::new(config),
        }
    }

    /// Ephemeral wiring for tests: seeded directory, in-memory credentials.
    pub fn in_memory(config: AppConfig) -> Self {
        let directory = ChannelDirectory::seeded(config.lookup_latency());
        let history = History::with_capacity(config.history_capacity);
        Self {
            directory: Arc::new(directory),
            credentials: Arc::new(MemoryCredentialStore::new()),
            history: Arc::new(history),
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/channels/featured", get(featured))
        .route("/channels/search", post(search))
        .route("/channels/{id}", get(get_channel))
        .route("/channels/{id}/insights", get(channel_insights))
        .route("/insights/classify", post(classify_tags))
        .route("/compare", post(compare_channels))
        .route(
            "/settings/api-key",
            get(get_api_key).put(put_api_key).delete(delete_api_key),
        )
        .route("/debug/history", get(debug_history))
        .route("/admin/reload-directory", post(admin_reload_directory))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

type ApiError = (StatusCode, Json<serde_json::Value>);

fn bad_request(err: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": err.to_string() })),
    )
}

async fn featured(State(state): State<AppState>) -> Json<Vec<ChannelSummary>> {
    Json(state.directory.featured())
}

#[derive(serde::Deserialize)]
struct SearchReq {
    query: String,
}

async fn search(
    State(state): State<AppState>,
    Json(body): Json<SearchReq>,
) -> Result<Json<ChannelSummary>, ApiError> {
    if body.query.trim().is_empty() {
        return Err(bad_request("please enter a channel URL or ID"));
    }
    let channel = state.directory.lookup(&body.query).await;
    state.history.push(&channel);
    counter!("channel_lookups_total").increment(1);
    Ok(Json(channel))
}

async fn get_channel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ChannelSummary> {
    let channel = state.directory.lookup(&id).await;
    state.history.push(&channel);
    counter!("channel_lookups_total").increment(1);
    Json(channel)
}

/// An insight with its display classification applied.
#[derive(serde::Serialize)]
struct ClassifiedInsight {
    #[serde(flatten)]
    insight: Insight,
    classification: Classification,
}

async fn channel_insights(
    State(_state): State<AppState>,
    Path(_id): Path<String>,
) -> Json<Vec<ClassifiedInsight>> {
    let items = insight::seeded_insights()
        .iter()
        .map(|i| ClassifiedInsight {
            insight: i.clone(),
            classification: i.classification(),
        })
        .collect();
    Json(items)
}

#[derive(serde::Deserialize)]
struct ClassifyReq {
    #[serde(rename = "type")]
    insight_type: String,
    impact: String,
}

async fn classify_tags(
    Json(body): Json<ClassifyReq>,
) -> Result<Json<Classification>, ApiError> {
    let c = insight::classify(&body.insight_type, &body.impact).map_err(bad_request)?;
    Ok(Json(c))
}

#[derive(serde::Deserialize)]
struct CompareReq {
    channel1: String,
    channel2: String,
}

async fn compare_channels(
    State(state): State<AppState>,
    Json(body): Json<CompareReq>,
) -> Result<Json<ComparisonReport>, ApiError> {
    if body.channel1.trim().is_empty() || body.channel2.trim().is_empty() {
        return Err(bad_request("both channels are required for a comparison"));
    }

    // One simulated fetch covers both channels.
    let latency = state.config.compare_latency();
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }

    let first = state
        .directory
        .find_now(&crate::directory::resolve_query(&body.channel1));
    let second = state
        .directory
        .find_now(&crate::directory::resolve_query(&body.channel2));
    counter!("comparisons_total").increment(1);
    Ok(Json(compare::build_report(first, second)))
}

#[derive(serde::Serialize)]
struct ApiKeyResp {
    configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    masked: Option<String>,
}

async fn get_api_key(State(state): State<AppState>) -> Json<ApiKeyResp> {
    let stored = state.credentials.get(API_KEY_NAME);
    Json(ApiKeyResp {
        configured: stored.is_some(),
        masked: stored.map(|k| mask(&k)),
    })
}

#[derive(serde::Deserialize)]
struct SaveApiKeyReq {
    api_key: String,
}

async fn put_api_key(
    State(state): State<AppState>,
    Json(body): Json<SaveApiKeyReq>,
) -> Result<Json<ApiKeyResp>, ApiError> {
    validate(&body.api_key).map_err(|e: InvalidArgument| bad_request(e))?;

    // Stored verbatim; masking is display-only.
    state.credentials.set(API_KEY_NAME, &body.api_key);
    info!(target: "settings", key_id = %anon_hash(&body.api_key), "api key saved");

    Ok(Json(ApiKeyResp {
        configured: true,
        masked: Some(mask(&body.api_key)),
    }))
}

async fn delete_api_key(State(state): State<AppState>) -> Json<ApiKeyResp> {
    state.credentials.remove(API_KEY_NAME);
    info!(target: "settings", "api key cleared");
    Json(ApiKeyResp {
        configured: false,
        masked: None,
    })
}

#[derive(serde::Deserialize)]
struct HistoryParams {
    #[serde(default)]
    n: Option<usize>,
}

async fn debug_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Json<Vec<LookupEntry>> {
    Json(state.history.snapshot_last_n(params.n.unwrap_or(20)))
}

async fn admin_reload_directory(State(state): State<AppState>) -> Json<serde_json::Value> {
    let count = state.directory.reload_from_file(&state.config.directory_path);
    Json(serde_json::json!({ "channels": count }))
}
