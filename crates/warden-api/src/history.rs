//! Handlers for one history kind, mounted at `/sms` or `/url`.
//!
//! | Method   | Path   | Notes |
//! |----------|--------|-------|
//! | `GET`    | `/sms` | Optional `?limit=N`; defaults to the kind's page size |
//! | `POST`   | `/sms` | Body: `{"payload":"...","verdict":"unknown"}` |
//! | `DELETE` | `/sms` | Clears the history |

use std::sync::Arc;

use axum::{
  Json,
  extract::{FromRequest, FromRequestParts, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use warden_core::{HistoryKind, HistoryRepository, RecordOf};

use crate::error::ApiError;

// ─── Extractors ───────────────────────────────────────────────────────────────

/// [`Json`] body whose rejections render as an [`ApiError`] JSON body.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// [`Query`] string whose rejections render as an [`ApiError`] JSON body.
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub limit: Option<usize>,
}

/// `GET /<kind>[?limit=N]`
pub async fn list<K, R>(
  State(repo): State<Arc<R>>,
  ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<RecordOf<K>>>, ApiError>
where
  K: HistoryKind,
  R: HistoryRepository<K>,
{
  let limit = params.limit.unwrap_or(K::DEFAULT_LIMIT);
  let records = repo.recent(limit).await.map_err(ApiError::from_store)?;
  Ok(Json(records))
}

// ─── Save ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SaveBody<V> {
  pub payload: String,
  pub verdict: V,
}

/// `POST /<kind>` — body: `{"payload":"...","verdict":"safe"}`
pub async fn save<K, R>(
  State(repo): State<Arc<R>>,
  ApiJson(body): ApiJson<SaveBody<K::Verdict>>,
) -> Result<impl IntoResponse, ApiError>
where
  K: HistoryKind,
  R: HistoryRepository<K>,
{
  let record = repo
    .save(body.payload, body.verdict)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(record)))
}

// ─── Clear ────────────────────────────────────────────────────────────────────

/// `DELETE /<kind>`
pub async fn clear<K, R>(State(repo): State<Arc<R>>) -> Result<StatusCode, ApiError>
where
  K: HistoryKind,
  R: HistoryRepository<K>,
{
  repo.clear().await.map_err(ApiError::from_store)?;
  tracing::info!(kind = K::NAME, "history cleared");
  Ok(StatusCode::NO_CONTENT)
}
