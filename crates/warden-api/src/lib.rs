//! JSON REST API for Warden classification histories.
//!
//! Exposes an axum [`Router`] backed by any pair of
//! [`HistoryRepository`] implementations. Auth, TLS, and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", warden_api::api_router(sms.clone(), url.clone()))
//! ```

pub mod error;
pub mod history;

use std::sync::Arc;

use axum::{Router, routing::get};
use warden_core::{HistoryKind, HistoryRepository, Sms, Url};

pub use error::ApiError;

/// Build a fully-materialised API router over an SMS and a URL history.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, U>(sms: Arc<S>, url: Arc<U>) -> Router<()>
where
  S: HistoryRepository<Sms> + 'static,
  U: HistoryRepository<Url> + 'static,
{
  history_router::<Sms, S>(sms).merge(history_router::<Url, U>(url))
}

/// Routes for a single history kind, mounted at `/<kind name>`.
pub fn history_router<K, R>(repo: Arc<R>) -> Router<()>
where
  K: HistoryKind,
  R: HistoryRepository<K> + 'static,
{
  let path = format!("/{}", K::NAME);
  Router::new()
    .route(
      &path,
      get(history::list::<K, R>)
        .post(history::save::<K, R>)
        .delete(history::clear::<K, R>),
    )
    .with_state(repo)
}
