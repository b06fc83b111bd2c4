//! Handlers for `/subscribers` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/subscribers` | All emails, insertion order |
//! | `POST` | `/subscribers` | Body: `{"email":"..."}`; returns 201, empty body |

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use intake_core::store::SubscriberStore;
use serde::Deserialize;

use crate::error::ApiError;

// ─── Add ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AddSubscriberBody {
  pub email: String,
}

/// `POST /subscribers` — body: `{"email":"..."}`.
///
/// The address is appended verbatim; re-adding an existing address yields a
/// second entry.
pub async fn add<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<AddSubscriberBody>,
) -> Result<StatusCode, ApiError>
where
  S: SubscriberStore,
{
  store
    .add_subscriber(body.email)
    .await
    .map_err(ApiError::store)?;
  Ok(StatusCode::CREATED)
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /subscribers`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<String>>, ApiError>
where
  S: SubscriberStore,
{
  let emails = store.list_subscribers().await.map_err(ApiError::store)?;
  Ok(Json(emails))
}
