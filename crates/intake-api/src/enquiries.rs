//! Handlers for `/enquiries` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/enquiries` | Optional `?sort=timestamp` |
//! | `POST` | `/enquiries` | Body: [`SubmitEnquiryBody`]; returns 201 + the new id |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use intake_core::{
  enquiry::{Enquiry, EnquiryId, NewEnquiry, Service},
  store::EnquiryStore,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// Sort orders accepted by `GET /enquiries`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
  Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub sort: Option<SortKey>,
}

/// `GET /enquiries[?sort=timestamp]`
///
/// Without `sort`, records come back in insertion order. With
/// `sort=timestamp`, they come back ordered by submission time, ties kept in
/// insertion order.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Enquiry>>, ApiError>
where
  S: EnquiryStore,
{
  let enquiries = match params.sort {
    Some(SortKey::Timestamp) => store.list_enquiries_by_submission_time().await,
    None => store.list_enquiries().await,
  }
  .map_err(ApiError::store)?;

  Ok(Json(enquiries))
}

// ─── Submit ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /enquiries`.
///
/// `service` must be one of the five published values; anything else fails
/// deserialisation before a store is touched. The remaining fields are
/// stored verbatim — the submitting form owns their validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEnquiryBody {
  pub full_name: String,
  pub phone:     String,
  pub email:     String,
  pub service:   Service,
  pub country:   String,
  pub message:   String,
}

impl From<SubmitEnquiryBody> for NewEnquiry {
  fn from(b: SubmitEnquiryBody) -> Self {
    NewEnquiry {
      full_name: b.full_name,
      phone:     b.phone,
      email:     b.email,
      service:   b.service,
      country:   b.country,
      message:   b.message,
    }
  }
}

/// Response of `POST /enquiries` — the identifier of the stored record.
#[derive(Debug, Serialize)]
pub struct SubmitEnquiryResponse {
  pub id: EnquiryId,
}

/// `POST /enquiries` — returns 201 + the new enquiry id.
pub async fn submit<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<SubmitEnquiryBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: EnquiryStore,
{
  let enquiry = store
    .submit_enquiry(NewEnquiry::from(body))
    .await
    .map_err(ApiError::store)?;

  Ok((StatusCode::CREATED, Json(SubmitEnquiryResponse { id: enquiry.id })))
}
