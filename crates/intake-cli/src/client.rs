//! Async HTTP client wrapping the intake JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use intake_core::enquiry::{Enquiry, EnquiryId, NewEnquiry};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

/// Connection settings for the intake API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Async HTTP client for the intake JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

#[derive(Deserialize)]
struct SubmitResponse {
  id: EnquiryId,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.config.base_url.trim_end_matches('/'), path)
  }

  // ── Enquiries ─────────────────────────────────────────────────────────────

  /// `POST /api/enquiries` — returns the identifier of the stored record.
  pub async fn submit_enquiry(&self, input: &NewEnquiry) -> Result<EnquiryId> {
    let body = json!({
      "fullName": input.full_name,
      "phone":    input.phone,
      "email":    input.email,
      "service":  input.service,
      "country":  input.country,
      "message":  input.message,
    });

    let resp = self
      .client
      .post(self.url("/enquiries"))
      .json(&body)
      .send()
      .await
      .context("POST /enquiries failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("POST /enquiries → {}", resp.status()));
    }
    let parsed: SubmitResponse =
      resp.json().await.context("deserialising enquiry id")?;
    Ok(parsed.id)
  }

  /// `GET /api/enquiries[?sort=timestamp]`
  pub async fn list_enquiries(&self, by_time: bool) -> Result<Vec<Enquiry>> {
    let mut req = self.client.get(self.url("/enquiries"));
    if by_time {
      req = req.query(&[("sort", "timestamp")]);
    }

    let resp = req.send().await.context("GET /enquiries failed")?;
    if !resp.status().is_success() {
      return Err(anyhow!("GET /enquiries → {}", resp.status()));
    }
    resp.json().await.context("deserialising enquiries")
  }

  // ── Subscribers ───────────────────────────────────────────────────────────

  /// `POST /api/subscribers`
  pub async fn add_subscriber(&self, email: &str) -> Result<()> {
    let resp = self
      .client
      .post(self.url("/subscribers"))
      .json(&json!({ "email": email }))
      .send()
      .await
      .context("POST /subscribers failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("POST /subscribers → {}", resp.status()));
    }
    Ok(())
  }

  /// `GET /api/subscribers`
  pub async fn list_subscribers(&self) -> Result<Vec<String>> {
    let resp = self
      .client
      .get(self.url("/subscribers"))
      .send()
      .await
      .context("GET /subscribers failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /subscribers → {}", resp.status()));
    }
    resp.json().await.context("deserialising subscribers")
  }
}
