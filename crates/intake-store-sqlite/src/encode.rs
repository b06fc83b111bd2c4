//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. UUIDs are stored as
//! hyphenated lowercase strings. Services are stored by their wire
//! discriminant.

use chrono::{DateTime, Utc};
use intake_core::enquiry::{Enquiry, Service};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc>
// ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Service ─────────────────────────────────────────────────────────────────

pub fn decode_service(s: &str) -> Result<Service> { Ok(s.parse()?) }

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from an `enquiries` row.
pub struct RawEnquiry {
  pub enquiry_id:   String,
  pub full_name:    String,
  pub phone:        String,
  pub email:        String,
  pub service:      String,
  pub country:      String,
  pub message:      String,
  pub submitted_at: String,
}

impl RawEnquiry {
  pub fn into_enquiry(self) -> Result<Enquiry> {
    Ok(Enquiry {
      id:           decode_uuid(&self.enquiry_id)?,
      service:      decode_service(&self.service)?,
      country:      self.country,
      full_name:    self.full_name,
      email:        self.email,
      message:      self.message,
      submitted_at: decode_dt(&self.submitted_at)?,
      phone:        self.phone,
    })
  }
}
