//! Enquiry types — the lead-generation record captured by the intake service.
//!
//! An enquiry is immutable once stored. Callers supply the form fields; the
//! store assigns identity and the submission timestamp. No update or delete
//! operation exists anywhere in the public surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

/// Identifier assigned to an [`Enquiry`] at insertion.
pub type EnquiryId = Uuid;

// ─── Service ─────────────────────────────────────────────────────────────────

/// The closed set of consultancy offerings a lead can ask about.
///
/// The serde names double as the wire and storage representation; a value
/// outside this set fails deserialisation and can never reach a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Service {
  StudyAbroad,
  JobPlacement,
  IeltsTraining,
  ShortTermCourses,
  OnlineCourses,
}

impl Service {
  /// Every variant, in declaration order. Used for CLI error text.
  pub const ALL: [Service; 5] = [
    Service::StudyAbroad,
    Service::JobPlacement,
    Service::IeltsTraining,
    Service::ShortTermCourses,
    Service::OnlineCourses,
  ];

  /// The discriminant string stored in the `service` column.
  /// Must match the `rename_all = "camelCase"` serde names above.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::StudyAbroad => "studyAbroad",
      Self::JobPlacement => "jobPlacement",
      Self::IeltsTraining => "ieltsTraining",
      Self::ShortTermCourses => "shortTermCourses",
      Self::OnlineCourses => "onlineCourses",
    }
  }
}

impl std::fmt::Display for Service {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for Service {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Error> {
    match s {
      "studyAbroad" => Ok(Self::StudyAbroad),
      "jobPlacement" => Ok(Self::JobPlacement),
      "ieltsTraining" => Ok(Self::IeltsTraining),
      "shortTermCourses" => Ok(Self::ShortTermCourses),
      "onlineCourses" => Ok(Self::OnlineCourses),
      other => Err(Error::UnknownService(other.to_owned())),
    }
  }
}

// ─── Enquiry ─────────────────────────────────────────────────────────────────

/// A stored lead-generation submission. Once written, no field ever changes.
///
/// Field contents are taken verbatim from the caller — the web form owns
/// field validation, the server never re-checks it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enquiry {
  pub id:           EnquiryId,
  pub service:      Service,
  pub country:      String,
  pub full_name:    String,
  pub email:        String,
  pub message:      String,
  /// Server-assigned submission time; never accepted from callers.
  /// Non-decreasing in insertion order.
  #[serde(rename = "timestamp")]
  pub submitted_at: DateTime<Utc>,
  pub phone:        String,
}

// ─── NewEnquiry ──────────────────────────────────────────────────────────────

/// Input to [`crate::store::EnquiryStore::submit_enquiry`].
/// `id` and `submitted_at` are always set by the store; they are not
/// accepted from callers.
#[derive(Debug, Clone)]
pub struct NewEnquiry {
  pub full_name: String,
  pub phone:     String,
  pub email:     String,
  pub service:   Service,
  pub country:   String,
  pub message:   String,
}
