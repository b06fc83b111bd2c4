//! The `EnquiryStore` and `SubscriberStore` traits.
//!
//! The traits are implemented by storage backends (e.g.
//! `intake-store-sqlite`). Higher layers (`intake-api`) depend on these
//! abstractions, not on any concrete backend.

use std::future::Future;

use crate::enquiry::{Enquiry, NewEnquiry};

// ─── Enquiries ───────────────────────────────────────────────────────────────

/// Append-only collection of [`Enquiry`] records.
///
/// Identifier and timestamp assignment is atomic with respect to concurrent
/// submissions: two racing calls never observe the same id, and timestamps
/// never decrease in insertion order.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait EnquiryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Assign identity and submission time to `input`, append it, and return
  /// the stored record.
  fn submit_enquiry(
    &self,
    input: NewEnquiry,
  ) -> impl Future<Output = Result<Enquiry, Self::Error>> + Send + '_;

  /// Every stored enquiry, in insertion order. No pagination, no filtering.
  fn list_enquiries(
    &self,
  ) -> impl Future<Output = Result<Vec<Enquiry>, Self::Error>> + Send + '_;

  /// Every stored enquiry, ordered by `submitted_at` ascending. Records with
  /// equal timestamps keep their relative insertion order.
  fn list_enquiries_by_submission_time(
    &self,
  ) -> impl Future<Output = Result<Vec<Enquiry>, Self::Error>> + Send + '_;
}

// ─── Subscribers ─────────────────────────────────────────────────────────────

/// Append-only registry of subscriber email addresses.
///
/// Emails are stored verbatim — no normalisation, no deduplication. Adding
/// the same address twice yields two entries.
pub trait SubscriberStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Append `email` as-is.
  fn add_subscriber(
    &self,
    email: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Every stored email, in insertion order.
  fn list_subscribers(
    &self,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;
}
