//! Injected time and identity sources.
//!
//! Stores assign both the enquiry identifier and the submission timestamp.
//! The sources are explicit dependencies of the store rather than ambient
//! `Utc::now()` / `Uuid::new_v4()` calls, so tests can supply deterministic
//! values.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The current time, as observed by the store at insertion.
pub trait Clock: Send + Sync {
  fn now(&self) -> DateTime<Utc>;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> { Utc::now() }
}

/// A source of fresh enquiry identifiers.
pub trait IdSource: Send + Sync {
  fn next_id(&self) -> Uuid;
}

/// Random version-4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
  fn next_id(&self) -> Uuid { Uuid::new_v4() }
}
