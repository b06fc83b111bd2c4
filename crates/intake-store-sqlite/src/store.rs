//! [`SqliteStore`] — the SQLite implementation of [`EnquiryStore`] and
//! [`SubscriberStore`].

use std::{path::Path, sync::Arc};

use intake_core::{
  clock::{Clock, IdSource, RandomIds, SystemClock},
  enquiry::{Enquiry, NewEnquiry},
  store::{EnquiryStore, SubscriberStore},
};

use crate::{
  encode::{RawEnquiry, encode_dt, encode_uuid},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An intake store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn:  tokio_rusqlite::Connection,
  clock: Arc<dyn Clock>,
  ids:   Arc<dyn IdSource>,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    Self::open_with(path, Arc::new(SystemClock), Arc::new(RandomIds)).await
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    Self::open_in_memory_with(Arc::new(SystemClock), Arc::new(RandomIds)).await
  }

  /// Open a store at `path` with caller-supplied time and identity sources.
  pub async fn open_with(
    path:  impl AsRef<Path>,
    clock: Arc<dyn Clock>,
    ids:   Arc<dyn IdSource>,
  ) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn, clock, ids };
    store.init_schema().await?;
    Ok(store)
  }

  /// In-memory store with caller-supplied time and identity sources.
  pub async fn open_in_memory_with(
    clock: Arc<dyn Clock>,
    ids:   Arc<dyn IdSource>,
  ) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn, clock, ids };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// List enquiries with the given `ORDER BY` expression.
  ///
  /// `rowid` is the insertion-order key; the time-sorted read uses
  /// `submitted_at` with `rowid` as the deterministic tie-break.
  async fn list_enquiries_ordered(
    &self,
    order_by: &'static str,
  ) -> Result<Vec<Enquiry>> {
    let raws: Vec<RawEnquiry> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT enquiry_id, full_name, phone, email, service, country,
                  message, submitted_at
           FROM enquiries
           ORDER BY {order_by}"
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawEnquiry {
              enquiry_id:   row.get(0)?,
              full_name:    row.get(1)?,
              phone:        row.get(2)?,
              email:        row.get(3)?,
              service:      row.get(4)?,
              country:      row.get(5)?,
              message:      row.get(6)?,
              submitted_at: row.get(7)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEnquiry::into_enquiry).collect()
  }
}

// ─── EnquiryStore impl ───────────────────────────────────────────────────────

impl EnquiryStore for SqliteStore {
  type Error = Error;

  async fn submit_enquiry(&self, input: NewEnquiry) -> Result<Enquiry> {
    let clock = Arc::clone(&self.clock);
    let ids   = Arc::clone(&self.ids);

    let enquiry = self
      .conn
      .call(move |conn| {
        // Identity and time are assigned on the connection thread, where
        // calls are serialised: concurrent submissions cannot interleave
        // assignment and insertion, so timestamps never decrease in
        // insertion order.
        let enquiry = Enquiry {
          id:           ids.next_id(),
          service:      input.service,
          country:      input.country,
          full_name:    input.full_name,
          email:        input.email,
          message:      input.message,
          submitted_at: clock.now(),
          phone:        input.phone,
        };

        conn.execute(
          "INSERT INTO enquiries (
             enquiry_id, full_name, phone, email, service, country, message,
             submitted_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            encode_uuid(enquiry.id),
            enquiry.full_name,
            enquiry.phone,
            enquiry.email,
            enquiry.service.as_str(),
            enquiry.country,
            enquiry.message,
            encode_dt(enquiry.submitted_at),
          ],
        )?;

        Ok(enquiry)
      })
      .await?;

    Ok(enquiry)
  }

  async fn list_enquiries(&self) -> Result<Vec<Enquiry>> {
    self.list_enquiries_ordered("rowid").await
  }

  async fn list_enquiries_by_submission_time(&self) -> Result<Vec<Enquiry>> {
    self.list_enquiries_ordered("submitted_at, rowid").await
  }
}

// ─── SubscriberStore impl ────────────────────────────────────────────────────

impl SubscriberStore for SqliteStore {
  type Error = Error;

  async fn add_subscriber(&self, email: String) -> Result<()> {
    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO subscribers (email) VALUES (?1)",
          rusqlite::params![email],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn list_subscribers(&self) -> Result<Vec<String>> {
    let emails = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT email FROM subscribers ORDER BY rowid")?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(emails)
  }
}
