//! JSON REST API for the lead intake service.
//!
//! Exposes an axum [`Router`] backed by any store implementing
//! [`EnquiryStore`] and [`SubscriberStore`]. TLS and transport concerns are
//! the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", intake_api::api_router(store.clone()))
//! ```

pub mod enquiries;
pub mod error;
pub mod subscribers;

use std::sync::Arc;

use axum::{Router, routing::get};
use intake_core::store::{EnquiryStore, SubscriberStore};

pub use error::ApiError;

#[cfg(test)]
mod tests;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: EnquiryStore + SubscriberStore + Clone + Send + Sync + 'static,
{
  Router::new()
    // Enquiries
    .route(
      "/enquiries",
      get(enquiries::list::<S>).post(enquiries::submit::<S>),
    )
    // Subscribers
    .route(
      "/subscribers",
      get(subscribers::list::<S>).post(subscribers::add::<S>),
    )
    .with_state(store)
}
