//! Router-level tests driving the JSON API against an in-memory store.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use intake_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;
use uuid::Uuid;

use crate::api_router;

async fn store() -> Arc<SqliteStore> {
  Arc::new(SqliteStore::open_in_memory().await.unwrap())
}

async fn oneshot_json(
  store: Arc<SqliteStore>,
  method: &str,
  uri:    &str,
  body:   Option<Value>,
) -> Response {
  let builder = Request::builder().method(method).uri(uri);
  let req = match body {
    Some(v) => builder
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(v.to_string()))
      .unwrap(),
    None => builder.body(Body::empty()).unwrap(),
  };
  api_router(store).oneshot(req).await.unwrap()
}

async fn body_json(resp: Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

fn enquiry_body(full_name: &str) -> Value {
  json!({
    "fullName": full_name,
    "phone":    "+91 98765 43210",
    "email":    "rahul@example.com",
    "service":  "studyAbroad",
    "country":  "Canada",
    "message":  "Interested in MS programs",
  })
}

// ─── Enquiries ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn submit_returns_201_and_a_fresh_id() {
  let store = store().await;

  let resp =
    oneshot_json(store.clone(), "POST", "/enquiries", Some(enquiry_body("Rahul Sharma")))
      .await;
  assert_eq!(resp.status(), StatusCode::CREATED);

  let body = body_json(resp).await;
  let id = body["id"].as_str().unwrap();
  Uuid::parse_str(id).unwrap();

  // The listing now holds exactly one record matching the submitted fields,
  // with the published wire names.
  let resp = oneshot_json(store, "GET", "/enquiries", None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let list = body_json(resp).await;
  let list = list.as_array().unwrap();
  assert_eq!(list.len(), 1);

  let e = &list[0];
  assert_eq!(e["id"].as_str().unwrap(), id);
  assert_eq!(e["fullName"], "Rahul Sharma");
  assert_eq!(e["phone"], "+91 98765 43210");
  assert_eq!(e["email"], "rahul@example.com");
  assert_eq!(e["service"], "studyAbroad");
  assert_eq!(e["country"], "Canada");
  assert_eq!(e["message"], "Interested in MS programs");
  assert!(e["timestamp"].is_string());
}

#[tokio::test]
async fn unknown_service_never_reaches_the_store() {
  let store = store().await;

  let mut body = enquiry_body("Rahul Sharma");
  body["service"] = json!("gardening");

  let resp = oneshot_json(store.clone(), "POST", "/enquiries", Some(body)).await;
  assert!(resp.status().is_client_error(), "status: {}", resp.status());

  let resp = oneshot_json(store, "GET", "/enquiries", None).await;
  assert_eq!(body_json(resp).await.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn missing_field_is_rejected() {
  let store = store().await;

  let mut body = enquiry_body("Rahul Sharma");
  body.as_object_mut().unwrap().remove("message");

  let resp = oneshot_json(store, "POST", "/enquiries", Some(body)).await;
  assert!(resp.status().is_client_error(), "status: {}", resp.status());
}

#[tokio::test]
async fn listing_keeps_submission_order() {
  let store = store().await;

  for name in ["A", "B", "C"] {
    let resp =
      oneshot_json(store.clone(), "POST", "/enquiries", Some(enquiry_body(name))).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
  }

  let resp = oneshot_json(store, "GET", "/enquiries", None).await;
  let list = body_json(resp).await;
  let names: Vec<&str> = list
    .as_array()
    .unwrap()
    .iter()
    .map(|e| e["fullName"].as_str().unwrap())
    .collect();
  assert_eq!(names, ["A", "B", "C"]);
}

#[tokio::test]
async fn sorted_listing_is_a_time_ordered_permutation() {
  let store = store().await;

  for name in ["A", "B", "C"] {
    oneshot_json(store.clone(), "POST", "/enquiries", Some(enquiry_body(name))).await;
  }

  let resp = oneshot_json(store.clone(), "GET", "/enquiries?sort=timestamp", None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let sorted = body_json(resp).await;
  let sorted = sorted.as_array().unwrap().clone();

  let resp = oneshot_json(store, "GET", "/enquiries", None).await;
  let natural = body_json(resp).await;
  let natural = natural.as_array().unwrap().clone();

  // Same records; timestamps non-decreasing across the sorted sequence.
  assert_eq!(sorted.len(), natural.len());
  let mut sorted_ids: Vec<&str> =
    sorted.iter().map(|e| e["id"].as_str().unwrap()).collect();
  let mut natural_ids: Vec<&str> =
    natural.iter().map(|e| e["id"].as_str().unwrap()).collect();
  sorted_ids.sort_unstable();
  natural_ids.sort_unstable();
  assert_eq!(sorted_ids, natural_ids);

  let stamps: Vec<&str> = sorted
    .iter()
    .map(|e| e["timestamp"].as_str().unwrap())
    .collect();
  assert!(stamps.windows(2).all(|w| w[0] <= w[1]), "stamps: {stamps:?}");
}

#[tokio::test]
async fn unknown_sort_key_is_rejected() {
  let store = store().await;
  let resp =
    oneshot_json(store, "GET", "/enquiries?sort=alphabetical", None).await;
  assert!(resp.status().is_client_error(), "status: {}", resp.status());
}

// ─── Subscribers ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn subscribe_then_list_round_trips_verbatim() {
  let store = store().await;

  let resp = oneshot_json(
    store.clone(),
    "POST",
    "/subscribers",
    Some(json!({"email": "MiXeD.Case@Example.COM"})),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::CREATED);

  let resp = oneshot_json(store, "GET", "/subscribers", None).await;
  assert_eq!(body_json(resp).await, json!(["MiXeD.Case@Example.COM"]));
}

#[tokio::test]
async fn duplicate_subscribers_are_listed_twice() {
  let store = store().await;

  for email in ["a@example.com", "b@example.com", "a@example.com"] {
    let resp = oneshot_json(
      store.clone(),
      "POST",
      "/subscribers",
      Some(json!({ "email": email })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
  }

  let resp = oneshot_json(store, "GET", "/subscribers", None).await;
  assert_eq!(
    body_json(resp).await,
    json!(["a@example.com", "b@example.com", "a@example.com"])
  );
}
