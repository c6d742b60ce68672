#![allow(dead_code)]

//! In-process stand-in for the Archivist REST API.
//!
//! Serves subjects, assets, events, locations and the app IDP token
//! exchange from memory, with the service's paging (`page_size` /
//! `page_token` / `next_page_token`), `x-total-count` header, bearer auth
//! and delayed confirmation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use archivist_sdk::{Archivist, AuthMethod, ClientConfig, ConfirmConfig};
use axum::extract::{Path, Query, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde_json::{json, Map, Value};
use uuid::Uuid;

pub const TOKEN: &str = "test-token";
pub const CLIENT_ID: &str = "test-client";
pub const CLIENT_SECRET: &str = "test-secret";

/// Asset reads before an asset turns `CONFIRMED`.
pub const ASSET_CONFIRM_AFTER_READS: u32 = 2;

#[derive(Default)]
pub struct Store {
    collections: HashMap<&'static str, Vec<Value>>,
    reads: HashMap<String, u32>,
    pub list_requests: u32,
    pub omit_total_count: bool,
    pub fail_confirmation: bool,
}

impl Store {
    pub fn items(&self, kind: &'static str) -> &[Value] {
        self.collections.get(kind).map(Vec::as_slice).unwrap_or_default()
    }
}

pub type Shared = Arc<Mutex<Store>>;

pub struct FakeArchivist {
    pub url: String,
    pub store: Shared,
}

impl FakeArchivist {
    pub async fn spawn() -> Self {
        let store = Shared::default();
        let app = router(store.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            url: format!("http://{addr}"),
            store,
        }
    }

    /// Small pages and fast confirmation polling.
    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            page_size: 2,
            confirm: ConfirmConfig {
                initial_delay_ms: 5,
                max_delay_ms: 20,
                multiplier: 2.0,
                max_time_secs: 5,
            },
            ..ClientConfig::default().with_url(&self.url)
        }
    }

    pub fn client(&self) -> Archivist {
        Archivist::new(self.config(), AuthMethod::Bearer(TOKEN.into())).unwrap()
    }

    pub fn list_requests(&self) -> u32 {
        self.store.lock().unwrap().list_requests
    }
}

pub fn router(store: Shared) -> Router {
    Router::new()
        .route("/archivist/iam/v1/appidp/token", post(token))
        .route("/archivist/iam/v1/subjects", get(list_subjects).post(create_subject))
        .route(
            "/archivist/iam/v1/subjects/:uuid",
            get(read_subject).patch(patch_subject).delete(delete_subject),
        )
        .route("/archivist/v2/assets", get(list_assets).post(create_asset))
        .route("/archivist/v2/assets/:asset", get(read_asset))
        .route("/archivist/v2/assets/:asset/events", get(list_events).post(create_event))
        .route("/archivist/v2/assets/:asset/events/:event", get(read_event))
        .route("/archivist/v2/locations", get(list_locations).post(create_location))
        .route(
            "/archivist/v2/locations/:uuid",
            get(read_location).patch(patch_location).delete(delete_location),
        )
        .with_state(store)
}

// ---- auth ----

fn check_auth(headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Bearer {TOKEN}");
    match headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        _ => Err(error(StatusCode::UNAUTHORIZED, "unauthenticated")),
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"code": status.as_u16(), "message": message}))).into_response()
}

async fn token(Form(form): Form<HashMap<String, String>>) -> Response {
    let field = |k: &str| form.get(k).map(String::as_str);
    if field("grant_type") != Some("client_credentials")
        || field("client_id") != Some(CLIENT_ID)
        || field("client_secret") != Some(CLIENT_SECRET)
    {
        return error(StatusCode::UNAUTHORIZED, "bad client credentials");
    }
    Json(json!({"access_token": TOKEN, "token_type": "Bearer", "expires_in": 3600})).into_response()
}

// ---- generic collection handling ----

fn insert(store: &Shared, kind: &'static str, item: Value) -> Response {
    store
        .lock()
        .unwrap()
        .collections
        .entry(kind)
        .or_default()
        .push(item.clone());
    Json(item).into_response()
}

fn object(body: Value) -> Map<String, Value> {
    match body {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn with_position<F>(store: &Shared, kind: &'static str, identity: &str, f: F) -> Response
where
    F: FnOnce(&mut Store, usize) -> Response,
{
    let mut store = store.lock().unwrap();
    let position = store
        .items(kind)
        .iter()
        .position(|item| item["identity"] == identity);
    match position {
        Some(index) => f(&mut *store, index),
        None => error(StatusCode::NOT_FOUND, "not found"),
    }
}

fn read(store: &Shared, kind: &'static str, identity: &str) -> Response {
    with_position(store, kind, identity, |s, i| Json(s.items(kind)[i].clone()).into_response())
}

fn patch(store: &Shared, kind: &'static str, identity: &str, body: Value) -> Response {
    with_position(store, kind, identity, |s, i| {
        let item = &mut s.collections.get_mut(kind).unwrap()[i];
        if let (Value::Object(target), Value::Object(fields)) = (item, body) {
            for (k, v) in fields {
                target.insert(k, v);
            }
        }
        Json(s.items(kind)[i].clone()).into_response()
    })
}

fn delete(store: &Shared, kind: &'static str, identity: &str) -> Response {
    with_position(store, kind, identity, |s, i| {
        s.collections.get_mut(kind).unwrap().remove(i);
        Json(json!({})).into_response()
    })
}

fn field_matches(item: &Value, key: &str, expected: &str) -> bool {
    let found = key.split('.').try_fold(item, |v, part| v.get(part));
    match found {
        Some(Value::String(s)) => s == expected,
        Some(Value::Array(items)) => items.iter().any(|v| match v {
            Value::String(s) => s == expected,
            other => other.to_string() == expected,
        }),
        Some(other) => other.to_string() == expected,
        None => false,
    }
}

fn list(
    store: &Shared,
    kind: &'static str,
    label: &str,
    params: Vec<(String, String)>,
    scope: impl Fn(&Value) -> bool,
) -> Response {
    let mut store = store.lock().unwrap();
    store.list_requests += 1;

    let mut page_size = usize::MAX;
    let mut offset = 0usize;
    let mut filters = Vec::new();
    for (key, value) in params {
        match key.as_str() {
            "page_size" => page_size = value.parse().unwrap_or(usize::MAX),
            "page_token" => offset = value.parse().unwrap_or(0),
            _ => filters.push((key, value)),
        }
    }

    let matched: Vec<Value> = store
        .items(kind)
        .iter()
        .filter(|item| scope(item))
        .filter(|item| filters.iter().all(|(k, v)| field_matches(item, k, v)))
        .cloned()
        .collect();
    let total = matched.len();
    let start = offset.min(total);
    let end = start.saturating_add(page_size).min(total);
    let next = if end < total { end.to_string() } else { String::new() };

    let mut body = Map::new();
    body.insert(label.to_string(), Value::Array(matched[start..end].to_vec()));
    body.insert("next_page_token".into(), Value::String(next));

    let mut response = Json(Value::Object(body)).into_response();
    if !store.omit_total_count {
        response
            .headers_mut()
            .insert("x-total-count", HeaderValue::from(total));
    }
    response
}

/// Bump the read counter for `identity` and promote it to `CONFIRMED`
/// (or `FAILED`) once it has been read `after` times.
fn confirm_on_read(store: &Shared, kind: &'static str, identity: &str, after: u32) {
    let mut store = store.lock().unwrap();
    let reads = {
        let n = store.reads.entry(identity.to_string()).or_default();
        *n += 1;
        *n
    };
    if reads < after {
        return;
    }
    let status = if store.fail_confirmation { "FAILED" } else { "CONFIRMED" };
    if let Some(items) = store.collections.get_mut(kind) {
        for item in items.iter_mut().filter(|item| item["identity"] == identity) {
            item["confirmation_status"] = Value::from(status);
        }
    }
}

// ---- subjects ----

async fn create_subject(
    State(store): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    let mut subject = object(body);
    subject.insert("identity".into(), json!(format!("subjects/{}", Uuid::new_v4())));
    subject.entry("wallet_address").or_insert(json!([]));
    subject.insert("tenant".into(), json!("tenant/test"));
    insert(&store, "subjects", Value::Object(subject))
}

async fn list_subjects(
    State(store): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    list(&store, "subjects", "subjects", params, |_| true)
}

async fn read_subject(
    State(store): State<Shared>,
    headers: HeaderMap,
    Path(uuid): Path<String>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    read(&store, "subjects", &format!("subjects/{uuid}"))
}

async fn patch_subject(
    State(store): State<Shared>,
    headers: HeaderMap,
    Path(uuid): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    patch(&store, "subjects", &format!("subjects/{uuid}"), body)
}

async fn delete_subject(
    State(store): State<Shared>,
    headers: HeaderMap,
    Path(uuid): Path<String>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    delete(&store, "subjects", &format!("subjects/{uuid}"))
}

// ---- assets ----

async fn create_asset(
    State(store): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    let mut asset = object(body);
    asset.insert("identity".into(), json!(format!("assets/{}", Uuid::new_v4())));
    asset.insert("confirmation_status".into(), json!("PENDING"));
    asset.insert("tracked".into(), json!("TRACKED"));
    asset.insert("owner".into(), json!("0x0000000000000000000000000000000000000001"));
    asset.entry("storage_integrity").or_insert(json!("TENANT_STORAGE"));
    insert(&store, "assets", Value::Object(asset))
}

async fn list_assets(
    State(store): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    list(&store, "assets", "assets", params, |_| true)
}

async fn read_asset(
    State(store): State<Shared>,
    headers: HeaderMap,
    Path(asset): Path<String>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    let identity = format!("assets/{asset}");
    confirm_on_read(&store, "assets", &identity, ASSET_CONFIRM_AFTER_READS);
    read(&store, "assets", &identity)
}

// ---- events ----

async fn create_event(
    State(store): State<Shared>,
    headers: HeaderMap,
    Path(asset): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    let asset_identity = format!("assets/{asset}");
    let exists = store
        .lock()
        .unwrap()
        .items("assets")
        .iter()
        .any(|a| a["identity"] == asset_identity.as_str());
    if !exists {
        return error(StatusCode::NOT_FOUND, "asset not found");
    }
    let mut event = object(body);
    event.insert(
        "identity".into(),
        json!(format!("{asset_identity}/events/{}", Uuid::new_v4())),
    );
    event.insert("asset_identity".into(), json!(asset_identity));
    event.insert("confirmation_status".into(), json!("PENDING"));
    event.insert("timestamp_accepted".into(), json!("2026-10-19T12:00:00Z"));
    insert(&store, "events", Value::Object(event))
}

async fn list_events(
    State(store): State<Shared>,
    headers: HeaderMap,
    Path(asset): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    let asset_identity = format!("assets/{asset}");
    list(&store, "events", "events", params, move |event| {
        asset == "-" || event["asset_identity"] == asset_identity.as_str()
    })
}

async fn read_event(
    State(store): State<Shared>,
    headers: HeaderMap,
    Path((asset, event)): Path<(String, String)>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    let identity = format!("assets/{asset}/events/{event}");
    confirm_on_read(&store, "events", &identity, 1);
    read(&store, "events", &identity)
}

// ---- locations ----

async fn create_location(
    State(store): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    let mut location = object(body);
    location.insert("identity".into(), json!(format!("locations/{}", Uuid::new_v4())));
    insert(&store, "locations", Value::Object(location))
}

async fn list_locations(
    State(store): State<Shared>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    list(&store, "locations", "locations", params, |_| true)
}

async fn read_location(
    State(store): State<Shared>,
    headers: HeaderMap,
    Path(uuid): Path<String>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    read(&store, "locations", &format!("locations/{uuid}"))
}

async fn patch_location(
    State(store): State<Shared>,
    headers: HeaderMap,
    Path(uuid): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    patch(&store, "locations", &format!("locations/{uuid}"), body)
}

async fn delete_location(
    State(store): State<Shared>,
    headers: HeaderMap,
    Path(uuid): Path<String>,
) -> Response {
    if let Err(r) = check_auth(&headers) {
        return r;
    }
    delete(&store, "locations", &format!("locations/{uuid}"))
}
