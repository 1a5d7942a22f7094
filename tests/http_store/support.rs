//! Mock candidate backend served by axum.

use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use candidate_board::{Candidate, Config, Seniority};
use serde_json::{json, Value};

/// A multipart create request as the backend received it.
#[derive(Debug, Clone, Default)]
pub struct ReceivedUpload {
    pub name: String,
    pub surname: String,
    pub file_name: Option<String>,
    pub file_bytes: Vec<u8>,
}

#[derive(Default)]
struct Inner {
    records: Vec<Candidate>,
    next_id: u64,
    failure: Option<StatusCode>,
    uploads: Vec<ReceivedUpload>,
    patches: Vec<Value>,
    requests: Vec<String>,
}

#[derive(Clone, Default)]
pub struct Backend {
    inner: Arc<Mutex<Inner>>,
}

impl Backend {
    pub fn with_records(records: Vec<Candidate>) -> Self {
        let backend = Self::default();
        {
            let mut inner = backend.inner.lock().unwrap();
            inner.next_id = records.len() as u64;
            inner.records = records;
        }
        backend
    }

    /// Every request answers `status` until `recover()` is called.
    pub fn fail_with(&self, status: StatusCode) {
        self.inner.lock().unwrap().failure = Some(status);
    }

    pub fn recover(&self) {
        self.inner.lock().unwrap().failure = None;
    }

    pub fn uploads(&self) -> Vec<ReceivedUpload> {
        self.inner.lock().unwrap().uploads.clone()
    }

    pub fn patches(&self) -> Vec<Value> {
        self.inner.lock().unwrap().patches.clone()
    }

    /// `"METHOD path"` for every request, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.inner.lock().unwrap().requests.clone()
    }

    fn begin(&self, request: String) -> Result<(), Response> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request);
        match inner.failure {
            Some(status) => Err((status, Json(json!({ "error": "backend failure" }))).into_response()),
            None => Ok(()),
        }
    }
}

pub fn candidate(id: &str, name: &str, surname: &str, seniority: Seniority, years: u32, availability: bool) -> Candidate {
    Candidate {
        id: id.into(),
        name: name.into(),
        surname: surname.into(),
        seniority,
        years,
        availability,
        created_at: "2024-05-01T10:00:00.000Z".into(),
    }
}

pub fn seed() -> Vec<Candidate> {
    vec![
        candidate("1", "John", "Doe", Seniority::Junior, 2, true),
        candidate("2", "Jane", "Smith", Seniority::Senior, 7, false),
    ]
}

fn router(backend: Backend) -> Router {
    Router::new()
        .route("/candidates", get(list).post(create))
        .route("/candidates/:id", get(get_one).patch(patch_one).delete(delete_one))
        .with_state(backend)
}

/// Bind to port 0 and return a config pointing at the server.
pub async fn start_server(backend: Backend) -> Config {
    let app = router(backend);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Config::default().with_api_url(format!("http://{addr}"))
}

/// A config pointing at a port nothing listens on.
pub async fn dead_server() -> Config {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Config::default().with_api_url(format!("http://{addr}"))
}

fn not_found(id: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": format!("candidate {id} not found") })))
        .into_response()
}

async fn list(State(backend): State<Backend>) -> Response {
    if let Err(resp) = backend.begin("GET /candidates".into()) {
        return resp;
    }
    let records = backend.inner.lock().unwrap().records.clone();
    Json(records).into_response()
}

async fn get_one(State(backend): State<Backend>, Path(id): Path<String>) -> Response {
    if let Err(resp) = backend.begin(format!("GET /candidates/{id}")) {
        return resp;
    }
    let inner = backend.inner.lock().unwrap();
    match inner.records.iter().find(|c| c.id == id) {
        Some(c) => Json(c.clone()).into_response(),
        None => not_found(&id),
    }
}

async fn create(State(backend): State<Backend>, mut multipart: Multipart) -> Response {
    if let Err(resp) = backend.begin("POST /candidates".into()) {
        return resp;
    }

    let mut upload = ReceivedUpload::default();
    while let Ok(Some(field)) = multipart.next_field().await {
        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await.unwrap_or_default();
        match field_name.as_str() {
            "name" => upload.name = String::from_utf8_lossy(&data).into_owned(),
            "surname" => upload.surname = String::from_utf8_lossy(&data).into_owned(),
            "file" => {
                upload.file_name = file_name;
                upload.file_bytes = data.to_vec();
            }
            _ => {}
        }
    }

    if upload.name.is_empty() || upload.surname.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "name and surname required" })))
            .into_response();
    }

    let mut inner = backend.inner.lock().unwrap();
    inner.next_id += 1;
    let created = candidate(
        &format!("srv-{}", inner.next_id),
        &upload.name,
        &upload.surname,
        Seniority::Junior,
        0,
        upload.file_name.is_some(),
    );
    inner.records.insert(0, created.clone());
    inner.uploads.push(upload);
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn patch_one(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = backend.begin(format!("PATCH /candidates/{id}")) {
        return resp;
    }

    let mut inner = backend.inner.lock().unwrap();
    inner.patches.push(body.clone());
    let Some(record) = inner.records.iter_mut().find(|c| c.id == id) else {
        return not_found(&id);
    };

    if let Some(name) = body.get("name").and_then(Value::as_str) {
        record.name = name.to_string();
    }
    if let Some(surname) = body.get("surname").and_then(Value::as_str) {
        record.surname = surname.to_string();
    }
    if let Some(years) = body.get("years").and_then(Value::as_u64) {
        record.years = years as u32;
    }
    if let Some(availability) = body.get("availability").and_then(Value::as_bool) {
        record.availability = availability;
    }
    if let Some(seniority) = body.get("seniority").cloned() {
        if let Ok(seniority) = serde_json::from_value::<Seniority>(seniority) {
            record.seniority = seniority;
        }
    }

    // Echo only the id and the fields that were sent.
    let mut echo = body;
    echo["id"] = json!(id);
    Json(echo).into_response()
}

async fn delete_one(State(backend): State<Backend>, Path(id): Path<String>) -> Response {
    if let Err(resp) = backend.begin(format!("DELETE /candidates/{id}")) {
        return resp;
    }

    let mut inner = backend.inner.lock().unwrap();
    let before = inner.records.len();
    inner.records.retain(|c| c.id != id);
    if inner.records.len() == before {
        return not_found(&id);
    }
    StatusCode::NO_CONTENT.into_response()
}
