#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use company_api::{
    app::build_router,
    middleware::{chain::BoxFuture, http::HttpLimits},
    models::{Company, CompanyInput},
    repos::{RepoError, RepoResult},
    services::{CompanyService, CompanyStore, TokenService},
    state::AppState,
};

pub const SECRET: &str = "an-integration-test-secret-of-32b";

/// HashMap-backed store that counts every call, so tests can prove a
/// rejected request never reached storage.
#[derive(Default)]
pub struct InMemoryStore {
    companies: Mutex<HashMap<Uuid, Company>>,
    calls: AtomicUsize,
    broken: AtomicBool,
}

impl InMemoryStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every later call fails like a lost database connection.
    pub fn break_connection(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }

    fn enter(&self) -> RepoResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.broken.load(Ordering::SeqCst) {
            return Err(RepoError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    fn name_taken(map: &HashMap<Uuid, Company>, name: &str, except: Option<Uuid>) -> bool {
        map.values()
            .any(|c| c.name == name && Some(c.id) != except)
    }
}

impl CompanyStore for InMemoryStore {
    fn get(&self, id: Uuid) -> BoxFuture<'_, RepoResult<Company>> {
        Box::pin(async move {
            self.enter()?;
            self.companies
                .lock()
                .unwrap()
                .get(&id)
                .cloned()
                .ok_or(RepoError::NotFound)
        })
    }

    fn create<'a>(&'a self, input: &'a CompanyInput) -> BoxFuture<'a, RepoResult<Uuid>> {
        Box::pin(async move {
            self.enter()?;
            let mut map = self.companies.lock().unwrap();
            if Self::name_taken(&map, &input.name, None) {
                return Err(RepoError::Conflict);
            }
            let id = Uuid::new_v4();
            map.insert(id, input.clone().into_company(id));
            Ok(id)
        })
    }

    fn update<'a>(&'a self, id: Uuid, input: &'a CompanyInput) -> BoxFuture<'a, RepoResult<()>> {
        Box::pin(async move {
            self.enter()?;
            let mut map = self.companies.lock().unwrap();
            if !map.contains_key(&id) {
                return Err(RepoError::NotFound);
            }
            if Self::name_taken(&map, &input.name, Some(id)) {
                return Err(RepoError::Conflict);
            }
            map.insert(id, input.clone().into_company(id));
            Ok(())
        })
    }

    fn delete(&self, id: Uuid) -> BoxFuture<'_, RepoResult<()>> {
        Box::pin(async move {
            self.enter()?;
            self.companies
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(RepoError::NotFound)
        })
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    pub tokens: Arc<TokenService>,
}

pub fn app() -> TestApp {
    let store = Arc::new(InMemoryStore::default());
    let tokens = Arc::new(TokenService::new(SECRET).unwrap());
    let state = AppState::new(tokens.clone(), CompanyService::new(store.clone()));

    TestApp {
        router: build_router(state, HttpLimits::default()),
        store,
        tokens,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let res = self.router.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let headers = res.headers().clone();
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Logs in and returns a ready-to-send `Cookie` header value.
    pub async fn login(&self, username: &str) -> String {
        let res = self
            .send(json_request(
                Method::POST,
                "/login",
                None,
                serde_json::json!({"username": username, "password": "pw"}),
            ))
            .await;
        assert_eq!(res.status, StatusCode::OK);

        let set_cookie = res.headers[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }
}

pub fn json_request(method: Method, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: Method, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn company_json(name: &str) -> Value {
    serde_json::json!({
        "name": name,
        "description": "makes things",
        "employees": 12,
        "registered": true,
        "type": "Corporation",
    })
}
