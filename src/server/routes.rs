//! HTTP surface of the mock API: the same five routes per resource.

use std::time::{Duration, Instant};

use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::domain::{Entity, Product, User};
use crate::server::error::ServerError;
use crate::server::repository::Repository;

/// The repositories behind the router. Clones share storage.
#[derive(Clone, Default)]
pub struct Repositories {
    pub products: Repository<Product>,
    pub users: Repository<User>,
}

impl Repositories {
    pub fn seeded() -> Self {
        Self {
            products: Repository::with_records(super::fixtures::products()),
            users: Repository::with_records(super::fixtures::users()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

/// Build the full router: both resources, `/health`, and request logging
/// with the optional artificial delay.
pub fn build_router(repositories: Repositories, delay: Duration) -> Router {
    Router::new()
        .merge(resource_router(repositories.products))
        .merge(resource_router(repositories.users))
        .route("/health", get(health))
        .layer(middleware::from_fn_with_state(delay, log_requests))
}

fn resource_router<E: Entity>(repo: Repository<E>) -> Router {
    let collection = format!("/{}", E::RESOURCE);
    let item = format!("/{}/{{id}}", E::RESOURCE);
    Router::new()
        .route(&collection, get(list::<E>).post(create::<E>))
        .route(&item, get(fetch::<E>).put(update::<E>).delete(remove::<E>))
        .with_state(repo)
}

async fn list<E: Entity>(State(repo): State<Repository<E>>) -> Json<Vec<E>> {
    Json(repo.list())
}

async fn fetch<E: Entity>(
    State(repo): State<Repository<E>>,
    Path(id): Path<String>,
) -> Result<Json<E>, ServerError> {
    repo.get(&id).map(Json)
}

async fn create<E: Entity>(
    State(repo): State<Repository<E>>,
    Json(draft): Json<E::Draft>,
) -> (StatusCode, Json<E>) {
    let entity = repo.insert(draft);
    tracing::info!(resource = E::RESOURCE, id = entity.id(), "Created");
    (StatusCode::CREATED, Json(entity))
}

async fn update<E: Entity>(
    State(repo): State<Repository<E>>,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> Result<Json<E>, ServerError> {
    let entity = repo.merge(&id, patch)?;
    tracing::info!(resource = E::RESOURCE, id = %id, "Updated");
    Ok(Json(entity))
}

async fn remove<E: Entity>(
    State(repo): State<Repository<E>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    repo.delete(&id)?;
    tracing::info!(resource = E::RESOURCE, id = %id, "Deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: "catalog-console".to_string(),
    })
}

async fn log_requests(State(delay): State<Duration>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    let response = next.run(req).await;

    tracing::debug!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Request handled"
    );
    response
}
