//! Company use cases on top of a [`CompanyStore`].
//!
//! Storage outcomes are classified here: a missing row becomes NotFound, a
//! duplicate name becomes BadRequest and every other storage failure becomes
//! Internal with the cause kept for the logs.

use std::{future::Future, pin::Pin, sync::Arc};

use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Company, CompanyInput};
use crate::repos::{CompanyRepo, RepoError, RepoResult};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait CompanyStore: Send + Sync {
    fn get(&self, id: Uuid) -> BoxFuture<'_, RepoResult<Company>>;

    fn create<'a>(&'a self, input: &'a CompanyInput) -> BoxFuture<'a, RepoResult<Uuid>>;

    // Err(NotFound) when no row has `id`.
    fn update<'a>(&'a self, id: Uuid, input: &'a CompanyInput) -> BoxFuture<'a, RepoResult<()>>;

    // Err(NotFound) when no row has `id`.
    fn delete(&self, id: Uuid) -> BoxFuture<'_, RepoResult<()>>;
}

impl CompanyStore for CompanyRepo {
    fn get(&self, id: Uuid) -> BoxFuture<'_, RepoResult<Company>> {
        Box::pin(async move { CompanyRepo::get(self, id).await })
    }

    fn create<'a>(&'a self, input: &'a CompanyInput) -> BoxFuture<'a, RepoResult<Uuid>> {
        Box::pin(async move { CompanyRepo::create(self, input).await })
    }

    fn update<'a>(&'a self, id: Uuid, input: &'a CompanyInput) -> BoxFuture<'a, RepoResult<()>> {
        Box::pin(async move { CompanyRepo::update(self, id, input).await })
    }

    fn delete(&self, id: Uuid) -> BoxFuture<'_, RepoResult<()>> {
        Box::pin(async move { CompanyRepo::delete(self, id).await })
    }
}

#[derive(Clone)]
pub struct CompanyService {
    store: Arc<dyn CompanyStore>,
}

impl CompanyService {
    pub fn new(store: Arc<dyn CompanyStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, id: Uuid) -> Result<Company, AppError> {
        self.store
            .get(id)
            .await
            .map_err(|e| classify(e, "failed to get company"))
    }

    pub async fn create(&self, input: &CompanyInput) -> Result<Uuid, AppError> {
        self.store
            .create(input)
            .await
            .map_err(|e| classify(e, "failed to create company"))
    }

    pub async fn update(&self, id: Uuid, input: &CompanyInput) -> Result<(), AppError> {
        self.store
            .update(id, input)
            .await
            .map_err(|e| classify(e, "failed to update company"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.store
            .delete(id)
            .await
            .map_err(|e| classify(e, "failed to delete company"))
    }
}

fn classify(err: RepoError, action: &'static str) -> AppError {
    match err {
        RepoError::Db(_) => AppError::internal_wrapped(err, action),
        other => AppError::from(other),
    }
}
