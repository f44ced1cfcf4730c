use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{NewProduct, NewUser, Product, User};

/// Errors surfaced by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// One page of results plus the owner's total row count (not the page count).
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Account persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new account. Fails with `Conflict` when an account with the
    /// same username or email already exists (one existence query over both).
    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Liveness probe against the backing store.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Product persistence. Every method takes the owner id explicitly and
/// conjoins it with its query: a row under a different owner is
/// indistinguishable from an absent one.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product. Fails with `Conflict` when the owner already
    /// has a product with the same SKU; other owners' SKUs do not collide.
    async fn create(&self, new_product: NewProduct) -> Result<Product, RepositoryError>;

    async fn find_by_id(&self, owner_id: Uuid, id: Uuid)
        -> Result<Option<Product>, RepositoryError>;

    /// Owner's products in creation order, plus the owner's total count.
    async fn list(
        &self,
        owner_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> Result<Page<Product>, RepositoryError>;

    /// Overwrite the quantity in place. `NotFound` when no such product
    /// exists under this owner.
    async fn update_quantity(
        &self,
        owner_id: Uuid,
        id: Uuid,
        quantity: i32,
    ) -> Result<Product, RepositoryError>;

    /// Hard delete. `NotFound` under the same ownership-scoped rule.
    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<(), RepositoryError>;
}
