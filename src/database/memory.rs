//! In-memory repositories for the integration test harness.
//!
//! Same contracts as the Postgres implementations, backed by process-local
//! vectors so the test suite runs without a database.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::database::models::{NewProduct, NewUser, Product, User};
use crate::database::repository::{
    Page, ProductRepository, RepositoryError, UserRepository,
};

#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;

        let exists = users
            .iter()
            .any(|u| u.username == new_user.username || u.email == new_user.email);
        if exists {
            return Err(RepositoryError::Conflict(
                "Username or email already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;

        // SKU uniqueness is scoped to the owner
        let exists = products
            .iter()
            .any(|p| p.owner_id == new_product.owner_id && p.sku == new_product.sku);
        if exists {
            return Err(RepositoryError::Conflict(
                "Product with this SKU already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            owner_id: new_product.owner_id,
            name: new_product.name,
            kind: new_product.kind,
            sku: new_product.sku,
            image_url: new_product.image_url,
            description: new_product.description,
            quantity: new_product.quantity,
            price: new_product.price,
            created_at: now,
            updated_at: now,
        };
        products.push(product.clone());

        Ok(product)
    }

    async fn find_by_id(
        &self,
        owner_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .find(|p| p.id == id && p.owner_id == owner_id)
            .cloned())
    }

    async fn list(
        &self,
        owner_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> Result<Page<Product>, RepositoryError> {
        let products = self.products.read().await;

        let owned: Vec<&Product> = products.iter().filter(|p| p.owner_id == owner_id).collect();
        let total = owned.len() as i64;

        let items = owned
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect();

        Ok(Page { items, total })
    }

    async fn update_quantity(
        &self,
        owner_id: Uuid,
        id: Uuid,
        quantity: i32,
    ) -> Result<Product, RepositoryError> {
        let mut products = self.products.write().await;

        let product = products
            .iter_mut()
            .find(|p| p.id == id && p.owner_id == owner_id)
            .ok_or_else(|| RepositoryError::NotFound("Product not found".to_string()))?;

        product.quantity = quantity;
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;

        let before = products.len();
        products.retain(|p| !(p.id == id && p.owner_id == owner_id));

        if products.len() == before {
            return Err(RepositoryError::NotFound("Product not found".to_string()));
        }

        Ok(())
    }
}
