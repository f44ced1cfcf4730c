use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{NewProduct, NewUser, Product, User};
use crate::database::repository::{
    Page, ProductRepository, RepositoryError, UserRepository,
};

/// Postgres-backed account repository
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Postgres-backed product repository
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        // Single existence query over both unique fields
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 OR email = $2)",
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .fetch_one(&self.pool)
        .await?;

        if exists {
            return Err(RepositoryError::Conflict(
                "Username or email already exists".to_string(),
            ));
        }

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, username, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, username, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(&new_user.name)
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Unique index closes the check/insert race
            if is_unique_violation(&e) {
                RepositoryError::Conflict("Username or email already exists".to_string())
            } else {
                RepositoryError::Sqlx(e)
            }
        })?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, username, email, password_hash, created_at, updated_at \
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, username, email, password_hash, created_at, updated_at \
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

const PRODUCT_COLUMNS: &str =
    "id, owner_id, name, type, sku, image_url, description, quantity, price, created_at, updated_at";

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product, RepositoryError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM products WHERE owner_id = $1 AND sku = $2)",
        )
        .bind(new_product.owner_id)
        .bind(&new_product.sku)
        .fetch_one(&self.pool)
        .await?;

        if exists {
            return Err(RepositoryError::Conflict(
                "Product with this SKU already exists".to_string(),
            ));
        }

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (owner_id, name, type, sku, image_url, description, quantity, price)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {PRODUCT_COLUMNS}
            "#,
        ))
        .bind(new_product.owner_id)
        .bind(&new_product.name)
        .bind(&new_product.kind)
        .bind(&new_product.sku)
        .bind(&new_product.image_url)
        .bind(&new_product.description)
        .bind(new_product.quantity)
        .bind(new_product.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::Conflict("Product with this SKU already exists".to_string())
            } else {
                RepositoryError::Sqlx(e)
            }
        })?;

        Ok(product)
    }

    async fn find_by_id(
        &self,
        owner_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1 AND owner_id = $2",
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn list(
        &self,
        owner_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> Result<Page<Product>, RepositoryError> {
        let items = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             WHERE owner_id = $1 ORDER BY created_at, id LIMIT $2 OFFSET $3",
        ))
        .bind(owner_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(Page { items, total })
    }

    async fn update_quantity(
        &self,
        owner_id: Uuid,
        id: Uuid,
        quantity: i32,
    ) -> Result<Product, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET quantity = $3, updated_at = now() \
             WHERE id = $1 AND owner_id = $2 RETURNING {PRODUCT_COLUMNS}",
        ))
        .bind(id)
        .bind(owner_id)
        .bind(quantity)
        .fetch_optional(&self.pool)
        .await?;

        product.ok_or_else(|| RepositoryError::NotFound("Product not found".to_string()))
    }

    async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Product not found".to_string()));
        }

        Ok(())
    }
}
