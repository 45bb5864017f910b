/**
 * User Model and Store
 *
 * This module defines the user record, the `UserStore` trait the auth
 * handlers are written against, and its PostgreSQL and in-memory
 * implementations.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;

/// User record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (unique, 3-30 chars, alphanumeric + underscore)
    pub username: String,
    /// User email address
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Store for user records
///
/// Injected through the application state so tests can substitute the
/// in-memory implementation.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a new user from an already-hashed password
    async fn create_user(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<User, StoreError>;

    /// Find a user by username
    async fn user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Find a user by email
    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Find a user by ID
    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
}

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&username)
        .bind(&email)
        .bind(&password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

/// In-memory user store (tests and no-database fallback)
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(
        &self,
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<User, StoreError> {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        };
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}
