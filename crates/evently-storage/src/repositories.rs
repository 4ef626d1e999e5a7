// Repository layer for database operations
//
// `Database` wraps a PgPool. User persistence is exposed as inherent
// methods; event and RSVP persistence is exposed through the
// `evently_core::EventStore` impl in `event_store.rs`.

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{CreateUser, UserRow};
use crate::password;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create database connection from URL
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // ============================================
    // Users
    // ============================================

    /// Create a user, or return the existing record when the email is
    /// already registered. The password is argon2-hashed before storage.
    pub async fn create_user(&self, input: CreateUser) -> Result<UserRow> {
        let password_hash = password::hash_password(&input.password)?;
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, email, name, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            ON CONFLICT (email) DO UPDATE SET updated_at = users.updated_at
            RETURNING id, email, name, password_hash, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.email)
        .bind(&input.name)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, name, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, name, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Check a candidate password against the stored hash for `email`.
    /// Unknown emails report a failed check rather than an error.
    pub async fn verify_password(&self, email: &str, candidate: &str) -> Result<bool> {
        match self.get_user_by_email(email).await? {
            Some(user) => password::verify_password(candidate, &user.password_hash),
            None => Ok(false),
        }
    }
}
