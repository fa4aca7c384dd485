//! PostgreSQL implementation of the bootcamp repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Bootcamp, BootcampPatch, NewBootcamp};
use crate::domain::repositories::BootcampRepository;
use crate::error::AppError;

const BOOTCAMP_COLUMNS: &str =
    "id, name, description, website, phone, email, careers, housing, created_at";

/// PostgreSQL repository for bootcamp storage and retrieval.
pub struct PgBootcampRepository {
    pool: Arc<PgPool>,
}

impl PgBootcampRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BootcampRepository for PgBootcampRepository {
    async fn list(&self) -> Result<Vec<Bootcamp>, AppError> {
        let bootcamps = sqlx::query_as::<_, Bootcamp>(&format!(
            "SELECT {BOOTCAMP_COLUMNS} FROM bootcamps ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(bootcamps)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Bootcamp>, AppError> {
        let bootcamp = sqlx::query_as::<_, Bootcamp>(&format!(
            "SELECT {BOOTCAMP_COLUMNS} FROM bootcamps WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(bootcamp)
    }

    async fn create(&self, new_bootcamp: NewBootcamp) -> Result<Bootcamp, AppError> {
        let bootcamp = sqlx::query_as::<_, Bootcamp>(&format!(
            r#"
            INSERT INTO bootcamps (name, description, website, phone, email, careers, housing)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {BOOTCAMP_COLUMNS}
            "#
        ))
        .bind(new_bootcamp.name)
        .bind(new_bootcamp.description)
        .bind(new_bootcamp.website)
        .bind(new_bootcamp.phone)
        .bind(new_bootcamp.email)
        .bind(new_bootcamp.careers)
        .bind(new_bootcamp.housing)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(bootcamp)
    }

    async fn update(&self, id: i64, patch: BootcampPatch) -> Result<Option<Bootcamp>, AppError> {
        // COALESCE keeps the stored value wherever the patch field is NULL.
        let bootcamp = sqlx::query_as::<_, Bootcamp>(&format!(
            r#"
            UPDATE bootcamps SET
                name        = COALESCE($2, name),
                description = COALESCE($3, description),
                website     = COALESCE($4, website),
                phone       = COALESCE($5, phone),
                email       = COALESCE($6, email),
                careers     = COALESCE($7, careers),
                housing     = COALESCE($8, housing)
            WHERE id = $1
            RETURNING {BOOTCAMP_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.website)
        .bind(patch.phone)
        .bind(patch.email)
        .bind(patch.careers)
        .bind(patch.housing)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(bootcamp)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM bootcamps WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
