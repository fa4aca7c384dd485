//! Bootcamp CRUD orchestration.

use std::sync::Arc;

use crate::domain::entities::{Bootcamp, BootcampPatch, NewBootcamp};
use crate::domain::repositories::BootcampRepository;
use crate::error::AppError;

/// Service for bootcamp operations.
///
/// Existence is always checked before mutation or deletion so clients get a
/// deterministic 404 instead of an ambiguous store failure. The check and
/// the mutation are separate store calls; under concurrent deletion the
/// sequence can race, and the store remains the arbiter of the final state.
pub struct BootcampService<B: BootcampRepository> {
    repository: Arc<B>,
}

impl<B: BootcampRepository> BootcampService<B> {
    pub fn new(repository: Arc<B>) -> Self {
        Self { repository }
    }

    /// Lists all bootcamps.
    pub async fn list_bootcamps(&self) -> Result<Vec<Bootcamp>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a bootcamp by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve.
    pub async fn get_bootcamp(&self, id: i64) -> Result<Bootcamp, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Bootcamp not found with id of {id}")))
    }

    /// Creates a new bootcamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already taken.
    pub async fn create_bootcamp(&self, new_bootcamp: NewBootcamp) -> Result<Bootcamp, AppError> {
        self.repository.create(new_bootcamp).await
    }

    /// Partially updates a bootcamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve. The check
    /// happens before the write, so no mutation is attempted for an unknown
    /// id.
    pub async fn update_bootcamp(
        &self,
        id: i64,
        patch: BootcampPatch,
    ) -> Result<Bootcamp, AppError> {
        let existing = self.get_bootcamp(id).await?;

        if patch.is_empty() {
            return Ok(existing);
        }

        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Bootcamp not found with id of {id}")))
    }

    /// Deletes a bootcamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id does not resolve, including
    /// when the bootcamp was already deleted.
    pub async fn delete_bootcamp(&self, id: i64) -> Result<(), AppError> {
        self.get_bootcamp(id).await?;

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            // Lost the race with another deleter between check and delete.
            return Err(AppError::not_found(format!(
                "Bootcamp not found with id of {id}"
            )));
        }

        Ok(())
    }
}
