//! Repository trait for bootcamp data access.

use crate::domain::entities::{Bootcamp, BootcampPatch, NewBootcamp};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for bootcamp storage.
///
/// The store is the sole arbiter of consistency: no operation here holds a
/// lock or spans a transaction, and "find then mutate" sequences in the
/// service layer are not atomic.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgBootcampRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BootcampRepository: Send + Sync {
    /// Lists all bootcamps, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Bootcamp>, AppError>;

    /// Finds a bootcamp by id.
    ///
    /// Returns `Ok(None)` when the id does not resolve; the service layer
    /// turns that into a deterministic 404.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Bootcamp>, AppError>;

    /// Creates a new bootcamp and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the name is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_bootcamp: NewBootcamp) -> Result<Bootcamp, AppError>;

    /// Partially updates a bootcamp.
    ///
    /// Only fields present in [`BootcampPatch`] are modified. Returns
    /// `Ok(None)` when the id does not resolve.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a renamed bootcamp collides with an
    /// existing name. Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, patch: BootcampPatch) -> Result<Option<Bootcamp>, AppError>;

    /// Deletes a bootcamp by id.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the id did
    /// not resolve. Deletion cascades to the bootcamp's courses at the
    /// store level.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
