//! Bootcamp entity representing a single listed bootcamp.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A bootcamp in the directory.
///
/// `careers` is stored as a text array; `housing` defaults to false at the
/// store level when omitted on creation.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Bootcamp {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub careers: Vec<String>,
    pub housing: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new bootcamp.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBootcamp {
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub careers: Vec<String>,
    #[serde(default)]
    pub housing: bool,
}

/// Partial update for an existing bootcamp.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct BootcampPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub careers: Option<Vec<String>>,
    pub housing: Option<bool>,
}

impl BootcampPatch {
    /// Returns true when no field is set, i.e. the update is a no-op.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.website.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.careers.is_none()
            && self.housing.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch() {
        assert!(BootcampPatch::default().is_empty());
    }

    #[test]
    fn test_patch_with_field_is_not_empty() {
        let patch = BootcampPatch {
            name: Some("Devworks".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_new_bootcamp_defaults() {
        let new: NewBootcamp = serde_json::from_value(serde_json::json!({
            "name": "Devworks Bootcamp",
            "description": "Full stack web development"
        }))
        .unwrap();

        assert_eq!(new.name, "Devworks Bootcamp");
        assert!(new.careers.is_empty());
        assert!(!new.housing);
    }
}
