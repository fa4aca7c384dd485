//! DTOs for bootcamp endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Bootcamp, BootcampPatch, NewBootcamp};

/// Request body for creating a bootcamp.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBootcampRequest {
    #[validate(length(min = 1, max = 50, message = "Please add a name"))]
    pub name: String,

    #[validate(length(min = 1, max = 500, message = "Please add a description"))]
    pub description: String,

    #[validate(url(message = "Please use a valid URL with HTTP or HTTPS"))]
    pub website: Option<String>,

    #[validate(length(max = 20, message = "Phone number can not be longer than 20 characters"))]
    pub phone: Option<String>,

    #[validate(email(message = "Please add a valid email"))]
    pub email: Option<String>,

    #[serde(default)]
    pub careers: Vec<String>,

    #[serde(default)]
    pub housing: bool,
}

impl From<CreateBootcampRequest> for NewBootcamp {
    fn from(req: CreateBootcampRequest) -> Self {
        NewBootcamp {
            name: req.name,
            description: req.description,
            website: req.website,
            phone: req.phone,
            email: req.email,
            careers: req.careers,
            housing: req.housing,
        }
    }
}

/// Request body for updating a bootcamp.
///
/// All fields are optional; only provided fields overwrite stored values.
/// The same field constraints as creation re-run on every update.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBootcampRequest {
    #[validate(length(min = 1, max = 50, message = "Please add a name"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 500, message = "Please add a description"))]
    pub description: Option<String>,

    #[validate(url(message = "Please use a valid URL with HTTP or HTTPS"))]
    pub website: Option<String>,

    #[validate(length(max = 20, message = "Phone number can not be longer than 20 characters"))]
    pub phone: Option<String>,

    #[validate(email(message = "Please add a valid email"))]
    pub email: Option<String>,

    pub careers: Option<Vec<String>>,

    pub housing: Option<bool>,
}

impl From<UpdateBootcampRequest> for BootcampPatch {
    fn from(req: UpdateBootcampRequest) -> Self {
        BootcampPatch {
            name: req.name,
            description: req.description,
            website: req.website,
            phone: req.phone,
            email: req.email,
            careers: req.careers,
            housing: req.housing,
        }
    }
}

/// JSON representation of a bootcamp in responses.
#[derive(Debug, Serialize)]
pub struct BootcampResponse {
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

impl From<Bootcamp> for BootcampResponse {
    fn from(bootcamp: Bootcamp) -> Self {
        Self {
            id: bootcamp.id,
            name: bootcamp.name,
            description: bootcamp.description,
            website: bootcamp.website,
            phone: bootcamp.phone,
            email: bootcamp.email,
            careers: bootcamp.careers,
            housing: bootcamp.housing,
            created_at: bootcamp.created_at,
        }
    }
}
