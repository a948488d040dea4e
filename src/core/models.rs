//! Domain models for the portfolio backend
//!
//! Stored entities carry a server-assigned `id` (and `created_at` where the
//! entity has one). The matching `New*` structs are what callers hand to the
//! storage layer; they have no id or timestamp fields, so anything a client
//! sends under those keys is dropped during deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-collection identifier, assigned by the store starting at 1
pub type Id = u32;

// ============================================================================
// User Model
// ============================================================================

/// Site user. Passwords are stored as given and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// User data for creation (without id)
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// ============================================================================
// Portfolio Item Model
// ============================================================================

/// A gallery entry shown in the portfolio section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Free-form; filtering compares it byte for byte
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Portfolio item data for creation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolioItem {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl NewPortfolioItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
            category: category.into(),
            tags: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Build the stored record from server-assigned fields
    pub(crate) fn into_item(self, id: Id, created_at: DateTime<Utc>) -> PortfolioItem {
        PortfolioItem {
            id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            category: self.category,
            tags: self.tags.unwrap_or_default(),
            created_at,
        }
    }
}

// ============================================================================
// Contact Message Model
// ============================================================================

/// A submission from the public contact form. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: Id,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Contact message data for creation, produced by
/// [`validate_contact`](crate::core::validation::validate_contact)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub(crate) fn into_message(self, id: Id, created_at: DateTime<Utc>) -> ContactMessage {
        ContactMessage {
            id,
            name: self.name,
            email: self.email,
            message: self.message,
            created_at,
        }
    }
}
