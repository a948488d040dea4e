//! Storage layer for the portfolio backend
//!
//! [`Storage`] is the full set of data operations the API needs. The only
//! production backend is [`MemoryStorage`], which keeps everything in process
//! memory and loses it on restart. A persistent backend can implement the same
//! trait without the handlers noticing.

#[cfg(test)]
pub(crate) mod failing;
pub mod memory;
mod seed;

pub use memory::MemoryStorage;

use async_trait::async_trait;

use crate::core::models::{
    ContactMessage, Id, NewContactMessage, NewPortfolioItem, NewUser, PortfolioItem, User,
};

/// Storage error types
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Identifier space exhausted for {collection}")]
    IdSpaceExhausted { collection: &'static str },

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Data operations backing the HTTP API
///
/// Ids are assigned per collection, start at 1 and are never reused.
/// `created_at` is always set by the backend; callers cannot supply it.
/// List operations return records in insertion order.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Look up a user by id
    async fn get_user(&self, id: Id) -> Result<Option<User>, StorageError>;

    /// Return the first user (in insertion order) with this exact username
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;

    /// Store a new user.
    ///
    /// Usernames are not checked for uniqueness here.
    async fn create_user(&self, user: NewUser) -> Result<User, StorageError>;

    /// All portfolio items in insertion order
    async fn get_portfolio_items(&self) -> Result<Vec<PortfolioItem>, StorageError>;

    /// Portfolio items whose category equals `category` exactly.
    ///
    /// An unknown category yields an empty list, not an error.
    async fn get_portfolio_items_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<PortfolioItem>, StorageError> {
        Ok(self
            .get_portfolio_items()
            .await?
            .into_iter()
            .filter(|item| item.category == category)
            .collect())
    }

    /// Store a new portfolio item; missing tags become an empty list
    async fn create_portfolio_item(
        &self,
        item: NewPortfolioItem,
    ) -> Result<PortfolioItem, StorageError>;

    /// Append a contact form submission
    async fn create_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, StorageError>;

    /// All contact messages in submission order
    async fn get_contact_messages(&self) -> Result<Vec<ContactMessage>, StorageError>;
}
