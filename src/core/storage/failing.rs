//! Storage double whose every operation fails

use async_trait::async_trait;

use super::{Storage, StorageError};
use crate::core::models::{
    ContactMessage, Id, NewContactMessage, NewPortfolioItem, NewUser, PortfolioItem, User,
};

pub(crate) const FAILURE_DETAIL: &str = "backend unavailable: connection reset by peer";

pub(crate) struct FailingStorage;

fn fail<T>() -> Result<T, StorageError> {
    Err(StorageError::Backend(FAILURE_DETAIL.to_string()))
}

#[async_trait]
impl Storage for FailingStorage {
    async fn get_user(&self, _id: Id) -> Result<Option<User>, StorageError> {
        fail()
    }

    async fn get_user_by_username(&self, _username: &str) -> Result<Option<User>, StorageError> {
        fail()
    }

    async fn create_user(&self, _user: NewUser) -> Result<User, StorageError> {
        fail()
    }

    async fn get_portfolio_items(&self) -> Result<Vec<PortfolioItem>, StorageError> {
        fail()
    }

    async fn create_portfolio_item(
        &self,
        _item: NewPortfolioItem,
    ) -> Result<PortfolioItem, StorageError> {
        fail()
    }

    async fn create_contact_message(
        &self,
        _message: NewContactMessage,
    ) -> Result<ContactMessage, StorageError> {
        fail()
    }

    async fn get_contact_messages(&self) -> Result<Vec<ContactMessage>, StorageError> {
        fail()
    }
}
