//! In-memory storage backend
//!
//! Each collection is a `BTreeMap` keyed by a monotonically increasing id, so
//! iteration order is insertion order. All three collections sit behind a
//! single `RwLock`; every operation takes the lock once and never awaits while
//! holding it.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{Storage, StorageError, seed};
use crate::core::models::{
    ContactMessage, Id, NewContactMessage, NewPortfolioItem, NewUser, PortfolioItem, User,
};

// ============================================================================
// Table
// ============================================================================

/// One collection with its own id counter
#[derive(Debug)]
struct Table<T> {
    collection: &'static str,
    rows: BTreeMap<Id, T>,
    /// `None` once every `Id` has been handed out
    next_id: Option<Id>,
}

impl<T: Clone> Table<T> {
    fn new(collection: &'static str) -> Self {
        Self {
            collection,
            rows: BTreeMap::new(),
            next_id: Some(1),
        }
    }

    fn get(&self, id: Id) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    /// Assign the next id, build the record from it and store it
    fn insert_with(&mut self, build: impl FnOnce(Id) -> T) -> Result<T, StorageError> {
        let id = self.next_id.ok_or(StorageError::IdSpaceExhausted {
            collection: self.collection,
        })?;
        self.next_id = id.checked_add(1);

        let record = build(id);
        self.rows.insert(id, record.clone());
        Ok(record)
    }
}

#[derive(Debug)]
struct Collections {
    users: Table<User>,
    portfolio_items: Table<PortfolioItem>,
    contact_messages: Table<ContactMessage>,
}

// ============================================================================
// MemoryStorage
// ============================================================================

/// Process-local store. State lives as long as the value does.
#[derive(Debug)]
pub struct MemoryStorage {
    inner: RwLock<Collections>,
}

impl MemoryStorage {
    /// Create a store pre-populated with the site's portfolio entries.
    ///
    /// Seed items share one `created_at`: the moment the store was built.
    pub fn new() -> Self {
        let seeded_at = Utc::now();
        let mut portfolio_items = Table::new("portfolio items");

        for (id, item) in (1..).zip(seed::portfolio_items()) {
            portfolio_items.rows.insert(id, item.into_item(id, seeded_at));
            portfolio_items.next_id = Some(id + 1);
        }

        Self::with_portfolio(portfolio_items)
    }

    /// Create a store with all three collections empty
    pub fn empty() -> Self {
        Self::with_portfolio(Table::new("portfolio items"))
    }

    fn with_portfolio(portfolio_items: Table<PortfolioItem>) -> Self {
        Self {
            inner: RwLock::new(Collections {
                users: Table::new("users"),
                portfolio_items,
                contact_messages: Table::new("contact messages"),
            }),
        }
    }

    /// Number of stored portfolio items
    pub async fn portfolio_item_count(&self) -> usize {
        self.inner.read().await.portfolio_items.rows.len()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_user(&self, id: Id) -> Result<Option<User>, StorageError> {
        Ok(self.inner.read().await.users.get(id))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .rows
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let mut inner = self.inner.write().await;

        let created = inner.users.insert_with(|id| User {
            id,
            username: user.username,
            password: user.password,
        })?;

        tracing::debug!(user_id = created.id, "User created");

        Ok(created)
    }

    async fn get_portfolio_items(&self) -> Result<Vec<PortfolioItem>, StorageError> {
        Ok(self.inner.read().await.portfolio_items.all())
    }

    async fn create_portfolio_item(
        &self,
        item: NewPortfolioItem,
    ) -> Result<PortfolioItem, StorageError> {
        let mut inner = self.inner.write().await;
        let created_at = Utc::now();

        let created = inner
            .portfolio_items
            .insert_with(|id| item.into_item(id, created_at))?;

        tracing::debug!(item_id = created.id, category = %created.category, "Portfolio item created");

        Ok(created)
    }

    async fn create_contact_message(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, StorageError> {
        let mut inner = self.inner.write().await;
        let created_at = Utc::now();

        inner
            .contact_messages
            .insert_with(|id| message.into_message(id, created_at))
    }

    async fn get_contact_messages(&self) -> Result<Vec<ContactMessage>, StorageError> {
        Ok(self.inner.read().await.contact_messages.all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(n: usize) -> NewContactMessage {
        NewContactMessage::new(
            format!("Sender {}", n),
            format!("sender{}@example.com", n),
            format!("Message body {}", n),
        )
    }

    // ========================================================================
    // Seed Data
    // ========================================================================

    #[tokio::test]
    async fn test_new_seeds_four_portfolio_items() {
        let storage = MemoryStorage::new();

        let items = storage.get_portfolio_items().await.unwrap();

        assert_eq!(items.len(), 4);
        assert_eq!(
            items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(
            items.iter().map(|i| i.category.as_str()).collect::<Vec<_>>(),
            vec!["photography", "photography", "video", "design"]
        );
        assert_eq!(items[0].title, "Creative Photography");
        assert_eq!(items[3].tags, vec!["Design", "Branding"]);
    }

    #[tokio::test]
    async fn test_seed_items_share_construction_timestamp() {
        let before = Utc::now();
        let storage = MemoryStorage::new();
        let after = Utc::now();

        let items = storage.get_portfolio_items().await.unwrap();

        assert!(items.iter().all(|i| i.created_at == items[0].created_at));
        assert!(items[0].created_at >= before && items[0].created_at <= after);
    }

    #[tokio::test]
    async fn test_empty_has_no_items() {
        let storage = MemoryStorage::empty();

        assert!(storage.get_portfolio_items().await.unwrap().is_empty());
        assert!(storage.get_contact_messages().await.unwrap().is_empty());
        assert_eq!(storage.portfolio_item_count().await, 0);
    }

    // ========================================================================
    // Users
    // ========================================================================

    #[tokio::test]
    async fn test_create_and_get_user() {
        let storage = MemoryStorage::new();

        let user = storage
            .create_user(NewUser::new("bhim", "secret"))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(storage.get_user(1).await.unwrap(), Some(user));
        assert_eq!(storage.get_user(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_user_by_username() {
        let storage = MemoryStorage::new();
        storage.create_user(NewUser::new("alice", "a")).await.unwrap();
        let bob = storage.create_user(NewUser::new("bob", "b")).await.unwrap();

        let found = storage.get_user_by_username("bob").await.unwrap();

        assert_eq!(found.map(|u| u.id), Some(bob.id));
        assert!(storage.get_user_by_username("Bob").await.unwrap().is_none());
        assert!(storage.get_user_by_username("carol").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_usernames_are_accepted_and_first_wins() {
        let storage = MemoryStorage::new();

        let first = storage.create_user(NewUser::new("dup", "1")).await.unwrap();
        let second = storage.create_user(NewUser::new("dup", "2")).await.unwrap();

        assert_ne!(first.id, second.id);
        let found = storage.get_user_by_username("dup").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    // ========================================================================
    // Portfolio Items
    // ========================================================================

    #[tokio::test]
    async fn test_create_portfolio_item_continues_after_seed() {
        let storage = MemoryStorage::new();

        let item = storage
            .create_portfolio_item(NewPortfolioItem::new("New", "Desc", "url", "design"))
            .await
            .unwrap();

        assert_eq!(item.id, 5);
        assert!(item.tags.is_empty());
        assert_eq!(storage.portfolio_item_count().await, 5);

        let all = storage.get_portfolio_items().await.unwrap();
        assert_eq!(all.last(), Some(&item));
    }

    #[tokio::test]
    async fn test_create_portfolio_item_sets_created_at() {
        let storage = MemoryStorage::empty();
        let before = Utc::now();

        let item = storage
            .create_portfolio_item(
                NewPortfolioItem::new("T", "D", "U", "video").with_tags(["b", "a"]),
            )
            .await
            .unwrap();

        assert!(item.created_at >= before);
        assert_eq!(item.tags, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_filter_by_category_is_exact() {
        let storage = MemoryStorage::new();
        storage
            .create_portfolio_item(NewPortfolioItem::new("T", "D", "U", "Photography"))
            .await
            .unwrap();
        storage
            .create_portfolio_item(NewPortfolioItem::new("T", "D", "U", " photography"))
            .await
            .unwrap();

        let items = storage
            .get_portfolio_items_by_category("photography")
            .await
            .unwrap();

        assert_eq!(items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    // ========================================================================
    // Contact Messages
    // ========================================================================

    #[tokio::test]
    async fn test_contact_messages_append_in_order() {
        let storage = MemoryStorage::new();

        let first = storage.create_contact_message(contact(1)).await.unwrap();
        let second = storage.create_contact_message(contact(2)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.created_at >= first.created_at);

        let messages = storage.get_contact_messages().await.unwrap();
        assert_eq!(messages, vec![first, second]);
    }

    #[tokio::test]
    async fn test_collections_have_independent_counters() {
        let storage = MemoryStorage::new();

        let user = storage.create_user(NewUser::new("u", "p")).await.unwrap();
        let message = storage.create_contact_message(contact(1)).await.unwrap();
        let item = storage
            .create_portfolio_item(NewPortfolioItem::new("T", "D", "U", "c"))
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(message.id, 1);
        assert_eq!(item.id, 5);
    }

    // ========================================================================
    // Id Exhaustion
    // ========================================================================

    #[test]
    fn test_table_issues_last_id_then_reports_exhaustion() {
        let mut table: Table<Id> = Table::new("numbers");
        table.next_id = Some(Id::MAX);

        assert_eq!(table.insert_with(|id| id).unwrap(), Id::MAX);

        let err = table.insert_with(|id| id).unwrap_err();
        assert!(matches!(
            err,
            StorageError::IdSpaceExhausted {
                collection: "numbers"
            }
        ));
        assert_eq!(table.rows.len(), 1);
    }
}
