//! In-process store used when no database URL is configured.
//!
//! Data lives for the life of the process. Each collection sits behind one
//! mutex, so the name check on insert and the push on append are atomic.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    OrderHistoryPersistenceError, OrderHistoryRepository, StoreCollections, StoreConnectionError,
    StoreConnector, UserPersistenceError, UserRepository,
};
use crate::domain::{Order, OrderHistory, User, UserName};

fn lock<'a, T, E>(
    mutex: &'a Mutex<T>,
    connection: impl FnOnce(String) -> E,
) -> Result<MutexGuard<'a, T>, E> {
    mutex
        .lock()
        .map_err(|_| connection("in-memory store lock poisoned".to_owned()))
}

/// Users keyed by name.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<BTreeMap<UserName, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_name(&self, name: &UserName) -> Result<Option<User>, UserPersistenceError> {
        let users = lock(&self.users, UserPersistenceError::connection)?;
        Ok(users.get(name).cloned())
    }

    async fn exists(&self, name: &UserName) -> Result<bool, UserPersistenceError> {
        let users = lock(&self.users, UserPersistenceError::connection)?;
        Ok(users.contains_key(name))
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = lock(&self.users, UserPersistenceError::connection)?;
        if users.contains_key(user.name()) {
            return Err(UserPersistenceError::conflict(user.name().as_ref()));
        }
        users.insert(user.name().clone(), user.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let users = lock(&self.users, UserPersistenceError::connection)?;
        Ok(users.values().cloned().collect())
    }
}

/// Order histories keyed by user name.
#[derive(Debug, Default)]
pub struct InMemoryOrderHistoryRepository {
    histories: Mutex<BTreeMap<UserName, Vec<Order>>>,
}

#[async_trait]
impl OrderHistoryRepository for InMemoryOrderHistoryRepository {
    async fn find_by_name(
        &self,
        name: &UserName,
    ) -> Result<Option<OrderHistory>, OrderHistoryPersistenceError> {
        let histories = lock(&self.histories, OrderHistoryPersistenceError::connection)?;
        Ok(histories
            .get(name)
            .map(|orders| OrderHistory::new(name.clone(), orders.clone())))
    }

    async fn append(
        &self,
        name: &UserName,
        order: &Order,
    ) -> Result<(), OrderHistoryPersistenceError> {
        let mut histories = lock(&self.histories, OrderHistoryPersistenceError::connection)?;
        histories
            .entry(name.clone())
            .or_default()
            .push(order.clone());
        Ok(())
    }
}

/// Connector that always succeeds with the same in-memory collections.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStoreConnector {
    users: Arc<InMemoryUserRepository>,
    orders: Arc<InMemoryOrderHistoryRepository>,
}

impl InMemoryStoreConnector {
    /// A connector over empty collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// The collections handed out by [`StoreConnector::connect`].
    pub fn collections(&self) -> StoreCollections {
        StoreCollections::new(self.users.clone(), self.orders.clone())
    }
}

#[async_trait]
impl StoreConnector for InMemoryStoreConnector {
    async fn connect(&self) -> Result<StoreCollections, StoreConnectionError> {
        Ok(self.collections())
    }
}
