//! In-memory user store.

use std::sync::{PoisonError, RwLock};

use tracing::{debug, instrument};

use super::models::{CreateUserRequest, User};

#[derive(Debug)]
struct Inner {
    users: Vec<User>,
    next_id: u64,
}

/// The authoritative in-memory collection of users.
///
/// The collection lives behind a single `RwLock`; mutations (`save`,
/// `delete_by_id`) serialize against each other and against reads. The raw
/// collection is never handed out, only cloned snapshots. Absence of an id
/// is a normal return value, never an error.
#[derive(Debug)]
pub struct UserStore {
    inner: RwLock<Inner>,
}

impl UserStore {
    /// Create an empty store. Ids are assigned sequentially starting at "1".
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Return a snapshot of all stored users in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.read().users.clone()
    }

    /// Look up a user by exact id.
    pub fn get(&self, id: &str) -> Option<User> {
        self.read().users.iter().find(|u| u.id == id).cloned()
    }

    /// Insert a new user, assigning the next sequential id.
    ///
    /// Returns the stored user including its resolved identifier. Input
    /// validation happens upstream; the store accepts what it is given.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub fn save(&self, request: CreateUserRequest) -> User {
        let mut inner = self.write();
        let id = inner.next_id.to_string();
        inner.next_id += 1;

        let user = User {
            id,
            name: request.name,
            birth_date: request.birth_date,
        };
        debug!(user_id = %user.id, "Inserted user");
        inner.users.push(user.clone());
        user
    }

    /// Remove the user with the given id. Returns true if something was
    /// removed, false otherwise; never an error.
    #[instrument(skip(self))]
    pub fn delete_by_id(&self, id: &str) -> bool {
        let mut inner = self.write();
        match inner.users.iter().position(|u| u.id == id) {
            Some(index) => {
                inner.users.remove(index);
                debug!(user_id = %id, "Removed user");
                true
            }
            None => false,
        }
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.read().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().users.is_empty()
    }

    // Mutations keep the invariants intact before releasing the lock, so a
    // poisoned lock still guards a consistent collection.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
