//! In-process `GraphStore` used by the router and resolver tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::db::models::roster::{NamedNode, NodeLabel};
use crate::db::models::user::{NewUser, UpdateUser, User};
use crate::db::store::{GraphStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    labeled: Mutex<Vec<(NodeLabel, NamedNode)>>,
    users: Mutex<BTreeMap<i64, User>>,
    next_id: AtomicI64,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_named(self, label: NodeLabel, names: &[&str]) -> Self {
        {
            let mut labeled = self.labeled.lock().unwrap();
            labeled.extend(names.iter().map(|name| {
                (
                    label,
                    NamedNode {
                        name: name.to_string(),
                    },
                )
            }));
        }
        self
    }

    /// Number of store operations issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent operation fail like a dropped connection.
    pub fn fail_queries(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn enter(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Connection("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl GraphStore for MemoryStore {
    async fn list_by_label(&self, label: NodeLabel) -> Result<Vec<NamedNode>, StoreError> {
        self.enter()?;
        Ok(self
            .labeled
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == label)
            .map(|(_, node)| node.clone())
            .collect())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        self.enter()?;
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>, StoreError> {
        self.enter()?;
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        self.enter()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = User {
            id,
            name: user.name,
            email: user.email,
        };
        self.users.lock().unwrap().insert(id, created.clone());
        Ok(created)
    }

    async fn update_user(&self, id: i64, changes: UpdateUser) -> Result<Option<User>, StoreError> {
        self.enter()?;
        let mut users = self.users.lock().unwrap();
        Ok(users.get_mut(&id).map(|user| {
            if let Some(name) = changes.name {
                user.name = Some(name);
            }
            if let Some(email) = changes.email {
                user.email = Some(email);
            }
            user.clone()
        }))
    }

    async fn delete_user(&self, id: i64) -> Result<(), StoreError> {
        self.enter()?;
        self.users.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.enter()
    }
}
