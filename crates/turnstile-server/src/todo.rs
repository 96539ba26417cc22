//! In-memory todo storage.
//!
//! The protected route group needs a resource behind it; rows live in
//! process memory and vanish on restart. Persistence is deliberately out of
//! scope for this service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// A todo row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    /// Monotonically assigned identifier.
    pub id: u64,
    /// Task description.
    pub title: String,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

/// Process-local todo storage shared across request tasks.
#[derive(Default)]
pub struct TodoStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    rows: Vec<Todo>,
}

impl TodoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new row and return it.
    pub fn create(&self, title: impl Into<String>) -> Todo {
        let mut inner = self.inner.write().unwrap();
        inner.next_id += 1;
        let todo = Todo {
            id: inner.next_id,
            title: title.into(),
            created_at: Utc::now(),
        };
        inner.rows.push(todo.clone());
        todo
    }

    /// All rows, oldest first.
    pub fn list(&self) -> Vec<Todo> {
        self.inner.read().unwrap().rows.clone()
    }

    /// Remove a row by id; returns false when no such row exists.
    pub fn remove(&self, id: u64) -> bool {
        let mut inner = self.inner.write().unwrap();
        let before = inner.rows.len();
        inner.rows.retain(|todo| todo.id != id);
        inner.rows.len() != before
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().rows.len()
    }

    /// Whether the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
