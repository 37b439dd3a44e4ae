use crate::domain;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod mem_todo_driven_ports;

/// Process-local storage backing the todo API. The service keeps the whole list in
/// memory behind an async lock, so the store is cheap to clone and share between
/// handlers. Items are kept in insertion order, which is the order the list
/// endpoint reports them in.
#[derive(Clone, Default)]
pub struct TodoStore {
    items: Arc<RwLock<Vec<domain::todo::TodoItem>>>,
}

impl TodoStore {
    /// Creates an empty todo store
    pub fn new() -> Self {
        TodoStore::default()
    }
}
