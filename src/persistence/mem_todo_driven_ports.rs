use super::TodoStore;
use crate::domain;
use crate::domain::todo::{NewTodo, TodoItem, UpdateTodo};
use uuid::Uuid;

/// Driven adapter which reads todo items out of the shared in-memory store
pub struct StoreTodoReader {
    store: TodoStore,
}

impl StoreTodoReader {
    pub fn new(store: &TodoStore) -> StoreTodoReader {
        StoreTodoReader {
            store: store.clone(),
        }
    }
}

impl domain::todo::driven_ports::TodoReader for StoreTodoReader {
    async fn all_todos(&self) -> Result<Vec<TodoItem>, anyhow::Error> {
        let items = self.store.items.read().await;

        Ok(items.clone())
    }

    async fn todo_by_id(&self, todo_id: Uuid) -> Result<Option<TodoItem>, anyhow::Error> {
        let items = self.store.items.read().await;
        let todo = items.iter().find(|todo| todo.id == todo_id).map(Clone::clone);

        Ok(todo)
    }
}

/// Driven adapter which writes todo items into the shared in-memory store
pub struct StoreTodoWriter {
    store: TodoStore,
}

impl StoreTodoWriter {
    pub fn new(store: &TodoStore) -> StoreTodoWriter {
        StoreTodoWriter {
            store: store.clone(),
        }
    }
}

impl domain::todo::driven_ports::TodoWriter for StoreTodoWriter {
    async fn create_todo(&self, new_todo: &NewTodo) -> Result<Uuid, anyhow::Error> {
        let mut items = self.store.items.write().await;

        let todo = TodoItem::from_new(new_todo);
        let todo_id = todo.id;
        items.push(todo);

        Ok(todo_id)
    }

    async fn update_todo(&self, todo_id: Uuid, update: &UpdateTodo) -> Result<bool, anyhow::Error> {
        let mut items = self.store.items.write().await;

        let Some(todo) = items.iter_mut().find(|todo| todo.id == todo_id) else {
            return Ok(false);
        };
        if let Some(ref new_title) = update.title {
            todo.title = new_title.clone();
        }
        if let Some(new_completed) = update.completed {
            todo.completed = new_completed;
        }

        Ok(true)
    }

    async fn delete_todo(&self, todo_id: Uuid) -> Result<bool, anyhow::Error> {
        let mut items = self.store.items.write().await;

        let item_index = items.iter().position(|todo| todo.id == todo_id);
        match item_index {
            Some(idx) => {
                items.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_all(&self) -> Result<(), anyhow::Error> {
        let mut items = self.store.items.write().await;
        items.clear();

        Ok(())
    }
}
