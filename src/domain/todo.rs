use crate::domain::todo::driven_ports::{TodoReader, TodoWriter};
use crate::domain::todo::driving_ports::TodoError;
use anyhow::Context;
use uuid::Uuid;

/// A single entry on the todo list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
}

#[cfg_attr(test, derive(Clone, Debug))]
pub struct NewTodo {
    pub title: String,
}

#[cfg_attr(test, derive(Clone, Debug))]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

impl TodoItem {
    /// Mints a fresh todo item from creation data. New items always start incomplete
    /// and receive a random v4 UUID.
    pub fn from_new(new_todo: &NewTodo) -> Self {
        TodoItem {
            id: Uuid::new_v4(),
            title: new_todo.title.clone(),
            completed: false,
        }
    }
}

pub mod driven_ports {
    use super::*;

    pub trait TodoReader {
        async fn all_todos(&self) -> Result<Vec<TodoItem>, anyhow::Error>;
        async fn todo_by_id(&self, todo_id: Uuid) -> Result<Option<TodoItem>, anyhow::Error>;
    }

    pub trait TodoWriter {
        async fn create_todo(&self, new_todo: &NewTodo) -> Result<Uuid, anyhow::Error>;

        /// Returns true if an item with the given ID existed and was updated
        async fn update_todo(
            &self,
            todo_id: Uuid,
            update: &UpdateTodo,
        ) -> Result<bool, anyhow::Error>;

        /// Returns true if an item with the given ID existed and was removed
        async fn delete_todo(&self, todo_id: Uuid) -> Result<bool, anyhow::Error>;

        async fn delete_all(&self) -> Result<(), anyhow::Error>;
    }
}

pub mod driving_ports {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum TodoError {
        #[error("The requested todo item did not exist.")]
        NotFound,
        #[error(transparent)]
        PortError(#[from] anyhow::Error),
    }


    pub trait TodoPort {
        async fn all_todos(
            &self,
            todo_read: &impl driven_ports::TodoReader,
        ) -> Result<Vec<TodoItem>, anyhow::Error>;
        async fn todo_by_id(
            &self,
            todo_id: Uuid,
            todo_read: &impl driven_ports::TodoReader,
        ) -> Result<TodoItem, TodoError>;
        async fn create_todo(
            &self,
            new_todo: &NewTodo,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> Result<Uuid, anyhow::Error>;
        async fn update_todo(
            &self,
            todo_id: Uuid,
            update: &UpdateTodo,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> Result<(), TodoError>;
        async fn delete_todo(
            &self,
            todo_id: Uuid,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> Result<(), TodoError>;
        async fn delete_all_todos(
            &self,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> Result<(), anyhow::Error>;
    }
}

pub struct TodoService {}

impl driving_ports::TodoPort for TodoService {
    async fn all_todos(
        &self,
        todo_read: &impl TodoReader,
    ) -> Result<Vec<TodoItem>, anyhow::Error> {
        let todos = todo_read
            .all_todos()
            .await
            .context("listing the todo items")?;

        Ok(todos)
    }

    async fn todo_by_id(
        &self,
        todo_id: Uuid,
        todo_read: &impl TodoReader,
    ) -> Result<TodoItem, TodoError> {
        let maybe_todo = todo_read
            .todo_by_id(todo_id)
            .await
            .context("fetching a todo item by ID")?;

        maybe_todo.ok_or(TodoError::NotFound)
    }

    async fn create_todo(
        &self,
        new_todo: &NewTodo,
        todo_write: &impl TodoWriter,
    ) -> Result<Uuid, anyhow::Error> {
        let created_id = todo_write
            .create_todo(new_todo)
            .await
            .context("creating a todo item")?;

        Ok(created_id)
    }

    async fn update_todo(
        &self,
        todo_id: Uuid,
        update: &UpdateTodo,
        todo_write: &impl TodoWriter,
    ) -> Result<(), TodoError> {
        let item_existed = todo_write
            .update_todo(todo_id, update)
            .await
            .context("updating a todo item")?;

        if item_existed {
            Ok(())
        } else {
            Err(TodoError::NotFound)
        }
    }

    async fn delete_todo(
        &self,
        todo_id: Uuid,
        todo_write: &impl TodoWriter,
    ) -> Result<(), TodoError> {
        let item_existed = todo_write
            .delete_todo(todo_id)
            .await
            .context("deleting a todo item")?;

        if item_existed {
            Ok(())
        } else {
            Err(TodoError::NotFound)
        }
    }

    async fn delete_all_todos(
        &self,
        todo_write: &impl TodoWriter,
    ) -> Result<(), anyhow::Error> {
        todo_write
            .delete_all()
            .await
            .context("clearing the todo list")?;

        Ok(())
    }
}
