use crate::domain;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// DTO for a returned todo item on the API
#[derive(Serialize, ToSchema)]
#[cfg_attr(test, derive(Deserialize, PartialEq, Eq, Debug))]
pub struct TodoItem {
    #[schema(example = "da43ca00-e321-4454-aada-280c642ffd6d")]
    pub id: Uuid,
    #[schema(example = "Water the plants")]
    pub title: String,
    #[schema(example = false)]
    pub completed: bool,
}

impl From<domain::todo::TodoItem> for TodoItem {
    fn from(value: domain::todo::TodoItem) -> Self {
        TodoItem {
            id: value.id,
            title: value.title,
            completed: value.completed,
        }
    }
}

/// DTO for creating a new todo item via the API
#[derive(Deserialize, Display, Validate, ToSchema)]
#[display("{title}")]
#[cfg_attr(test, derive(Serialize))]
pub struct NewTodo {
    #[validate(length(min = 1, max = 500))]
    #[schema(example = "Water the plants")]
    pub title: String,
}

impl From<NewTodo> for domain::todo::NewTodo {
    fn from(value: NewTodo) -> Self {
        domain::todo::NewTodo { title: value.title }
    }
}

/// DTO containing the ID of a todo item that was created via the API.
#[derive(Serialize, ToSchema)]
#[cfg_attr(test, derive(Deserialize, Debug))]
pub struct InsertedTodo {
    #[schema(example = "da43ca00-e321-4454-aada-280c642ffd6d")]
    pub id: Uuid,
}

/// DTO for partially updating a todo item via the API. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[cfg_attr(test, derive(Serialize))]
pub struct UpdateTodo {
    #[validate(length(min = 1, max = 500))]
    #[schema(example = "Water the plants")]
    pub title: Option<String>,
    #[schema(example = true)]
    pub completed: Option<bool>,
}

impl From<UpdateTodo> for domain::todo::UpdateTodo {
    fn from(value: UpdateTodo) -> Self {
        domain::todo::UpdateTodo {
            title: value.title,
            completed: value.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod new_todo {
        use super::*;

        #[test]
        fn empty_title_gets_rejected() {
            let bad_todo = NewTodo {
                title: String::new(),
            };
            let validation_result = bad_todo.validate();
            assert!(validation_result.is_err());
            let validation_errors = validation_result.unwrap_err();
            let field_validations = validation_errors.field_errors();
            assert!(field_validations.contains_key("title"));
        }

        #[test]
        fn oversized_title_gets_rejected() {
            let bad_todo = NewTodo {
                title: (0..510).map(|_| "A").collect(),
            };
            assert!(bad_todo.validate().is_err());
        }
    }

    mod update_todo {
        use super::*;

        #[test]
        fn empty_patch_is_valid() {
            let no_op = UpdateTodo {
                title: None,
                completed: None,
            };
            assert!(no_op.validate().is_ok());
        }

        #[test]
        fn empty_title_gets_rejected() {
            let bad_update = UpdateTodo {
                title: Some(String::new()),
                completed: Some(true),
            };
            let validation_result = bad_update.validate();
            assert!(validation_result.is_err());
            let validation_errors = validation_result.unwrap_err();
            let field_validations = validation_errors.field_errors();
            assert!(field_validations.contains_key("title"));
        }

        #[test]
        fn oversized_title_gets_rejected() {
            let bad_update = UpdateTodo {
                title: Some((0..510).map(|_| "A").collect()),
                completed: None,
            };
            assert!(bad_update.validate().is_err());
        }
    }
}
