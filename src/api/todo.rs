use crate::dto::todo::{InsertedTodo, NewTodo, TodoItem, UpdateTodo};
use crate::persistence::mem_todo_driven_ports::{StoreTodoReader, StoreTodoWriter};
use crate::routing_utils::{
    GenericErrorResponse, Json, TodoErrorResponse, ValidationErrorResponse,
};
use crate::{AppState, SharedData, domain, dto};
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::ErrorResponse;
use axum::routing::{delete, get, patch, post};
use std::sync::Arc;
use tracing::{error, info};
use utoipa::OpenApi;
use uuid::Uuid;
use validator::Validate;

use domain::todo::driving_ports::TodoError;

#[derive(OpenApi)]
#[openapi(paths(
    list_todos,
    create_todo,
    fetch_todo,
    update_todo,
    delete_todo,
    delete_all_todos
))]
/// Defines the OpenAPI documentation for the todo API
pub struct TodosApi;
/// Constant used to group todo endpoints in OpenAPI documentation
pub const TODO_API_GROUP: &str = "Todos";

/// Adds the todo item routes at the root of the application router
pub fn todo_routes() -> Router<Arc<SharedData>> {
    Router::new()
        .route(
            "/",
            get(|State(app_state): AppState| async move {
                let todo_service = domain::todo::TodoService {};
                let todo_reader = StoreTodoReader::new(&app_state.todos);

                list_todos(&todo_service, &todo_reader).await
            }),
        )
        .route(
            "/",
            post(
                |State(app_state): AppState, Json(new_todo): Json<NewTodo>| async move {
                    let todo_service = domain::todo::TodoService {};
                    let todo_writer = StoreTodoWriter::new(&app_state.todos);

                    create_todo(new_todo, &todo_service, &todo_writer).await
                },
            ),
        )
        .route(
            "/",
            delete(|State(app_state): AppState| async move {
                let todo_service = domain::todo::TodoService {};
                let todo_writer = StoreTodoWriter::new(&app_state.todos);

                delete_all_todos(&todo_service, &todo_writer).await
            }),
        )
        .route(
            "/:todo_id",
            get(
                |State(app_state): AppState, Path(todo_id): Path<Uuid>| async move {
                    let todo_service = domain::todo::TodoService {};
                    let todo_reader = StoreTodoReader::new(&app_state.todos);

                    fetch_todo(todo_id, &todo_service, &todo_reader).await
                },
            ),
        )
        .route(
            "/:todo_id",
            patch(
                |State(app_state): AppState,
                 Path(todo_id): Path<Uuid>,
                 Json(update): Json<UpdateTodo>| async move {
                    let todo_service = domain::todo::TodoService {};
                    let todo_writer = StoreTodoWriter::new(&app_state.todos);

                    update_todo(todo_id, update, &todo_service, &todo_writer).await
                },
            ),
        )
        .route(
            "/:todo_id",
            delete(
                |State(app_state): AppState, Path(todo_id): Path<Uuid>| async move {
                    let todo_service = domain::todo::TodoService {};
                    let todo_writer = StoreTodoWriter::new(&app_state.todos);

                    delete_todo(todo_id, &todo_service, &todo_writer).await
                },
            ),
        )
}

#[utoipa::path(
    get,
    path = "/",
    tag = TODO_API_GROUP,
    responses(
        (status = 200, description = "Every todo item, in insertion order", body = Vec<TodoItem>),
        (status = 500, response = dto::err_resps::BasicError500),
    ),
)]
/// Lists every todo item in the system
async fn list_todos(
    todo_service: &impl domain::todo::driving_ports::TodoPort,
    todo_read: &impl domain::todo::driven_ports::TodoReader,
) -> Result<Json<Vec<TodoItem>>, ErrorResponse> {
    info!("Requested the todo list");
    let todos_result = todo_service.all_todos(todo_read).await;
    match todos_result {
        Ok(todos) => Ok(Json(todos.into_iter().map(TodoItem::from).collect())),
        Err(port_err) => {
            error!("Could not list todo items: {port_err}");
            Err(GenericErrorResponse(port_err).into())
        }
    }
}

#[utoipa::path(
    post,
    path = "/",
    tag = TODO_API_GROUP,
    request_body = NewTodo,
    responses(
        (status = 201, description = "Todo item created", body = InsertedTodo),
        (status = 400, response = dto::err_resps::BasicError400),
        (status = 500, response = dto::err_resps::BasicError500),
    ),
)]
/// Creates a new todo item
async fn create_todo(
    new_todo: NewTodo,
    todo_service: &impl domain::todo::driving_ports::TodoPort,
    todo_write: &impl domain::todo::driven_ports::TodoWriter,
) -> Result<(StatusCode, Json<InsertedTodo>), ErrorResponse> {
    info!("Attempt to create todo item: {new_todo}");
    new_todo
        .validate()
        .map_err(ValidationErrorResponse::from)?;

    let domain_new = domain::todo::NewTodo::from(new_todo);
    let create_result = todo_service.create_todo(&domain_new, todo_write).await;
    match create_result {
        Ok(created_id) => Ok((StatusCode::CREATED, Json(InsertedTodo { id: created_id }))),
        Err(port_err) => {
            error!("Todo create failure: {port_err}");
            Err(GenericErrorResponse(port_err).into())
        }
    }
}

#[utoipa::path(
    get,
    path = "/{todo_id}",
    tag = TODO_API_GROUP,
    params(
        ("todo_id" = Uuid, Path, description = "ID of the todo item to fetch"),
    ),
    responses(
        (status = 200, description = "The requested todo item", body = TodoItem),
        (status = 404, response = dto::err_resps::BasicError404),
        (status = 500, response = dto::err_resps::BasicError500),
    ),
)]
/// Retrieves a single todo item by its ID
async fn fetch_todo(
    todo_id: Uuid,
    todo_service: &impl domain::todo::driving_ports::TodoPort,
    todo_read: &impl domain::todo::driven_ports::TodoReader,
) -> Result<Json<TodoItem>, ErrorResponse> {
    info!("Fetching todo item {todo_id}");
    let fetch_result = todo_service.todo_by_id(todo_id, todo_read).await;
    if let Err(ref fetch_err) = fetch_result {
        // The missing-item case doesn't need an error log
        match fetch_err {
            TodoError::NotFound => {}
            _ => error!("Failed to fetch todo item {todo_id}: {fetch_err}"),
        }
    }

    let todo = fetch_result.map_err(TodoErrorResponse::from)?;
    Ok(Json(TodoItem::from(todo)))
}

#[utoipa::path(
    patch,
    path = "/{todo_id}",
    tag = TODO_API_GROUP,
    params(
        ("todo_id" = Uuid, Path, description = "ID of the todo item to update"),
    ),
    request_body = UpdateTodo,
    responses(
        (status = 200, description = "Todo item updated"),
        (status = 400, response = dto::err_resps::BasicError400),
        (status = 404, response = dto::err_resps::BasicError404),
        (status = 500, response = dto::err_resps::BasicError500),
    ),
)]
/// Partially updates a todo item, replacing only the fields present in the request
async fn update_todo(
    todo_id: Uuid,
    update: UpdateTodo,
    todo_service: &impl domain::todo::driving_ports::TodoPort,
    todo_write: &impl domain::todo::driven_ports::TodoWriter,
) -> Result<StatusCode, ErrorResponse> {
    info!("Updating todo item {todo_id}");
    update.validate().map_err(ValidationErrorResponse::from)?;

    let domain_update = domain::todo::UpdateTodo::from(update);
    let update_result = todo_service
        .update_todo(todo_id, &domain_update, todo_write)
        .await;
    if let Err(ref update_err) = update_result {
        match update_err {
            TodoError::NotFound => {}
            _ => error!("Failed to update todo item {todo_id}: {update_err}"),
        }
    }

    update_result.map_err(TodoErrorResponse::from)?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/{todo_id}",
    tag = TODO_API_GROUP,
    params(
        ("todo_id" = Uuid, Path, description = "ID of the todo item to delete"),
    ),
    responses(
        (status = 200, description = "Todo item deleted"),
        (status = 404, response = dto::err_resps::BasicError404),
        (status = 500, response = dto::err_resps::BasicError500),
    ),
)]
/// Deletes a single todo item by its ID
async fn delete_todo(
    todo_id: Uuid,
    todo_service: &impl domain::todo::driving_ports::TodoPort,
    todo_write: &impl domain::todo::driven_ports::TodoWriter,
) -> Result<StatusCode, ErrorResponse> {
    info!("Deleting todo item {todo_id}");
    let delete_result = todo_service.delete_todo(todo_id, todo_write).await;
    if let Err(ref delete_err) = delete_result {
        match delete_err {
            TodoError::NotFound => {}
            _ => error!("Failed to delete todo item {todo_id}: {delete_err}"),
        }
    }

    delete_result.map_err(TodoErrorResponse::from)?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/",
    tag = TODO_API_GROUP,
    responses(
        (status = 200, description = "Todo list cleared"),
        (status = 500, response = dto::err_resps::BasicError500),
    ),
)]
/// Removes every todo item in the system
async fn delete_all_todos(
    todo_service: &impl domain::todo::driving_ports::TodoPort,
    todo_write: &impl domain::todo::driven_ports::TodoWriter,
) -> Result<StatusCode, ErrorResponse> {
    info!("Clearing the todo list");
    let clear_result = todo_service.delete_all_todos(todo_write).await;
    match clear_result {
        Ok(()) => Ok(StatusCode::OK),
        Err(port_err) => {
            error!("Failed to clear the todo list: {port_err}");
            Err(GenericErrorResponse(port_err).into())
        }
    }
}
