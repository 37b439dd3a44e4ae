use utoipa::OpenApi;

pub mod todo;

/// Registers the API's DTO schemas and shared error responses with the OpenAPI documentation
#[derive(OpenApi)]
#[openapi(components(
    schemas(
        todo::TodoItem,
        todo::NewTodo,
        todo::UpdateTodo,
        todo::InsertedTodo,
        crate::routing_utils::ExtraInfo,
        crate::routing_utils::ValidationErrorSchema
    ),
    responses(
        crate::routing_utils::BasicErrorResponse,
        err_resps::BasicError400,
        err_resps::BasicError404,
        err_resps::BasicError500
    )
))]
pub struct OpenApiSchemas;

/// Canned error responses referenced from `#[utoipa::path]` annotations
pub mod err_resps {
    use utoipa::ToResponse;

    #[derive(ToResponse)]
    #[response(
        description = "Invalid request body was passed (400)",
        example = json!({
            "error_code": "invalid_input",
            "error_description": "Submitted data was invalid.",
            "extra_info": {
                "title": [
                    {
                        "code": "length",
                        "message": null,
                        "params": {
                            "value": "",
                            "min": 1
                        }
                    }
                ]
            }
        })
    )]
    pub struct BasicError400;

    #[derive(ToResponse)]
    #[response(
        description = "Entity could not be found (404)",
        example = json!({
            "error_code": "not_found",
            "error_description": "The requested entity could not be found.",
            "extra_info": null
        })
    )]
    pub struct BasicError404;

    #[derive(ToResponse)]
    #[response(
        description = "Something unexpected went wrong inside the server (500)",
        example = json!({
            "error_code": "internal_error",
            "error_description": "Could not access data to complete your request",
            "extra_info": null
        })
    )]
    pub struct BasicError500;
}
