use axum::body;
use serde::de::DeserializeOwned;

/// Drains a handler's response body and parses the JSON inside it into [T], e.g. a todo
/// DTO or a raw [serde_json::Value] for error envelope assertions. Panics with the
/// offending payload if the body can't be read or doesn't parse, failing the test.
pub async fn deserialize_body<T: DeserializeOwned>(response_body: body::Body) -> T {
    let body_bytes = body::to_bytes(response_body, usize::MAX)
        .await
        .expect("Could not drain the response body!");

    serde_json::from_slice(&body_bytes).unwrap_or_else(|parse_err| {
        panic!(
            "Response body wasn't the expected JSON shape! Error: {}, Received body: {:?}",
            parse_err, body_bytes
        )
    })
}
