use super::*;
use axum::body::to_bytes;
use serde_json::Value;

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_invalid_id_response() {
    let response = ApiError::InvalidId("Invalid user id").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Invalid user id");
}

#[tokio::test]
async fn test_invalid_body_response_carries_detail() {
    let response = ApiError::InvalidBody("name is required").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid request body");
    assert_eq!(body["error"]["detail"], "name is required");
}

#[tokio::test]
async fn test_email_exists_response() {
    let response = ApiError::EmailExists.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Email already exists");
}

#[tokio::test]
async fn test_not_found_response_names_resource() {
    let response = ApiError::NotFound("Room").into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Room not found");
}

#[tokio::test]
async fn test_internal_response_hides_cause() {
    let error = ApiError::internal(
        anyhow::anyhow!("connection refused to db host 10.0.0.3"),
        "Unable to fetch users",
    );

    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(body["error"]["detail"], "Unable to fetch users");
    // The underlying cause must not leak into the response
    assert!(!body.to_string().contains("10.0.0.3"));
}
