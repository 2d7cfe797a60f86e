// Test Assertion Helpers
//
// Common assertions over ENSEK API responses.

use ensek_verify::ApiResponse;
use reqwest::StatusCode;
use serde_json::Value;

/// Assert the response is 200 OK
///
/// # Panics
/// If the status code is not 200, panics with the response body
pub fn assert_ok(response: &ApiResponse) {
    assert_eq!(
        response.status,
        StatusCode::OK,
        "Expected 200 OK, got {} (body: {})",
        response.status,
        response.body
    );
}

/// Assert the response is 400 Bad Request
///
/// # Panics
/// If the status code is not 400
pub fn assert_bad_request(response: &ApiResponse) {
    assert_eq!(
        response.status,
        StatusCode::BAD_REQUEST,
        "Expected 400 Bad Request, got {} (body: {})",
        response.status,
        response.body
    );
}

/// Assert the response is 404 Not Found
///
/// # Panics
/// If the status code is not 404
pub fn assert_not_found(response: &ApiResponse) {
    assert_eq!(
        response.status,
        StatusCode::NOT_FOUND,
        "Expected 404 Not Found, got {} (body: {})",
        response.status,
        response.body
    );
}

/// Assert the response is 500 Internal Server Error
///
/// # Panics
/// If the status code is not 500
pub fn assert_server_error(response: &ApiResponse) {
    assert_eq!(
        response.status,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Expected 500 Internal Server Error, got {} (body: {})",
        response.status,
        response.body
    );
}

/// Assert the response body carries exactly this `message`
///
/// # Panics
/// If the message field is absent or differs
pub fn assert_message(response: &ApiResponse, expected: &str) {
    assert_eq!(
        response.message(),
        Some(expected),
        "Unexpected message in body: {}",
        response.body
    );
}

/// Assert a JSON body contains the given field
///
/// # Panics
/// If the field is not present
pub fn assert_json_field(body: &Value, field: &str) {
    assert!(
        body.get(field).is_some(),
        "Expected JSON field '{}' not found in response: {}",
        field,
        body
    );
}
