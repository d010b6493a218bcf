use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::server::api::{self, ApiError};
use crate::server::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    fn json(body: String) -> Self {
        Self {
            status_code: 200,
            status_text: "OK",
            content_type: "application/json",
            body,
        }
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response()
    }
}

/// Dispatch one request. `path` may carry a query string.
pub fn route_request(state: &AppState, method: &str, path: &str, body: &str) -> HttpResponse {
    let route = path.split('?').next().unwrap_or(path);
    match (method, route) {
        ("GET", "/api/health") => match api::health_payload() {
            Ok(payload) => HttpResponse::json(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("GET", "/api/algorithms") => match api::algorithms_payload(state, path) {
            Ok(payload) => HttpResponse::json(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("POST", "/api/algorithms/resolve") => match api::resolve_payload(state, body) {
            Ok(payload) => HttpResponse::json(payload),
            Err(err) => api_error_response(err),
        },
        ("GET", route) if route.starts_with("/api/algorithms/") => {
            let id = route.trim_start_matches("/api/algorithms/");
            match api::algorithm_payload(state, id) {
                Ok(Some(payload)) => HttpResponse::json(payload),
                Ok(None) => error_response(404, "Not Found", "Algorithm not found"),
                Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
            }
        }
        ("POST", "/api/assign") => match api::assign_payload(state, body) {
            Ok(payload) => HttpResponse::json(payload),
            Err(err) => api_error_response(err),
        },
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

fn api_error_response(err: ApiError) -> HttpResponse {
    match err {
        ApiError::UnknownAlgorithm(selection) => HttpResponse {
            status_code: 400,
            status_text: "Bad Request",
            content_type: "application/json",
            body: api::unknown_algorithm_body(&selection),
        },
        ApiError::Parse(_) | ApiError::Validation(_) => {
            error_response(400, "Bad Request", &err.to_string())
        }
        ApiError::Serialize(_) => error_response(500, "Internal Server Error", &err.to_string()),
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}
