use axum::{http::StatusCode, response::{Html, IntoResponse}};
use crate::errors::PlagcheckError;
use super::page::escape_html;

impl IntoResponse for PlagcheckError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            PlagcheckError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PlagcheckError::InputTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"UTF-8\"><title>Error</title></head>\n<body><h1>{}</h1><p>{}</p></body>\n</html>\n",
            status,
            escape_html(&self.to_string()),
        );

        (status, Html(body)).into_response()
    }
}
