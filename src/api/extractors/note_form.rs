//! Form values of a create-note request.
//!
//! Accepts `application/x-www-form-urlencoded` and `multipart/form-data`
//! bodies. Query-string pairs are appended after body values, so a body value
//! wins when both carry the same key. Other content types contribute nothing
//! from the body.

use std::collections::HashMap;

use axum::extract::{FromRequest, FromRequestParts, Multipart, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;

use crate::error::AppError;

#[derive(Debug, Default)]
pub struct FormValues {
    values: HashMap<String, Vec<String>>,
}

impl FormValues {
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// First value recorded for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

impl Extend<(String, String)> for FormValues {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.push(key, value);
        }
    }
}

impl<S> FromRequest<S> for FormValues
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let Query(query) = Query::<Vec<(String, String)>>::from_request_parts(&mut parts, state)
            .await
            .map_err(|e| AppError::form_parse(e.body_text()))?;

        let content_type = parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let req = Request::from_parts(parts, body);
        let mut form = FormValues::default();

        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::form_parse(e.body_text()))?;

            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|e| AppError::form_parse(e.body_text()))?
            {
                let Some(name) = field.name().map(str::to_owned) else {
                    continue;
                };
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::form_parse(e.body_text()))?;
                form.push(name, value);
            }
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| AppError::form_parse(e.body_text()))?;
            form.extend(pairs);
        }

        form.extend(query);
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, StatusCode};

    async fn extract(req: axum::http::Request<Body>) -> Result<FormValues, AppError> {
        FormValues::from_request(req, &()).await
    }

    fn post(uri: &str, content_type: &str, body: impl Into<Body>) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, content_type)
            .body(body.into())
            .unwrap()
    }

    #[tokio::test]
    async fn reads_urlencoded_body() {
        let form = extract(post(
            "/notes",
            "application/x-www-form-urlencoded",
            "text=Hello+world&user=alice",
        ))
        .await
        .unwrap();

        assert_eq!(form.first("text"), Some("Hello world"));
        assert_eq!(form.first("user"), Some("alice"));
        assert_eq!(form.first("missing"), None);
    }

    #[tokio::test]
    async fn first_value_wins_and_body_precedes_query() {
        let form = extract(post(
            "/notes?text=from-query&user=bob",
            "application/x-www-form-urlencoded",
            "text=first&text=second",
        ))
        .await
        .unwrap();

        assert_eq!(form.first("text"), Some("first"));
        assert_eq!(form.first("user"), Some("bob"));
    }

    #[tokio::test]
    async fn reads_multipart_body() {
        let body = "--XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"text\"\r\n\r\n\
            Hi there\r\n\
            --XBOUNDARY\r\n\
            Content-Disposition: form-data; name=\"user\"\r\n\r\n\
            carol\r\n\
            --XBOUNDARY--\r\n";

        let form = extract(post(
            "/notes",
            "multipart/form-data; boundary=XBOUNDARY",
            body,
        ))
        .await
        .unwrap();

        assert_eq!(form.first("text"), Some("Hi there"));
        assert_eq!(form.first("user"), Some("carol"));
    }

    #[tokio::test]
    async fn other_content_types_only_yield_query_values() {
        let form = extract(post("/notes?user=dave", "application/json", r#"{"text":"x"}"#))
            .await
            .unwrap();

        assert_eq!(form.first("text"), None);
        assert_eq!(form.first("user"), Some("dave"));
    }

    #[tokio::test]
    async fn malformed_multipart_is_a_parse_error() {
        let err = extract(post("/notes", "multipart/form-data", "garbage"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::FormParse(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
