// Common test utilities shared across integration test files
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Request, Response, StatusCode},
    Router,
};
use phish_sense_api::{create_app, AppConfig, AppState};
use serde::Serialize;
use tower::util::ServiceExt;

pub const MULTIPART_BOUNDARY: &str = "phish-sense-test-boundary";

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Send a POST request
    pub fn post(&self, uri: &str) -> TestRequest<'_> {
        TestRequest::new(self, "POST", uri)
    }

    /// Send a GET request
    pub fn get(&self, uri: &str) -> TestRequest<'_> {
        TestRequest::new(self, "GET", uri)
    }

    /// Send an OPTIONS request
    pub fn options(&self, uri: &str) -> TestRequest<'_> {
        TestRequest::new(self, "OPTIONS", uri)
    }
}

/// Test request builder
pub struct TestRequest<'a> {
    app: &'a TestApp,
    method: &'static str,
    uri: String,
    headers: Vec<(String, String)>,
    body: Body,
}

impl<'a> TestRequest<'a> {
    fn new(app: &'a TestApp, method: &'static str, uri: &str) -> Self {
        Self {
            app,
            method,
            uri: uri.to_string(),
            headers: Vec::new(),
            body: Body::empty(),
        }
    }

    /// Add a header
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Add JSON body to request
    pub fn json<T: Serialize>(self, body: &T) -> Self {
        let body_bytes = serde_json::to_vec(body).unwrap();
        self.raw_json(body_bytes)
    }

    /// Add a raw body sent as application/json (for malformed payloads)
    pub fn raw_json(mut self, body: impl Into<Body>) -> Self {
        self.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        self.body = body.into();
        self
    }

    /// Add a multipart/form-data body built with `multipart_body`
    pub fn multipart(mut self, body: Vec<u8>) -> Self {
        self.headers.push((
            "content-type".to_string(),
            format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
        ));
        self.body = Body::from(body);
        self
    }

    /// Send the request
    pub async fn send(self) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(&self.uri);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let request = builder.body(self.body).unwrap();

        let response = self.app.app.clone().oneshot(request).await.unwrap();

        TestResponse { response }
    }
}

/// Test response wrapper
pub struct TestResponse {
    response: Response<Body>,
}

impl TestResponse {
    /// Get status code
    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// Get response headers
    pub fn headers(&self) -> &HeaderMap {
        self.response.headers()
    }

    /// Parse JSON response
    pub async fn json<T: serde::de::DeserializeOwned>(self) -> T {
        let body = axum::body::to_bytes(self.response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    /// Get response body as text
    pub async fn text(self) -> String {
        let body = axum::body::to_bytes(self.response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }
}

/// A single multipart part
pub struct Part<'a> {
    pub name: &'a str,
    pub filename: Option<&'a str>,
    pub content_type: &'a str,
    pub data: &'a [u8],
}

/// Encode parts as a multipart/form-data body using `MULTIPART_BOUNDARY`
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
        match part.filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    part.name, filename
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name).as_bytes(),
            ),
        }
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", part.content_type).as_bytes());
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());
    body
}

/// A tiny PNG signature, enough for upload tests
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";

/// Setup test application with default configuration
pub fn setup_test_app() -> TestApp {
    setup_test_app_with(AppConfig::default())
}

/// Setup test application with a custom configuration
pub fn setup_test_app_with(config: AppConfig) -> TestApp {
    TestApp {
        app: create_app(AppState::new(config)),
    }
}
