#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use enercalc::config::DEFAULT_MAX_BODY_BYTES;
use enercalc::server::{AppState, router};
use enercalc::{Deployment, get_default_indicators};
use serde_json::Value;
use std::path::PathBuf;
use tower::ServiceExt;

pub const BOUNDARY: &str = "----enercalc-test-boundary";

pub struct TestCase<'a> {
    pub name: &'a str,
    pub fields: Vec<(&'a str, &'a str)>,
    /// JSON pointer into the response and the value expected there.
    pub expected: Vec<(&'a str, f64)>,
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Reply {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub fn static_root(deployment: Deployment) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("static")
        .join(deployment.name())
}

pub fn app(deployment: Deployment) -> Router {
    app_with_limit(deployment, DEFAULT_MAX_BODY_BYTES)
}

pub fn app_with_limit(deployment: Deployment, max_body_bytes: usize) -> Router {
    let state = AppState::new(static_root(deployment), get_default_indicators().clone());
    router(deployment, state, max_body_bytes)
}

pub fn multipart_body(fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

pub fn multipart_request(path: &str, fields: &[(&str, &str)]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(fields)))
        .unwrap()
}

pub fn raw_request(method: Method, path: &str, content_type: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Reply {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    Reply {
        status,
        headers,
        body,
    }
}

pub async fn get(deployment: Deployment, path: &str) -> Reply {
    send(app(deployment), raw_request(Method::GET, path, None, "")).await
}

pub async fn post_form(deployment: Deployment, path: &str, fields: &[(&str, &str)]) -> Reply {
    send(app(deployment), multipart_request(path, fields)).await
}

/// Posts every case to `path` and checks each expected value within `tolerance`.
pub async fn run_group_test(
    deployment: Deployment,
    path: &str,
    cases: Vec<TestCase<'_>>,
    tolerance: f64,
) {
    let mut max_error: f64 = 0.0;

    println!("\nRunning Group Test: {} {}", deployment, path);
    println!("{:-<88}", "");
    println!(
        "{:<24} | {:<34} | {:<12} | {:<12}",
        "Case", "Field", "Expected", "Calculated"
    );

    for case in cases {
        let reply = post_form(deployment, path, &case.fields).await;
        assert_eq!(
            reply.status,
            StatusCode::OK,
            "{}: unexpected status, body: {}",
            case.name,
            reply.text()
        );
        let json = reply.json();

        for (pointer, expected) in &case.expected {
            let calculated = json
                .pointer(pointer)
                .and_then(Value::as_f64)
                .unwrap_or_else(|| panic!("{}: missing number at {}", case.name, pointer));
            let error = (calculated - expected).abs() / expected.abs().max(1.0);

            println!(
                "{:<24} | {:<34} | {:<12.6} | {:<12.6} (Err: {:.2e})",
                case.name, pointer, expected, calculated, error
            );

            max_error = max_error.max(error);
            assert!(
                error <= tolerance,
                "{}: {} = {} differs from {} by {:.3e}",
                case.name,
                pointer,
                calculated,
                expected,
                error
            );
        }
    }

    println!("{:-<88}", "");
    println!("  Max Relative Error: {:.3e} (Limit: {:.3e})\n", max_error, tolerance);
}
