//! Route handlers

pub mod csrf;
pub mod login;
pub mod upload;

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, Response, StatusCode};
    use fixture_core::FixtureConfig;
    use tower::ServiceExt;

    use crate::{create_router, AppState};

    pub const BOUNDARY: &str = "fixture-boundary";

    /// Send one request through a fresh router
    pub async fn send(config: FixtureConfig, request: Request<Body>) -> Response<Body> {
        create_router(AppState::new(config))
            .oneshot(request)
            .await
            .unwrap()
    }

    pub async fn json_body(response: Response<Body>) -> (StatusCode, serde_json::Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    /// A text field in a multipart body
    pub fn text_part(name: &str, value: &str) -> Vec<u8> {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
        .into_bytes()
    }

    /// A file field in a multipart body
    pub fn file_part(name: &str, filename: &str, content: &[u8]) -> Vec<u8> {
        let mut part = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        part.extend_from_slice(content);
        part.extend_from_slice(b"\r\n");
        part
    }

    pub fn multipart_request(uri: &str, parts: Vec<Vec<u8>>) -> Request<Body> {
        let mut body: Vec<u8> = parts.into_iter().flatten().collect();
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::post(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }
}
