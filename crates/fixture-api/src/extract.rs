//! Request body extractors for login forms and uploads
//!
//! Both extractors reject malformed bodies with [`ApiError::Unprocessable`]
//! so the client always gets a `{"detail": ...}` body back.

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use bytes::Bytes;
use fixture_core::Credentials;

use crate::error::ApiError;

/// Login credentials from a form body.
///
/// Accepts `application/x-www-form-urlencoded` and `multipart/form-data`;
/// both yield the same [`Credentials`].
#[derive(Debug)]
pub struct LoginForm(pub Credentials);

impl<S> FromRequest<S> for LoginForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_multipart(&req) {
            let Form(credentials) = Form::<Credentials>::from_request(req, state).await?;
            return Ok(LoginForm(credentials));
        }

        let mut multipart = Multipart::from_request(req, state).await?;
        let mut username = None;
        let mut password = None;
        let mut token = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "username" => username = Some(field.text().await?),
                "password" => password = Some(field.text().await?),
                "token" => token = Some(field.text().await?),
                _ => tracing::debug!(field = %name, "Ignoring unexpected form field"),
            }
        }

        Ok(LoginForm(Credentials {
            username: required(username, "username")?,
            password: required(password, "password")?,
            token: required(token, "token")?,
        }))
    }
}

/// Multipart upload: a `token` text field and an `upload_file` file field
#[derive(Debug)]
pub struct UploadPayload {
    pub token: String,
    pub file: Bytes,
    /// Client-supplied file name, logged only
    pub filename: Option<String>,
}

impl<S> FromRequest<S> for UploadPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state).await?;
        let mut token = None;
        let mut file = None;
        let mut filename = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "token" => token = Some(field.text().await?),
                "upload_file" => {
                    filename = field.file_name().map(str::to_string);
                    file = Some(field.bytes().await?);
                }
                _ => tracing::debug!(field = %name, "Ignoring unexpected upload field"),
            }
        }

        Ok(UploadPayload {
            token: required(token, "token")?,
            file: required(file, "upload_file")?,
            filename,
        })
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::Unprocessable(format!("missing field `{}`", name)))
}
