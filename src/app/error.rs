//! Application error that may occur during the processing of a request.
//!
//! See [`AppError`].

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    sync::Arc,
};

use axum::{
    extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    response::{IntoResponse, Response},
};

use derive_more::{Display, From};

use http::StatusCode;

use surebet_model::ApiError;

use crate::app::AppJson;

/// Application error that may occur during the processing of a request.
///
/// This includes both internal errors and user errors.
#[derive(Debug)]
pub struct AppError {
    kind: AppErrorKind,
    message: Option<String>,
}

impl AppError {
    /// Creates an internal error from any error.
    pub fn new<E>(err: E) -> AppError
    where
        E: Error + Send + Sync + 'static,
    {
        AppErrorKind::Other(Box::new(err)).into()
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> AppError {
        AppError {
            kind: AppErrorKind::NotFound,
            message: Some(message.into()),
        }
    }

    /// The inner [`AppErrorKind`] of the error.
    pub fn kind(&self) -> &AppErrorKind {
        &self.kind
    }

    /// The status code this error responds with.
    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.message.as_ref() {
            Some(msg) => f.write_str(msg),
            None => Display::fmt(&self.kind, f),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            AppErrorKind::Json(err) => Some(err),
            AppErrorKind::Form(err) => Some(err),
            AppErrorKind::Query(err) => Some(err),
            AppErrorKind::Path(err) => Some(err),
            AppErrorKind::Garde(err) => Some(err),
            AppErrorKind::Database(err) => Some(err),
            AppErrorKind::Token(err) => Some(err),
            AppErrorKind::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl<T> From<T> for AppError
where
    T: Into<AppErrorKind>,
{
    fn from(value: T) -> Self {
        AppError {
            kind: value.into(),
            message: None,
        }
    }
}

/// The specific kind of error that happened.
#[derive(Debug, Display, From)]
#[non_exhaustive]
pub enum AppErrorKind {
    /// The request's JSON payload was malformed or invalid.
    #[display("{_0}")]
    Json(JsonRejection),
    /// The request's urlencoded payload was malformed or invalid.
    #[display("{_0}")]
    Form(FormRejection),
    /// The request's query string was malformed or invalid.
    #[display("{_0}")]
    Query(QueryRejection),
    /// A path parameter could not be parsed.
    #[display("{_0}")]
    Path(PathRejection),
    /// The request's payload failed validation.
    #[display("{_0}")]
    Garde(garde::Report),
    /// The request is missing a content type.
    #[display("Missing content type")]
    #[from(ignore)]
    MissingContentType,
    /// The request's content type is not supported.
    #[display("Content type {_0:?} is not supported")]
    #[from(ignore)]
    UnsupportedContentType(String),
    /// No `Authorization` header was sent to an authenticated endpoint.
    #[display("Authorization header required")]
    #[from(ignore)]
    MissingToken,
    /// The `Authorization` header is not a bearer token.
    #[display("Bearer token required")]
    #[from(ignore)]
    MalformedToken,
    /// The bearer token failed verification.
    #[display("Invalid token")]
    Token(jsonwebtoken::errors::Error),
    /// The username or password did not match.
    #[display("Invalid credentials")]
    #[from(ignore)]
    BadCredentials,
    /// The username or email is already in use.
    #[display("Username or email already exists")]
    #[from(ignore)]
    UserExists,
    /// The requested resource does not exist.
    #[display("Not found")]
    #[from(ignore)]
    NotFound,
    /// An authenticated user no longer exists.
    #[display("Authenticated user {_0} does not exist")]
    #[from(ignore)]
    MissingIdentity(i64),
    /// A database error.
    #[display("{_0}")]
    Database(sqlx::Error),
    /// The password could not be hashed.
    #[display("password hashing failed: {_0}")]
    PasswordHash(argon2::password_hash::Error),
    /// A blocking task panicked or was cancelled.
    #[display("{_0}")]
    Join(tokio::task::JoinError),
    /// Any other internal error.
    #[display("{_0}")]
    Other(Box<dyn Error + Send + Sync>),
}

impl AppErrorKind {
    /// The status code this kind of error responds with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppErrorKind::Json(_)
            | AppErrorKind::Form(_)
            | AppErrorKind::Query(_)
            | AppErrorKind::Path(_)
            | AppErrorKind::Garde(_)
            | AppErrorKind::MissingContentType
            | AppErrorKind::UnsupportedContentType(_) => StatusCode::BAD_REQUEST,
            AppErrorKind::MissingToken
            | AppErrorKind::MalformedToken
            | AppErrorKind::Token(_)
            | AppErrorKind::BadCredentials => StatusCode::UNAUTHORIZED,
            AppErrorKind::UserExists => StatusCode::CONFLICT,
            AppErrorKind::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.kind.status();

        let (mut error, internal_error) = if status.is_server_error() {
            // fallthrough for internal server errors not turned into user
            // errors here
            (
                ApiError {
                    message: "An internal server error occured.".into(),
                },
                Some(self.kind),
            )
        } else {
            (
                ApiError {
                    message: self.kind.to_string(),
                },
                None,
            )
        };

        // replace error message
        if let Some(message) = self.message {
            error.message = message;
        }

        let mut response = (status, AppJson(error)).into_response();
        if let Some(error) = internal_error {
            response.extensions_mut().insert(Arc::new(error));
        }
        response
    }
}
