//! User authentication.
//!
//! Protected routes take an [`AuthenticatedUser`], which verifies the
//! request's bearer token before the handler runs.

pub mod password;
pub mod token;

use axum::extract::{FromRef, FromRequestParts};

use http::{header, request::Parts};

use crate::app::{AppError, AppState, error::AppErrorKind};

/// An authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The database ID of the user.
    pub id: i64,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // if the result was cached, simply return the cached value
        if let Some(auth) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(*auth);
        }

        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AppErrorKind::MissingToken)?;

        let token = header
            .to_str()
            .ok()
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(|s| s.trim())
            .ok_or(AppErrorKind::MalformedToken)?;

        let state = AppState::from_ref(state);

        let claims = state.keys.verify(token).map_err(|err| {
            tracing::debug!(%err, "rejected bearer token");
            AppErrorKind::Token(err)
        })?;

        let auth = AuthenticatedUser { id: claims.sub };

        // cache to extensions
        parts.extensions.insert(auth);

        Ok(auth)
    }
}
