//! Users endpoints.

use axum::extract::State;

use surebet_model::Profile;

use tracing::instrument;

use crate::{
    app::{AppError, AppJson, AppState, error::AppErrorKind},
    auth::AuthenticatedUser,
    user::get_record,
};

pub mod auth;

/// Returns the currently authenticated user's record.
#[instrument(skip(state))]
pub async fn show_me(
    user: AuthenticatedUser,
    State(state): State<AppState>,
) -> Result<AppJson<Profile>, AppError> {
    let mut conn = state.db.acquire().await?;

    match get_record(user.id, &mut conn).await? {
        Some(record) => Ok(AppJson(record.into())),
        // a valid token names a user that is gone
        None => Err(AppErrorKind::MissingIdentity(user.id).into()),
    }
}
