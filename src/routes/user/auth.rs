//! Registration and login routes.

use axum::extract::State;

use http::StatusCode;

use surebet_model::{
    Role,
    request::auth::{LoginRequest, RegisterRequest},
    response::{Message, TokenResponse},
};

use tokio::task::spawn_blocking;

use tracing::instrument;

use crate::{
    app::{AppError, AppGarde, AppJson, AppState, Payload, error::AppErrorKind},
    auth::password,
    user::{NewUser, create_user, get_credentials},
};

/// Registers a new punter.
#[instrument(skip(state))]
pub async fn register(
    State(state): State<AppState>,
    AppGarde(Payload(request)): AppGarde<Payload<RegisterRequest>>,
) -> Result<(StatusCode, AppJson<Message>), AppError> {
    let RegisterRequest {
        username,
        email,
        password,
    } = request;

    let password_hash = spawn_blocking(move || password::hash(&password)).await??;

    let mut conn = state.db.acquire().await?;

    let id = create_user(
        &NewUser {
            username: &username,
            email: &email,
            password_hash: &password_hash,
            role: Role::Punter,
        },
        &mut conn,
    )
    .await?;

    tracing::info!(id, %username, "registered new user");

    Ok((
        StatusCode::CREATED,
        AppJson(Message::new(format!("Welcome {}!", username))),
    ))
}

/// Exchanges a username and password for a bearer token.
///
/// An unknown username and a wrong password are indistinguishable.
#[instrument(skip(state))]
pub async fn login(
    State(state): State<AppState>,
    Payload(request): Payload<LoginRequest>,
) -> Result<AppJson<TokenResponse>, AppError> {
    let credentials = {
        let mut conn = state.db.acquire().await?;
        get_credentials(&request.username, &mut conn).await?
    };

    let LoginRequest { password, .. } = request;

    let verified = spawn_blocking(move || match credentials {
        Some(credentials) => {
            password::verify(&password, &credentials.password_hash).then_some(credentials.id)
        }
        None => {
            password::verify_decoy(&password);
            None
        }
    })
    .await?;

    let Some(id) = verified else {
        return Err(AppErrorKind::BadCredentials.into());
    };

    let token = state.keys.issue(id).map_err(AppError::new)?;

    tracing::debug!(id, "issued token");

    Ok(AppJson(TokenResponse { token }))
}
