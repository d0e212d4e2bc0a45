//! Betslip routes.

pub mod comment;

use axum::extract::State;

use http::StatusCode;

use surebet_model::{request::betslip::CreateBetslipRequest, response::BetslipCreated};

use tracing::instrument;

use crate::{
    app::{AppError, AppJson, AppState},
    auth::AuthenticatedUser,
    betslip::create_betslip,
};

/// Submits a betslip for the authenticated user.
///
/// The games on the slip are stored exactly as they were sent.
#[instrument(skip(state))]
pub async fn create(
    user: AuthenticatedUser,
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateBetslipRequest>,
) -> Result<(StatusCode, AppJson<BetslipCreated>), AppError> {
    let mut conn = state.db.acquire().await?;

    let betslip_id = create_betslip(
        user.id,
        &request.platform,
        request.games.get(),
        &mut conn,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        AppJson(BetslipCreated {
            message: "Betslip posted successfully!".into(),
            betslip_id,
        }),
    ))
}
