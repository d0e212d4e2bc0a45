//! Betslip comment routes.

use axum::extract::State;

use http::StatusCode;

use surebet_model::{request::betslip::CreateCommentRequest, response::Message};

use tracing::instrument;

use crate::{
    app::{AppError, AppGarde, AppJson, AppPath, AppState, Payload},
    auth::AuthenticatedUser,
    betslip::create_comment,
};

/// Comments on a betslip.
#[instrument(skip(state))]
pub async fn create(
    user: AuthenticatedUser,
    State(state): State<AppState>,
    AppPath(betslip_id): AppPath<i64>,
    AppGarde(Payload(request)): AppGarde<Payload<CreateCommentRequest>>,
) -> Result<(StatusCode, AppJson<Message>), AppError> {
    let mut conn = state.db.acquire().await?;

    create_comment(user.id, betslip_id, &request.content, &mut conn).await?;

    Ok((
        StatusCode::CREATED,
        AppJson(Message::new("Comment posted successfully")),
    ))
}
