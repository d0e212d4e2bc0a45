//! Leaderboard route.

use axum::extract::State;

use surebet_model::{LeaderboardEntry, request::leaderboard::LeaderboardQuery};

use crate::{
    app::{AppError, AppJson, AppQuery, AppState},
    user::leaderboard,
};

/// Shows the best punters by win rate.
pub async fn show(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<LeaderboardQuery>,
) -> Result<AppJson<Vec<LeaderboardEntry>>, AppError> {
    let mut conn = state.db.acquire().await?;

    let entries = leaderboard(query.filter(), &mut conn)
        .await?
        .into_iter()
        .map(LeaderboardEntry::from)
        .collect();

    Ok(AppJson(entries))
}
