//! Betslips and their comments.

use chrono::Utc;

use sqlx::SqliteConnection;

use surebet_model::BetslipStatus;

use crate::app::{AppError, error::AppErrorKind};

/// Submits a betslip, returning its ID.
///
/// New betslips are always [`BetslipStatus::Pending`], and do not touch the
/// owner's record.
pub async fn create_betslip(
    user_id: i64,
    platform: &str,
    games: &str,
    conn: &mut SqliteConnection,
) -> Result<i64, AppError> {
    let now = Utc::now();

    let result = sqlx::query_as::<_, (i64,)>(
        r#"
        INSERT INTO betslips (user_id, platform, games, status, inserted_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(user_id)
    .bind(platform)
    .bind(games)
    .bind(BetslipStatus::Pending.as_str())
    .bind(now)
    .fetch_one(&mut *conn)
    .await;

    match result {
        Ok((id,)) => Ok(id),
        // the token outlived its user
        Err(err) if is_foreign_key_violation(&err) => {
            Err(AppErrorKind::MissingIdentity(user_id).into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Comments on a betslip.
///
/// Fails with [`AppErrorKind::NotFound`] if the betslip does not exist.
pub async fn create_comment(
    user_id: i64,
    betslip_id: i64,
    content: &str,
    conn: &mut SqliteConnection,
) -> Result<(), AppError> {
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO comments (user_id, betslip_id, content, inserted_at)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(user_id)
    .bind(betslip_id)
    .bind(content)
    .bind(now)
    .execute(&mut *conn)
    .await;

    match result {
        Ok(_) => Ok(()),
        Err(err) if is_foreign_key_violation(&err) => Err(AppError::not_found(format!(
            "Betslip {} not found",
            betslip_id
        ))),
        Err(err) => Err(err.into()),
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}
