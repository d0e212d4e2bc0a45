//! Users and their records.

use chrono::Utc;

use sqlx::{FromRow, SqliteConnection};

use surebet_model::{
    LeaderboardEntry, Profile, Role, request::leaderboard::PunterKind,
};

use crate::app::{AppError, error::AppErrorKind};

/// How many punters the leaderboard shows.
pub const LEADERBOARD_LIMIT: i64 = 10;

/// A user about to be registered.
#[derive(Debug)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    /// The PHC string of the user's password.
    pub password_hash: &'a str,
    pub role: Role,
}

/// The stored credentials of a user.
#[derive(FromRow)]
pub struct CredentialsRow {
    pub id: i64,
    pub password_hash: String,
}

/// A user's win/loss record.
#[derive(FromRow)]
pub struct RecordRow {
    pub username: String,
    pub total_wins: i64,
    pub total_losses: i64,
    pub win_rate: f64,
}

impl From<RecordRow> for LeaderboardEntry {
    fn from(row: RecordRow) -> Self {
        LeaderboardEntry {
            user: row.username,
            wins: row.total_wins,
            losses: row.total_losses,
            rate: row.win_rate,
        }
    }
}

impl From<RecordRow> for Profile {
    fn from(row: RecordRow) -> Self {
        Profile {
            wins: row.total_wins,
            losses: row.total_losses,
        }
    }
}

/// Creates a user with a clean record, returning its ID.
///
/// Fails with [`AppErrorKind::UserExists`] if the username or the email is
/// taken, without saying which.
pub async fn create_user(
    user: &NewUser<'_>,
    conn: &mut SqliteConnection,
) -> Result<i64, AppError> {
    let now = Utc::now();

    let result = sqlx::query_as::<_, (i64,)>(
        r#"
        INSERT INTO users (username, email, password_hash, role, inserted_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $5)
        RETURNING id
        "#,
    )
    .bind(user.username)
    .bind(user.email)
    .bind(user.password_hash)
    .bind(user.role.as_str())
    .bind(now)
    .fetch_one(&mut *conn)
    .await;

    match result {
        Ok((id,)) => Ok(id),
        Err(err)
            if err
                .as_database_error()
                .is_some_and(|db_err| db_err.is_unique_violation()) =>
        {
            Err(AppErrorKind::UserExists.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Gets the credentials of a user by their username.
pub async fn get_credentials(
    username: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<CredentialsRow>, AppError> {
    sqlx::query_as::<_, CredentialsRow>(
        r#"
        SELECT id, password_hash
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(&mut *conn)
    .await
    .map_err(AppError::from)
}

/// Gets the record of a user by their ID.
pub async fn get_record(
    id: i64,
    conn: &mut SqliteConnection,
) -> Result<Option<RecordRow>, AppError> {
    sqlx::query_as::<_, RecordRow>(
        r#"
        SELECT username, total_wins, total_losses, win_rate
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(AppError::from)
}

/// Gets the best punters by win rate.
///
/// Ties are left in whatever order the database returns them.
pub async fn leaderboard(
    kind: Option<PunterKind>,
    conn: &mut SqliteConnection,
) -> Result<Vec<RecordRow>, AppError> {
    // NULL matches everyone
    let is_ai = kind.map(|kind| kind == PunterKind::Ai);

    sqlx::query_as::<_, RecordRow>(
        r#"
        SELECT username, total_wins, total_losses, win_rate
        FROM users
        WHERE $1 IS NULL OR (role = $2) = $1
        ORDER BY win_rate DESC
        LIMIT $3
        "#,
    )
    .bind(is_ai)
    .bind(Role::AiPunter.as_str())
    .bind(LEADERBOARD_LIMIT)
    .fetch_all(&mut *conn)
    .await
    .map_err(AppError::from)
}
