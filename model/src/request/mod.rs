//! Request bodies.

pub mod auth;
pub mod betslip;
pub mod leaderboard;
