//! SureBet Slips backend.
//!
//! Punters register, submit betslips, comment on each other's slips and
//! compete on a win/loss leaderboard.

pub mod app;
pub mod auth;
pub mod betslip;
pub mod cli;
pub mod config;
pub mod db;
pub mod routes;
pub mod user;
