//! API model representations.

pub mod betslip;
pub mod error;
pub mod request;
pub mod response;
pub mod user;

pub use betslip::BetslipStatus;
pub use error::ApiError;
pub use user::{LeaderboardEntry, Profile, Role};
