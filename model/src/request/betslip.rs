//! Betslip and comment request bodies.

use garde::Validate;

use serde::{Deserialize, Serialize};

use serde_json::value::RawValue;

/// Request body for submitting a betslip.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateBetslipRequest {
    /// The betting platform the slip was placed on.
    pub platform: String,
    /// The games on the slip.
    ///
    /// This is kept exactly as the client sent it.
    pub games: Box<RawValue>,
}

/// Request body for commenting on a betslip.
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateCommentRequest {
    /// The content of the comment. Must not be empty.
    #[garde(length(min = 1))]
    pub content: String,
}
