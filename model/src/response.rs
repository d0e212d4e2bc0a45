//! Response bodies.

use serde::{Deserialize, Serialize};

/// A plain acknowledgement.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Message {
        Message {
            message: message.into(),
        }
    }
}

/// A freshly issued bearer token.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Acknowledges a submitted betslip.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BetslipCreated {
    pub message: String,
    /// The ID of the new betslip.
    pub betslip_id: i64,
}
