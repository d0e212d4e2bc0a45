//! Betslip representations.

use std::str::FromStr;

use derive_more::{Display, Error};

use serde::{Deserialize, Serialize};

/// The lifecycle status of a betslip.
///
/// Every betslip is submitted as [`BetslipStatus::Pending`].
#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BetslipStatus {
    /// The bets are still in play.
    #[default]
    #[display("pending")]
    Pending,
    /// The betslip was settled as a win.
    #[display("settled_win")]
    SettledWin,
    /// The betslip was settled as a loss.
    #[display("settled_loss")]
    SettledLoss,
}

impl BetslipStatus {
    /// The status as it is stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            BetslipStatus::Pending => "pending",
            BetslipStatus::SettledWin => "settled_win",
            BetslipStatus::SettledLoss => "settled_loss",
        }
    }
}

impl FromStr for BetslipStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BetslipStatus::Pending),
            "settled_win" => Ok(BetslipStatus::SettledWin),
            "settled_loss" => Ok(BetslipStatus::SettledLoss),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

impl TryFrom<String> for BetslipStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A status string that is not a [`BetslipStatus`].
#[derive(Debug, Display, Error)]
#[display("unknown betslip status {_0:?}")]
pub struct UnknownStatus(#[error(not(source))] pub String);
