use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

pub type DrawId = u64;
pub type Ticket = u32;

/// Ticket numbers are drawn from `1..=MAX_TICKETS`.
pub const MAX_TICKETS: Ticket = 10;
/// A draw can be executed only once exactly this many accounts registered.
pub const MAX_PARTICIPANTS: u32 = 5;

pub const FIRST_DRAW_ID: DrawId = 1;

pub const ONE_NEAR: u128 = 10u128.pow(24);
/// 0.001 NEAR
pub const DEFAULT_REGISTRATION_FEE: u128 = ONE_NEAR / 1_000;

/// Coarse state of the engine, derived from the current draw.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LotteryState {
    InProgress,
    WaitingForClaim,
    ReadyForNewDraw,
    /// Stored flags describe a combination the engine never produces.
    Inconsistent,
}

impl LotteryState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LotteryState::InProgress => "IN_PROGRESS",
            LotteryState::WaitingForClaim => "WAITING_FOR_CLAIM",
            LotteryState::ReadyForNewDraw => "READY_FOR_NEW_DRAW",
            LotteryState::Inconsistent => "INCONSISTENT",
        }
    }
}

impl std::fmt::Display for LotteryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
