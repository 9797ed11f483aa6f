pub mod draw {
    use common::errors::LotteryError;
    use common::history::Identifier;
    use common::types::{DrawId, LotteryState, Ticket, FIRST_DRAW_ID};
    use near_sdk::json_types::{U128, U64};
    use near_sdk::serde::{Deserialize, Serialize};
    use near_sdk::{
        borsh::{self, BorshDeserialize, BorshSerialize},
        AccountId, Promise,
    };

    #[derive(Clone, Debug, PartialEq, Eq)]
    #[derive(BorshDeserialize, BorshSerialize)]
    #[derive(Serialize, Deserialize)]
    #[serde(crate = "near_sdk::serde")]
    pub struct Draw {
        pub draw_id: DrawId,
        /// informational, never enforced
        pub end_timestamp: U64,
        pub completed: bool,
        pub prize_pool: U128,
        pub winner: Option<AccountId>,
        pub prize_withdrawn: bool,
        pub started_at: u64,
        pub completed_at: u64,
    }

    impl Draw {
        /// State of a freshly deployed engine: nothing active, nothing owed.
        pub fn initial() -> Self {
            Self {
                draw_id: FIRST_DRAW_ID,
                end_timestamp: U64(0),
                completed: true,
                prize_pool: U128(0),
                winner: None,
                prize_withdrawn: false,
                started_at: 0,
                completed_at: 0,
            }
        }

        pub fn is_active(&self) -> bool {
            !self.completed
        }

        pub fn state(&self) -> LotteryState {
            match (self.completed, &self.winner, self.prize_withdrawn) {
                (false, None, false) => LotteryState::InProgress,
                (true, Some(_), false) => LotteryState::WaitingForClaim,
                (true, None, _) | (true, Some(_), true) => LotteryState::ReadyForNewDraw,
                _ => LotteryState::Inconsistent,
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    #[derive(BorshDeserialize, BorshSerialize)]
    #[derive(Serialize, Deserialize)]
    #[serde(crate = "near_sdk::serde")]
    pub struct DrawResult {
        pub draw_id: DrawId,
        pub winning_ticket: Ticket,
        pub winner: Option<AccountId>,
        pub has_winner: bool,
        pub completed_at: u64,
    }

    impl Identifier<DrawId> for DrawResult {
        fn id(&self) -> DrawId {
            self.draw_id
        }
    }

    pub trait DrawCreator {
        fn can_start_draw(&self) -> bool;
        fn start_draw(&mut self, target_timestamp: U64) -> Result<DrawId, LotteryError>;
        fn execute_draw(&mut self) -> Result<DrawResult, LotteryError>;
    }

    pub trait DrawRegistration {
        fn register(&mut self) -> Result<Ticket, LotteryError>;
    }

    pub trait PrizeClaimer {
        fn claim_prize(&mut self) -> Result<Promise, LotteryError>;
    }
}

pub mod admin {
    use common::errors::LotteryError;
    use near_sdk::json_types::U128;

    pub trait Administration {
        fn pause(&mut self) -> Result<(), LotteryError>;
        fn unpause(&mut self) -> Result<(), LotteryError>;
        fn set_fee(&mut self, new_fee: U128) -> Result<(), LotteryError>;
    }
}

pub mod views {
    use common::errors::LotteryError;
    use common::types::{DrawId, LotteryState, Ticket};
    use near_sdk::json_types::U128;
    use near_sdk::AccountId;

    use super::draw::{Draw, DrawResult};
    use crate::payout::PendingPayout;

    pub trait DrawViews {
        fn get_ticket_price(&self) -> U128;
        fn get_participant_count(&self) -> u32;
        fn is_draw_completed(&self) -> bool;
        fn get_current_prize(&self) -> U128;
        fn get_lottery_state(&self) -> LotteryState;
        fn get_winner(&self) -> Option<AccountId>;
        fn is_prize_withdrawn(&self) -> bool;
        fn get_participants(&self) -> Vec<AccountId>;
        fn get_user_ticket(&self, account_id: AccountId) -> Option<Ticket>;
        fn get_draw_result(&self, draw_id: DrawId) -> Result<DrawResult, LotteryError>;
        fn get_latest_draw_result(&self) -> Result<DrawResult, LotteryError>;
        fn get_completed_draw_ids(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<DrawId>;
        fn is_owner(&self, account_id: AccountId) -> bool;
        fn is_registered(&self, account_id: AccountId) -> bool;
        fn get_owner(&self) -> AccountId;
        fn get_current_draw_id(&self) -> DrawId;
        fn get_draw(&self) -> Draw;
        fn is_paused(&self) -> bool;
        fn get_available_ticket_count(&self) -> u32;
        fn get_pending_payout(&self) -> Option<PendingPayout>;
    }
}
