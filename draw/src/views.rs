use common::errors::LotteryError;
use common::history::AppendOnlyLog;
use common::types::{DrawId, LotteryState, Ticket};
use near_sdk::json_types::U128;
use near_sdk::{log, near_bindgen, AccountId};

use crate::interfaces::draw::{Draw, DrawResult};
use crate::interfaces::views::DrawViews;
use crate::payout::PendingPayout;
use crate::{Contract, ContractExt};

const DEFAULT_PAGE_SIZE: u64 = 100;

#[near_bindgen]
impl DrawViews for Contract {
    fn get_ticket_price(&self) -> U128 {
        U128(self.registration_fee)
    }

    fn get_participant_count(&self) -> u32 {
        self.tickets.participant_count()
    }

    fn is_draw_completed(&self) -> bool {
        self.current_draw.completed
    }

    fn get_current_prize(&self) -> U128 {
        self.current_draw.prize_pool
    }

    fn get_lottery_state(&self) -> LotteryState {
        let state = self.current_draw.state();
        if state == LotteryState::Inconsistent {
            log!("Inconsistent draw state: {:?}", self.current_draw);
        }

        state
    }

    fn get_winner(&self) -> Option<AccountId> {
        self.current_draw.winner.clone()
    }

    fn is_prize_withdrawn(&self) -> bool {
        self.current_draw.prize_withdrawn
    }

    fn get_participants(&self) -> Vec<AccountId> {
        self.tickets.participants()
    }

    fn get_user_ticket(&self, account_id: AccountId) -> Option<Ticket> {
        self.tickets.ticket_of(&account_id)
    }

    #[handle_result]
    fn get_draw_result(&self, draw_id: DrawId) -> Result<DrawResult, LotteryError> {
        self.history
            .get_by_identifier(&draw_id)
            .ok_or(LotteryError::NotFound)
    }

    #[handle_result]
    fn get_latest_draw_result(&self) -> Result<DrawResult, LotteryError> {
        self.history.last().ok_or(LotteryError::NotFound)
    }

    fn get_completed_draw_ids(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<DrawId> {
        self.history.identifiers(
            from_index.unwrap_or(0),
            limit.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    fn is_owner(&self, account_id: AccountId) -> bool {
        account_id == self.owner_id
    }

    fn is_registered(&self, account_id: AccountId) -> bool {
        self.tickets.is_registered(&account_id)
    }

    fn get_owner(&self) -> AccountId {
        self.owner_id.clone()
    }

    fn get_current_draw_id(&self) -> DrawId {
        self.current_draw.draw_id
    }

    fn get_draw(&self) -> Draw {
        self.current_draw.clone()
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn get_available_ticket_count(&self) -> u32 {
        self.tickets.available_count()
    }

    fn get_pending_payout(&self) -> Option<PendingPayout> {
        self.payout_lock.pending().cloned()
    }
}
