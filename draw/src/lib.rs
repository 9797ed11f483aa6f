use common::errors::LotteryError;
use common::events;
use common::history::{AppendOnlyLog, GenericHistory};
use common::random::{BlockRandomness, RandomSource};
use common::types::{DrawId, Ticket, DEFAULT_REGISTRATION_FEE, MAX_PARTICIPANTS, MAX_TICKETS};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::json_types::{U128, U64};
use near_sdk::{env, log, near_bindgen, AccountId, Balance, PanicOnDefault};
use interfaces::draw::{Draw, DrawCreator, DrawRegistration, DrawResult};
use payout::PayoutLock;
use tickets::TicketPool;
use utils::storage_keys::StorageKeys;

mod admin;
pub mod external;
pub mod interfaces;
pub mod payout;
mod tickets;
mod utils;
mod views;

#[cfg(test)]
mod test_utils;

pub type DrawHistory = GenericHistory<DrawResult, DrawId>;

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract {
    owner_id: AccountId,
    registration_fee: Balance,
    paused: bool,
    current_draw: Draw,
    tickets: TicketPool,
    history: DrawHistory,
    payout_lock: PayoutLock,
}

#[near_bindgen]
impl Contract {
    /// Deploys the engine with the default registration fee. The caller
    /// becomes the owner.
    #[init]
    pub fn new() -> Self {
        Self::new_with_fee(U128(DEFAULT_REGISTRATION_FEE))
    }

    #[init]
    pub fn new_with_fee(registration_fee: U128) -> Self {
        assert!(!env::state_exists(), "Already initialized");

        let owner_id = env::predecessor_account_id();
        log!("Draw engine owned by @{} with fee {}", owner_id, registration_fee.0);

        Self {
            owner_id,
            registration_fee: registration_fee.0,
            paused: false,
            current_draw: Draw::initial(),
            tickets: TicketPool::default(),
            history: DrawHistory::new(StorageKeys::DrawResults, StorageKeys::DrawResultIndex),
            payout_lock: PayoutLock::Idle,
        }
    }
}

impl Contract {
    pub(crate) fn internal_start_draw(
        &mut self,
        target_timestamp: u64,
        seed_amount: Balance,
    ) -> Result<DrawId, LotteryError> {
        if !self.can_start_draw() {
            return Err(LotteryError::InvalidState);
        }

        // a winner of an empty pool was never paid, so the id was not advanced
        let mut draw_id = self.current_draw.draw_id;
        if self.history.get_by_identifier(&draw_id).is_some() {
            draw_id += 1;
            events::new_lottery_started(draw_id);
        }

        self.tickets.reset();

        let carried_over = self.current_draw.prize_pool.0;
        self.current_draw = Draw {
            draw_id,
            end_timestamp: U64(target_timestamp),
            completed: false,
            prize_pool: U128(carried_over + seed_amount),
            winner: None,
            prize_withdrawn: false,
            started_at: env::block_timestamp_ms(),
            completed_at: 0,
        };

        events::draw_started(
            self.current_draw.draw_id,
            self.current_draw.prize_pool.0,
            target_timestamp,
        );

        Ok(self.current_draw.draw_id)
    }

    pub(crate) fn internal_register(
        &mut self,
        caller: &AccountId,
        paid_amount: Balance,
        randomness: &mut impl RandomSource,
    ) -> Result<Ticket, LotteryError> {
        if self.paused {
            return Err(LotteryError::Paused);
        }
        if !self.current_draw.is_active() {
            return Err(LotteryError::InvalidState);
        }
        if self.tickets.is_registered(caller) {
            return Err(LotteryError::AlreadyRegistered);
        }
        if paid_amount != self.registration_fee {
            return Err(LotteryError::InvalidPayment);
        }

        let ticket = self.tickets.assign(caller, randomness)?;
        self.current_draw.prize_pool = U128(self.current_draw.prize_pool.0 + paid_amount);

        events::participant_registered(self.current_draw.draw_id, caller, ticket);

        Ok(ticket)
    }

    /// Samples the whole ticket range, not only the assigned tickets, so a
    /// draw can end without a winner. Its pool then rolls over to the next
    /// draw.
    pub(crate) fn internal_execute_draw(
        &mut self,
        caller: &AccountId,
        randomness: &mut impl RandomSource,
    ) -> Result<DrawResult, LotteryError> {
        self.payout_lock.ensure_idle()?;
        self.require_owner(caller)?;

        if !self.current_draw.is_active() {
            return Err(LotteryError::AlreadyCompleted);
        }
        if self.tickets.participant_count() != MAX_PARTICIPANTS {
            return Err(LotteryError::NotEnoughParticipants);
        }

        let winning_ticket = randomness.pick(1..=MAX_TICKETS);
        let winner = self.tickets.holder_of(winning_ticket);
        log!("Draw {} winning ticket is {}", self.current_draw.draw_id, winning_ticket);

        let result = DrawResult {
            draw_id: self.current_draw.draw_id,
            winning_ticket,
            has_winner: winner.is_some(),
            winner: winner.clone(),
            completed_at: env::block_timestamp_ms(),
        };
        self.history.append(&result)?;

        self.current_draw.completed = true;
        self.current_draw.completed_at = result.completed_at;

        match winner {
            Some(winner) => {
                events::draw_result(result.draw_id, winning_ticket, &winner);
                self.current_draw.winner = Some(winner);
            }
            None => {
                self.current_draw.prize_withdrawn = true;
                self.current_draw.draw_id += 1;

                events::no_winner(result.draw_id, winning_ticket);
                events::new_lottery_started(self.current_draw.draw_id);
            }
        }

        Ok(result)
    }
}

#[near_bindgen]
impl DrawCreator for Contract {
    /// A completed draw blocks the next one only while its winner is owed
    /// a non-empty prize or a transfer is in flight.
    fn can_start_draw(&self) -> bool {
        let draw = &self.current_draw;
        let nothing_owed =
            draw.winner.is_none() || draw.prize_withdrawn || draw.prize_pool.0 == 0;

        draw.completed && nothing_owed && !self.payout_lock.is_held()
    }

    #[payable]
    #[handle_result]
    fn start_draw(&mut self, target_timestamp: U64) -> Result<DrawId, LotteryError> {
        self.internal_start_draw(target_timestamp.0, env::attached_deposit())
    }

    #[handle_result]
    fn execute_draw(&mut self) -> Result<DrawResult, LotteryError> {
        let mut randomness = BlockRandomness::from_env();
        self.internal_execute_draw(&env::predecessor_account_id(), &mut randomness)
    }
}

#[near_bindgen]
impl DrawRegistration for Contract {
    #[payable]
    #[handle_result]
    fn register(&mut self) -> Result<Ticket, LotteryError> {
        let mut randomness = BlockRandomness::from_env();
        self.internal_register(
            &env::predecessor_account_id(),
            env::attached_deposit(),
            &mut randomness,
        )
    }
}
