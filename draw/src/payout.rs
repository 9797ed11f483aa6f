use common::errors::LotteryError;
use common::events;
use common::types::DrawId;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::json_types::U128;
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{env, log, near_bindgen, AccountId, Promise, PromiseError};

use crate::external::ext_self;
use crate::interfaces::draw::PrizeClaimer;
use crate::utils::gas;
use crate::{Contract, ContractExt};

/// A prize that left the engine's books but whose transfer has not resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(BorshDeserialize, BorshSerialize)]
#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct PendingPayout {
    pub draw_id: DrawId,
    pub winner: AccountId,
    pub amount: U128,
}

/// Guards `execute_draw` and `claim_prize`. It is held for the whole window
/// between handing the prize to the winner and learning whether the transfer
/// went through, and remembers what to restore if it did not.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(BorshDeserialize, BorshSerialize)]
pub enum PayoutLock {
    Idle,
    Transferring(PendingPayout),
}

impl PayoutLock {
    pub fn ensure_idle(&self) -> Result<(), LotteryError> {
        match self {
            PayoutLock::Idle => Ok(()),
            PayoutLock::Transferring(_) => Err(LotteryError::ReentrantCall),
        }
    }

    pub fn hold(&mut self, payout: PendingPayout) -> Result<(), LotteryError> {
        self.ensure_idle()?;
        *self = PayoutLock::Transferring(payout);
        Ok(())
    }

    pub fn release(&mut self) -> Option<PendingPayout> {
        match std::mem::replace(self, PayoutLock::Idle) {
            PayoutLock::Transferring(payout) => Some(payout),
            PayoutLock::Idle => None,
        }
    }

    pub fn is_held(&self) -> bool {
        matches!(self, PayoutLock::Transferring(_))
    }

    pub fn pending(&self) -> Option<&PendingPayout> {
        match self {
            PayoutLock::Transferring(payout) => Some(payout),
            PayoutLock::Idle => None,
        }
    }
}

impl Contract {
    /// Settles the books for a claim and takes the payout lock. Nothing here
    /// touches the winner's account; the transfer is scheduled by the caller.
    pub(crate) fn internal_claim_prize(
        &mut self,
        caller: &AccountId,
    ) -> Result<PendingPayout, LotteryError> {
        self.payout_lock.ensure_idle()?;

        let draw = &self.current_draw;
        if !draw.completed {
            return Err(LotteryError::DrawNotCompleted);
        }
        if draw.winner.as_ref() != Some(caller) {
            return Err(LotteryError::NotWinner);
        }
        if draw.prize_withdrawn {
            return Err(LotteryError::AlreadyWithdrawn);
        }
        if draw.prize_pool.0 == 0 {
            return Err(LotteryError::NothingToClaim);
        }

        let payout = PendingPayout {
            draw_id: draw.draw_id,
            winner: caller.clone(),
            amount: draw.prize_pool,
        };
        self.payout_lock.hold(payout.clone())?;

        self.current_draw.prize_pool = U128(0);
        self.current_draw.prize_withdrawn = true;
        self.current_draw.draw_id += 1;

        events::prize_withdrawn(payout.draw_id, &payout.winner, payout.amount.0);
        events::new_lottery_started(self.current_draw.draw_id);

        Ok(payout)
    }

    /// Releases the payout lock. A failed transfer puts the prize back and
    /// reopens the claim. Never panics, otherwise the restore would be lost.
    pub(crate) fn internal_resolve_payout(&mut self, transferred: bool) -> U128 {
        let payout = match self.payout_lock.release() {
            Some(payout) => payout,
            None => {
                log!("No prize transfer in flight");
                return U128(0);
            }
        };

        if transferred {
            return payout.amount;
        }

        log!(
            "{}: restoring {} for draw {}",
            LotteryError::TransferFailed,
            payout.amount.0,
            payout.draw_id
        );
        self.current_draw.draw_id = payout.draw_id;
        self.current_draw.prize_pool = U128(self.current_draw.prize_pool.0 + payout.amount.0);
        self.current_draw.prize_withdrawn = false;
        events::prize_transfer_failed(payout.draw_id, &payout.winner, payout.amount.0);

        U128(0)
    }
}

#[near_bindgen]
impl PrizeClaimer for Contract {
    #[handle_result]
    fn claim_prize(&mut self) -> Result<Promise, LotteryError> {
        let payout = self.internal_claim_prize(&env::predecessor_account_id())?;

        Ok(Promise::new(payout.winner.clone())
            .transfer(payout.amount.0)
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(gas::ON_PRIZE_TRANSFER)
                    .on_prize_transfer(),
            ))
    }
}

#[near_bindgen]
impl Contract {
    #[private]
    pub fn on_prize_transfer(
        &mut self,
        #[callback_result] transfer_result: Result<(), PromiseError>,
    ) -> U128 {
        self.internal_resolve_payout(transfer_result.is_ok())
    }
}
