use common::errors::LotteryError;
use common::events;
use near_sdk::json_types::U128;
use near_sdk::{env, near_bindgen, AccountId};

use crate::interfaces::admin::Administration;
use crate::{Contract, ContractExt};

impl Contract {
    pub(crate) fn internal_set_paused(
        &mut self,
        caller: &AccountId,
        paused: bool,
    ) -> Result<(), LotteryError> {
        self.require_owner(caller)?;
        if self.paused == paused {
            return Err(LotteryError::InvalidState);
        }

        self.paused = paused;
        if paused {
            events::paused(caller);
        } else {
            events::unpaused(caller);
        }

        Ok(())
    }

    /// The fee can only change between draws, so every participant of a draw
    /// pays the same amount.
    pub(crate) fn internal_set_fee(
        &mut self,
        caller: &AccountId,
        new_fee: u128,
    ) -> Result<(), LotteryError> {
        self.require_owner(caller)?;
        if self.current_draw.is_active() {
            return Err(LotteryError::InvalidState);
        }

        let old_fee = std::mem::replace(&mut self.registration_fee, new_fee);
        events::fee_updated(old_fee, new_fee);

        Ok(())
    }
}

#[near_bindgen]
impl Administration for Contract {
    #[handle_result]
    fn pause(&mut self) -> Result<(), LotteryError> {
        self.internal_set_paused(&env::predecessor_account_id(), true)
    }

    #[handle_result]
    fn unpause(&mut self) -> Result<(), LotteryError> {
        self.internal_set_paused(&env::predecessor_account_id(), false)
    }

    #[handle_result]
    fn set_fee(&mut self, new_fee: U128) -> Result<(), LotteryError> {
        self.internal_set_fee(&env::predecessor_account_id(), new_fee.0)
    }
}
