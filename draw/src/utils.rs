use common::errors::LotteryError;
use near_sdk::AccountId;

use crate::Contract;

pub mod storage_keys {
    use near_sdk::borsh::{self, BorshSerialize};
    use near_sdk::BorshStorageKey;

    #[derive(BorshStorageKey, BorshSerialize)]
    pub enum StorageKeys {
        AvailableTickets,
        Participants,
        TicketOfAccount,
        HolderOfTicket,
        DrawResults,
        DrawResultIndex,
    }
}

pub mod gas {
    use near_sdk::Gas;

    pub const ON_PRIZE_TRANSFER: Gas = Gas(Gas::ONE_TERA.0 * 10);
}

impl Contract {
    pub(crate) fn require_owner(&self, account_id: &AccountId) -> Result<(), LotteryError> {
        if account_id != &self.owner_id {
            return Err(LotteryError::NotOwner);
        }

        Ok(())
    }
}
