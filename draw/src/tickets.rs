use common::errors::LotteryError;
use common::random::RandomSource;
use common::types::{Ticket, MAX_PARTICIPANTS, MAX_TICKETS};
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LookupMap, Vector};
use near_sdk::AccountId;

use crate::utils::storage_keys::StorageKeys;

/// Ticket numbers of the current draw, split into the ones still available
/// and the ones assigned to registered accounts.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct TicketPool {
    available: Vector<Ticket>,
    participants: Vector<AccountId>,
    ticket_of: LookupMap<AccountId, Ticket>,
    holder_of: LookupMap<Ticket, AccountId>,
}

impl Default for TicketPool {
    fn default() -> Self {
        Self {
            available: Vector::new(StorageKeys::AvailableTickets),
            participants: Vector::new(StorageKeys::Participants),
            ticket_of: LookupMap::new(StorageKeys::TicketOfAccount),
            holder_of: LookupMap::new(StorageKeys::HolderOfTicket),
        }
    }
}

impl TicketPool {
    /// Forgets every assignment of the previous draw and makes the whole
    /// ticket range available again.
    pub fn reset(&mut self) {
        for account_id in self.participants.iter() {
            if let Some(ticket) = self.ticket_of.remove(&account_id) {
                self.holder_of.remove(&ticket);
            }
        }
        self.participants.clear();

        self.available.clear();
        for ticket in 1..=MAX_TICKETS {
            self.available.push(&ticket);
        }
    }

    /// Hands one of the available tickets, chosen uniformly, to `account_id`.
    pub fn assign(
        &mut self,
        account_id: &AccountId,
        randomness: &mut impl RandomSource,
    ) -> Result<Ticket, LotteryError> {
        if self.is_registered(account_id) {
            return Err(LotteryError::AlreadyRegistered);
        }
        if self.is_full() || self.available.is_empty() {
            return Err(LotteryError::CapacityReached);
        }

        let last_index = (self.available.len() - 1) as u32;
        let index = randomness.pick(0..=last_index);
        let ticket = self.available.swap_remove(u64::from(index));

        self.ticket_of.insert(account_id, &ticket);
        self.holder_of.insert(&ticket, account_id);
        self.participants.push(account_id);

        Ok(ticket)
    }

    pub fn is_full(&self) -> bool {
        self.participant_count() >= MAX_PARTICIPANTS
    }

    pub fn is_registered(&self, account_id: &AccountId) -> bool {
        self.ticket_of.contains_key(account_id)
    }

    pub fn participant_count(&self) -> u32 {
        self.participants.len() as u32
    }

    pub fn available_count(&self) -> u32 {
        self.available.len() as u32
    }

    pub fn ticket_of(&self, account_id: &AccountId) -> Option<Ticket> {
        self.ticket_of.get(account_id)
    }

    pub fn holder_of(&self, ticket: Ticket) -> Option<AccountId> {
        self.holder_of.get(&ticket)
    }

    pub fn participants(&self) -> Vec<AccountId> {
        self.participants.to_vec()
    }

    pub fn available(&self) -> Vec<Ticket> {
        self.available.to_vec()
    }
}
