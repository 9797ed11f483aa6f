use borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LookupMap, Vector};
use near_sdk::IntoStorageKey;

use crate::errors::LotteryError;

pub trait Identifier<T> {
    fn id(&self) -> T;
}

pub trait AppendOnlyLog<TID, T> {
    /// adds element to the end of the log, rejecting a repeated identifier
    fn append(&mut self, element: &T) -> Result<u64, LotteryError>;
    fn len(&self) -> u64;
    fn get_by_index(&self, idx: u64) -> Option<T>;
    fn get_by_identifier(&self, id: &TID) -> Option<T>;
    fn last(&self) -> Option<T>;
    /// identifiers in insertion order
    fn identifiers(&self, from_index: u64, limit: u64) -> Vec<TID>;
}

/// Insertion-ordered record log with lookup by identifier. Entries are never
/// replaced or evicted.
#[derive(BorshSerialize, BorshDeserialize)]
pub struct GenericHistory<T, TID> {
    entries: Vector<T>,
    id_idx_map: LookupMap<TID, u64>,
}

impl<T, TID> GenericHistory<T, TID>
where
    T: BorshSerialize + BorshDeserialize + Identifier<TID>,
    TID: BorshSerialize + BorshDeserialize,
{
    pub fn new<S: IntoStorageKey>(entries_prefix: S, index_prefix: S) -> Self {
        Self {
            entries: Vector::new(entries_prefix),
            id_idx_map: LookupMap::new(index_prefix),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T, TID> AppendOnlyLog<TID, T> for GenericHistory<T, TID>
where
    T: BorshSerialize + BorshDeserialize + Identifier<TID>,
    TID: BorshSerialize + BorshDeserialize,
{
    fn append(&mut self, element: &T) -> Result<u64, LotteryError> {
        let id = element.id();
        if self.id_idx_map.contains_key(&id) {
            return Err(LotteryError::InvalidState);
        }

        let idx = self.entries.len();
        self.entries.push(element);
        self.id_idx_map.insert(&id, &idx);

        Ok(idx)
    }

    fn len(&self) -> u64 {
        self.entries.len()
    }

    fn get_by_index(&self, idx: u64) -> Option<T> {
        self.entries.get(idx)
    }

    fn get_by_identifier(&self, id: &TID) -> Option<T> {
        self.id_idx_map
            .get(id)
            .and_then(|idx| self.get_by_index(idx))
    }

    fn last(&self) -> Option<T> {
        match self.entries.len() {
            0 => None,
            len => self.get_by_index(len - 1),
        }
    }

    fn identifiers(&self, from_index: u64, limit: u64) -> Vec<TID> {
        self.entries
            .iter()
            .skip(from_index as usize)
            .take(limit as usize)
            .map(|element| element.id())
            .collect()
    }
}
