use std::collections::VecDeque;
use std::ops::RangeInclusive;

use common::errors::LotteryError;
use common::random::RandomSource;
use common::types::{DrawId, Ticket};
use near_sdk::json_types::{U128, U64};
use near_sdk::serde_json::{self, Value};
use near_sdk::test_utils::{get_logs, VMContextBuilder};
use near_sdk::{testing_env, AccountId, Balance};

use crate::interfaces::draw::{DrawCreator, DrawRegistration, DrawResult};
use crate::Contract;

pub const TARGET_TIMESTAMP: u64 = 1_700_000_000_000;

pub fn engine() -> AccountId {
    "engine".parse().unwrap()
}
pub fn owner() -> AccountId {
    "owner".parse().unwrap()
}
pub fn alice() -> AccountId {
    "alice".parse().unwrap()
}

pub fn a() -> AccountId {
    "aa".parse().unwrap()
}
pub fn b() -> AccountId {
    "bb".parse().unwrap()
}
pub fn c() -> AccountId {
    "cc".parse().unwrap()
}
pub fn d() -> AccountId {
    "dd".parse().unwrap()
}
pub fn e() -> AccountId {
    "ee".parse().unwrap()
}

/// Registration order used by `Emulator::fill_with`.
pub fn participants() -> Vec<AccountId> {
    vec![a(), b(), c(), d(), e()]
}

pub fn ntoy(near_amount: Balance) -> Balance {
    near_amount * 10u128.pow(24)
}

/// Checks the name of the most recent NEP-297 event.
pub fn last_event_is(name: &str) -> bool {
    let logs = get_logs();
    let event = match logs.iter().rev().find_map(|log| log.strip_prefix("EVENT_JSON:")) {
        Some(event) => event,
        None => return false,
    };
    let value: Value = serde_json::from_str(event).unwrap();
    value["event"] == name
}

/// Returns the given values in order, clamped into the requested range.
/// Once exhausted it keeps returning the low end of the range.
pub struct ScriptedRandomness {
    values: VecDeque<u32>,
}

impl ScriptedRandomness {
    pub fn new(values: &[u32]) -> Self {
        Self { values: values.iter().copied().collect() }
    }
}

impl RandomSource for ScriptedRandomness {
    fn pick(&mut self, range: RangeInclusive<u32>) -> u32 {
        let value = self.values.pop_front().unwrap_or(*range.start());
        value.clamp(*range.start(), *range.end())
    }
}

pub struct Emulator {
    pub contract: Contract,
    pub block_timestamp: u64,
    pub random_seed: [u8; 32],
}

impl Emulator {
    pub fn new() -> Self {
        Self::init(Contract::new)
    }

    pub fn with_fee(fee: Balance) -> Self {
        Self::init(|| Contract::new_with_fee(U128(fee)))
    }

    fn init(deploy: impl FnOnce() -> Contract) -> Self {
        let context = VMContextBuilder::new()
            .current_account_id(engine())
            .predecessor_account_id(owner())
            .account_balance(ntoy(100))
            .build();
        testing_env!(context);

        Emulator {
            contract: deploy(),
            block_timestamp: 0,
            random_seed: [0; 32],
        }
    }

    pub fn update_context(&mut self, predecessor: AccountId, deposit: Balance) {
        let context = VMContextBuilder::new()
            .current_account_id(engine())
            .predecessor_account_id(predecessor.clone())
            .signer_account_id(predecessor)
            .account_balance(ntoy(100))
            .attached_deposit(deposit)
            .block_timestamp(self.block_timestamp)
            .random_seed(self.random_seed)
            .build();
        testing_env!(context);
    }

    /// Context of the engine calling itself, as in a promise callback.
    pub fn as_engine(&mut self) {
        self.update_context(engine(), 0);
    }

    pub fn skip_time(&mut self, ms: u64) {
        self.block_timestamp += ms * 1_000_000;
    }

    pub fn start_draw(&mut self, deposit: Balance) -> Result<DrawId, LotteryError> {
        self.update_context(owner(), deposit);
        self.contract.start_draw(U64(TARGET_TIMESTAMP))
    }

    /// Registers through the public method, paying the current fee.
    pub fn register(&mut self, account_id: &AccountId) -> Result<Ticket, LotteryError> {
        let fee = self.contract.registration_fee;
        self.update_context(account_id.clone(), fee);
        self.contract.register()
    }

    pub fn register_with(
        &mut self,
        account_id: &AccountId,
        deposit: Balance,
        picks: &[u32],
    ) -> Result<Ticket, LotteryError> {
        self.update_context(account_id.clone(), deposit);
        let mut randomness = ScriptedRandomness::new(picks);
        self.contract.internal_register(account_id, deposit, &mut randomness)
    }

    /// Registers the leading `participants()`, one scripted index each.
    pub fn fill_with(&mut self, picks: &[u32]) {
        let fee = self.contract.registration_fee;
        for (account_id, pick) in participants().iter().zip(picks) {
            self.register_with(account_id, fee, &[*pick]).unwrap();
        }
    }

    pub fn execute_with(&mut self, picks: &[u32]) -> Result<DrawResult, LotteryError> {
        self.update_context(owner(), 0);
        let mut randomness = ScriptedRandomness::new(picks);
        self.contract.internal_execute_draw(&owner(), &mut randomness)
    }
}
