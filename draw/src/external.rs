use near_sdk::ext_contract;
use near_sdk::json_types::U128;

// Callback
#[ext_contract(ext_self)]
pub trait ExtSelf {
    fn on_prize_transfer(&mut self) -> U128;
}
