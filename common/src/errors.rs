use near_sdk::FunctionError;
use thiserror::Error;

/// Every way an engine operation can be rejected. A contract call that
/// returns one of these panics with its message, so the runtime rolls back
/// the call and refunds any attached deposit.
#[derive(Error, FunctionError, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotteryError {
    #[error("Registration is paused")]
    Paused,
    #[error("Operation is not allowed in the current lottery state")]
    InvalidState,
    #[error("Account is already registered in this draw")]
    AlreadyRegistered,
    #[error("Attached deposit must be exactly the registration fee")]
    InvalidPayment,
    #[error("No more participants can register in this draw")]
    CapacityReached,
    #[error("Only the owner can call this method")]
    NotOwner,
    #[error("Draw needs the full number of participants")]
    NotEnoughParticipants,
    #[error("Draw is already completed")]
    AlreadyCompleted,
    #[error("Draw is not completed yet")]
    DrawNotCompleted,
    #[error("Only the winner can claim the prize")]
    NotWinner,
    #[error("Prize pool is empty")]
    NothingToClaim,
    #[error("Prize was already withdrawn")]
    AlreadyWithdrawn,
    #[error("Prize transfer to the winner failed")]
    TransferFailed,
    #[error("Draw result not found")]
    NotFound,
    #[error("A prize transfer is still in flight")]
    ReentrantCall,
}
