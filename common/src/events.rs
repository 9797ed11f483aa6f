use near_sdk::json_types::{U128, U64};
use near_sdk::serde_json::json;
use near_sdk::{log, AccountId, Balance};
use serde::Serialize;

use crate::types::{DrawId, Ticket};

const EVENT_STANDARD: &str = "draw-engine";
const EVENT_VERSION: &str = "1.0.0";

#[derive(Serialize)]
struct DrawStarted {
    draw_id: DrawId,
    prize: U128,
    target_timestamp: U64,
}

#[derive(Serialize)]
struct ParticipantRegistered<'a> {
    draw_id: DrawId,
    account_id: &'a AccountId,
    ticket: Ticket,
}

#[derive(Serialize)]
struct DrawResultEvent<'a> {
    draw_id: DrawId,
    winning_ticket: Ticket,
    winner: &'a AccountId,
}

#[derive(Serialize)]
struct NoWinner {
    draw_id: DrawId,
    winning_ticket: Ticket,
}

#[derive(Serialize)]
struct Payout<'a> {
    draw_id: DrawId,
    winner: &'a AccountId,
    amount: U128,
}

#[derive(Serialize)]
struct DrawIdOnly {
    draw_id: DrawId,
}

#[derive(Serialize)]
struct AccountOnly<'a> {
    account_id: &'a AccountId,
}

#[derive(Serialize)]
struct FeeUpdated {
    old_fee: U128,
    new_fee: U128,
}

fn log_event<T: Serialize>(event: &str, data: T) {
    let event = json!({
        "standard": EVENT_STANDARD,
        "version": EVENT_VERSION,
        "event": event,
        "data": [data]
    });

    log!("EVENT_JSON:{}", event.to_string());
}

pub fn draw_started(draw_id: DrawId, prize: Balance, target_timestamp: u64) {
    log_event(
        "draw_started",
        DrawStarted {
            draw_id,
            prize: U128(prize),
            target_timestamp: U64(target_timestamp),
        },
    );
}

pub fn participant_registered(draw_id: DrawId, account_id: &AccountId, ticket: Ticket) {
    log_event(
        "participant_registered",
        ParticipantRegistered { draw_id, account_id, ticket },
    );
}

pub fn draw_result(draw_id: DrawId, winning_ticket: Ticket, winner: &AccountId) {
    log_event(
        "draw_result",
        DrawResultEvent { draw_id, winning_ticket, winner },
    );
}

pub fn no_winner(draw_id: DrawId, winning_ticket: Ticket) {
    log_event("no_winner", NoWinner { draw_id, winning_ticket });
}

pub fn prize_withdrawn(draw_id: DrawId, winner: &AccountId, amount: Balance) {
    log_event(
        "prize_withdrawn",
        Payout { draw_id, winner, amount: U128(amount) },
    );
}

pub fn prize_transfer_failed(draw_id: DrawId, winner: &AccountId, amount: Balance) {
    log_event(
        "prize_transfer_failed",
        Payout { draw_id, winner, amount: U128(amount) },
    );
}

pub fn new_lottery_started(draw_id: DrawId) {
    log_event("new_lottery_started", DrawIdOnly { draw_id });
}

pub fn paused(account_id: &AccountId) {
    log_event("paused", AccountOnly { account_id });
}

pub fn unpaused(account_id: &AccountId) {
    log_event("unpaused", AccountOnly { account_id });
}

pub fn fee_updated(old_fee: Balance, new_fee: Balance) {
    log_event(
        "fee_updated",
        FeeUpdated { old_fee: U128(old_fee), new_fee: U128(new_fee) },
    );
}
