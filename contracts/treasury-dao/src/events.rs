//! Domain events published for external observers and indexers.
//!
//! The first topic is always the event name; the proposal id, when there is
//! one, is the second topic so indexers can filter on it.

use soroban_sdk::{symbol_short, Address, Env};

pub fn initialized(env: &Env, token: &Address, to_pass: u32) {
    env.events()
        .publish((symbol_short!("init"),), (token.clone(), to_pass));
}

pub fn new_proposal(env: &Env, proposal_number: u64, receiver: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("new_prop"), proposal_number),
        (receiver.clone(), amount),
    );
}

pub fn vote_proposal(env: &Env, proposal: u64, member: &Address, vote: bool) {
    env.events()
        .publish((symbol_short!("vote"), proposal), (member.clone(), vote));
}

pub fn execute_proposal(env: &Env, proposal: u64, receiver: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("execute"), proposal),
        (receiver.clone(), amount),
    );
}

pub fn delete_proposal(env: &Env, proposal_number: u64) {
    env.events()
        .publish((symbol_short!("delete"), proposal_number), ());
}

pub fn member_added(env: &Env, member: &Address, to_pass: u32) {
    env.events()
        .publish((symbol_short!("member"), member.clone()), to_pass);
}

pub fn withdrawn(env: &Env, to: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("withdraw"), to.clone()), amount);
}

pub fn deposited(env: &Env, from: &Address, amount: i128) {
    env.events()
        .publish((symbol_short!("deposit"), from.clone()), amount);
}
