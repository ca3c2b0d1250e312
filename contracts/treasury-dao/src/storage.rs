use soroban_sdk::{Address, Env, Vec};

use shared::constants::{BUMP_AMOUNT, LIFETIME_THRESHOLD};
use shared::DaoError;

use crate::types::{DaoConfig, DataKey, ProposalRecord, Role};

// ── Instance ─────────────────────────────────────────────────────────────────

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<DaoConfig, DaoError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(DaoError::NotInitialized)
}

pub fn set_config(env: &Env, config: &DaoConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_locked(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(0)
}

pub fn set_locked(env: &Env, locked: i128) {
    env.storage().instance().set(&DataKey::Locked, &locked);
}

pub fn get_proposal_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProposalCount)
        .unwrap_or(0)
}

/// Allocate the next proposal id. Ids start at 1 and are never reused.
pub fn next_proposal_id(env: &Env) -> Result<u64, DaoError> {
    let id = get_proposal_count(env)
        .checked_add(1)
        .ok_or(DaoError::Overflow)?;
    env.storage().instance().set(&DataKey::ProposalCount, &id);
    Ok(id)
}

pub fn get_members(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&DataKey::Members)
        .unwrap_or(Vec::new(env))
}

pub fn push_member(env: &Env, member: &Address) {
    let mut members = get_members(env);
    members.push_back(member.clone());
    env.storage().instance().set(&DataKey::Members, &members);
}

// ── Members ──────────────────────────────────────────────────────────────────

// Roles share the instance TTL, so a member who stays idle is kept alive by
// any other member's command.

pub fn get_role(env: &Env, member: &Address) -> Option<Role> {
    env.storage()
        .instance()
        .get(&DataKey::Member(member.clone()))
}

pub fn set_role(env: &Env, member: &Address, role: Role) {
    env.storage()
        .instance()
        .set(&DataKey::Member(member.clone()), &role);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal(env: &Env, id: u64) -> Option<ProposalRecord> {
    env.storage().persistent().get(&DataKey::Proposal(id))
}

pub fn set_proposal(env: &Env, id: u64, record: &ProposalRecord) {
    let key = DataKey::Proposal(id);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
}

// ── Votes ────────────────────────────────────────────────────────────────────

pub fn has_voted(env: &Env, id: u64, member: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Voted(id, member.clone()))
}

pub fn set_voted(env: &Env, id: u64, member: &Address) {
    let key = DataKey::Voted(id, member.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, LIFETIME_THRESHOLD, BUMP_AMOUNT);
}
