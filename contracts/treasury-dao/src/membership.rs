use soroban_sdk::{log, Address, Env, Vec};

use shared::DaoError;

use crate::events;
use crate::storage;
use crate::types::Role;

pub fn is_member(env: &Env, id: &Address) -> bool {
    storage::get_role(env, id).is_some()
}

pub fn is_team(env: &Env, id: &Address) -> bool {
    storage::get_role(env, id) == Some(Role::Team)
}

pub fn is_community(env: &Env, id: &Address) -> bool {
    storage::get_role(env, id) == Some(Role::Community)
}

/// Role of `caller`, or `NotProposer` for outsiders.
pub fn require_member(env: &Env, caller: &Address) -> Result<Role, DaoError> {
    match storage::get_role(env, caller) {
        Some(role) => Ok(role),
        None => {
            log!(env, "rejecting non-member caller", caller);
            Err(DaoError::NotProposer)
        }
    }
}

pub fn require_team(env: &Env, caller: &Address) -> Result<(), DaoError> {
    if !is_team(env, caller) {
        log!(env, "rejecting non-team caller", caller);
        return Err(DaoError::NotTeamMember);
    }
    Ok(())
}

/// Store the initial member sets. Fails on any address that already holds a
/// role, which covers duplicates within a list and overlap between lists.
pub fn register_initial(
    env: &Env,
    team: &Vec<Address>,
    community: &Vec<Address>,
) -> Result<(), DaoError> {
    for (members, role) in [(team, Role::Team), (community, Role::Community)] {
        for member in members.iter() {
            if is_member(env, &member) {
                log!(env, "duplicate initial member", member);
                return Err(DaoError::DuplicateMember);
            }
            storage::set_role(env, &member, role);
            storage::push_member(env, &member);
        }
    }
    Ok(())
}

/// Admit a new community member and raise the quorum threshold by one.
///
/// The caller must already be authorized as a team member.
pub fn add_community_member(env: &Env, member: &Address) -> Result<(), DaoError> {
    if is_member(env, member) {
        log!(env, "address is already a member", member);
        return Err(DaoError::AlreadyMember);
    }

    let mut config = storage::get_config(env)?;
    config.community_count = config
        .community_count
        .checked_add(1)
        .ok_or(DaoError::Overflow)?;
    config.to_pass = config.to_pass.checked_add(1).ok_or(DaoError::Overflow)?;

    storage::set_role(env, member, Role::Community);
    storage::push_member(env, member);
    storage::set_config(env, &config);

    events::member_added(env, member, config.to_pass);
    Ok(())
}
