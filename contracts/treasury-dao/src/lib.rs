#![no_std]
//! Treasury DAO contract.
//!
//! A fixed set of team and community members proposes and votes on
//! disbursements from a custodial token balance. Funds reserved by active
//! proposals are locked; everything else is withdrawable by the team.
//!
//! The contract surface here only authenticates the caller, resolves its role
//! and dispatches. The rules live in the module each command delegates to.

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

mod events;
mod membership;
mod proposal;
mod storage;
mod treasury;
mod types;

pub use shared::{DaoError, ErrorKind};
pub use types::{DaoConfig, Proposal, ProposalStatus, Role};

#[contract]
pub struct TreasuryDao;

#[contractimpl]
impl TreasuryDao {
    /// Initialize the DAO. Only called once at deployment.
    pub fn initialize(
        env: Env,
        token: Address,
        team_members: Vec<Address>,
        community_members: Vec<Address>,
        to_pass: u32,
    ) -> Result<(), DaoError> {
        if storage::has_config(&env) {
            return Err(DaoError::AlreadyInitialized);
        }

        shared::validate_quorum(team_members.len(), community_members.len(), to_pass)?;
        membership::register_initial(&env, &team_members, &community_members)?;

        let config = DaoConfig {
            token: token.clone(),
            to_pass,
            team_count: team_members.len(),
            community_count: community_members.len(),
        };
        storage::set_config(&env, &config);
        storage::set_locked(&env, 0);
        storage::bump_instance(&env);

        log!(&env, "dao initialized", config.member_count(), to_pass);
        events::initialized(&env, &token, to_pass);
        Ok(())
    }

    // -------------------------------
    // Commands
    // -------------------------------

    pub fn create_proposal(
        env: Env,
        caller: Address,
        receiver: Address,
        amount: i128,
    ) -> Result<u64, DaoError> {
        caller.require_auth();
        storage::get_config(&env)?;
        storage::bump_instance(&env);

        let role = membership::require_member(&env, &caller)?;
        proposal::create(&env, &caller, role, &receiver, amount)
    }

    pub fn vote_proposal(
        env: Env,
        caller: Address,
        proposal_id: u64,
        approve: bool,
    ) -> Result<(), DaoError> {
        caller.require_auth();
        storage::get_config(&env)?;
        storage::bump_instance(&env);

        let role = membership::require_member(&env, &caller)?;
        proposal::vote(&env, &caller, role, proposal_id, approve)
    }

    pub fn delete_proposal(env: Env, caller: Address, proposal_id: u64) -> Result<(), DaoError> {
        caller.require_auth();
        storage::get_config(&env)?;
        storage::bump_instance(&env);

        proposal::delete(&env, &caller, proposal_id)
    }

    pub fn withdraw(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), DaoError> {
        caller.require_auth();
        storage::get_config(&env)?;
        storage::bump_instance(&env);

        membership::require_team(&env, &caller)?;
        treasury::withdraw(&env, &to, amount)
    }

    pub fn add_community_member(
        env: Env,
        caller: Address,
        member: Address,
    ) -> Result<(), DaoError> {
        caller.require_auth();
        storage::get_config(&env)?;
        storage::bump_instance(&env);

        membership::require_team(&env, &caller)?;
        membership::add_community_member(&env, &member)
    }

    /// Fund the treasury from `from`.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), DaoError> {
        from.require_auth();
        storage::get_config(&env)?;
        storage::bump_instance(&env);

        treasury::deposit(&env, &from, amount)
    }

    // -------------------------------
    // Read-only Queries
    // -------------------------------

    pub fn token(env: Env) -> Result<Address, DaoError> {
        Ok(storage::get_config(&env)?.token)
    }

    pub fn members(env: Env) -> Vec<Address> {
        storage::get_members(&env)
    }

    pub fn member_count(env: Env) -> Result<u32, DaoError> {
        Ok(storage::get_config(&env)?.member_count())
    }

    pub fn team_count(env: Env) -> Result<u32, DaoError> {
        Ok(storage::get_config(&env)?.team_count)
    }

    pub fn community_count(env: Env) -> Result<u32, DaoError> {
        Ok(storage::get_config(&env)?.community_count)
    }

    pub fn is_member(env: Env, id: Address) -> bool {
        membership::is_member(&env, &id)
    }

    pub fn is_team_member(env: Env, id: Address) -> bool {
        membership::is_team(&env, &id)
    }

    pub fn is_community_member(env: Env, id: Address) -> bool {
        membership::is_community(&env, &id)
    }

    pub fn to_pass(env: Env) -> Result<u32, DaoError> {
        Ok(storage::get_config(&env)?.to_pass)
    }

    pub fn locked(env: Env) -> i128 {
        storage::get_locked(&env)
    }

    pub fn withdrawable(env: Env) -> Result<i128, DaoError> {
        treasury::withdrawable(&env)
    }

    pub fn proposal_count(env: Env) -> u64 {
        storage::get_proposal_count(&env)
    }

    /// Active proposal by id; `None` once executed or deleted.
    pub fn proposal(env: Env, proposal_id: u64) -> Option<Proposal> {
        proposal::get(&env, proposal_id)
    }

    pub fn proposal_status(env: Env, proposal_id: u64) -> Result<ProposalStatus, DaoError> {
        proposal::status(&env, proposal_id)
    }

    pub fn has_voted(env: Env, member: Address, proposal_id: u64) -> bool {
        storage::has_voted(&env, proposal_id, &member)
    }

    pub fn is_in_voting_phase(env: Env, proposal_id: u64) -> bool {
        proposal::is_in_voting_phase(&env, proposal_id)
    }
}
