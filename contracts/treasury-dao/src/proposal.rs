//! Proposal lifecycle.
//!
//! A proposal is created in Submission, accepts votes once
//! `VOTING_DELAY_SECONDS` have passed, and stops accepting them after
//! `PROPOSAL_EXPIRY_SECONDS`. It leaves the active state exactly once, either
//! executed or deleted. Phases are evaluated lazily against the ledger
//! timestamp of each call.

use soroban_sdk::{log, Address, Env};

use shared::{
    in_voting_window, is_expired, validate_positive_amount, validate_receiver,
    validate_sufficient_funds, DaoError,
};

use crate::events;
use crate::storage;
use crate::treasury;
use crate::types::{Proposal, ProposalRecord, ProposalStatus, Role, VoteDecision};

fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Active proposal by id; `None` once terminal or if it never existed.
pub fn get(env: &Env, id: u64) -> Option<Proposal> {
    match storage::get_proposal(env, id) {
        Some(ProposalRecord::Active(proposal)) => Some(proposal),
        _ => None,
    }
}

pub fn status(env: &Env, id: u64) -> Result<ProposalStatus, DaoError> {
    let record = storage::get_proposal(env, id).ok_or(DaoError::ProposalNotFound)?;
    Ok(match record {
        ProposalRecord::Executed => ProposalStatus::Executed,
        ProposalRecord::Deleted => ProposalStatus::Deleted,
        ProposalRecord::Active(proposal) => {
            let current = now(env);
            if in_voting_window(proposal.created_at, current) {
                ProposalStatus::Voting
            } else if is_expired(proposal.created_at, current) {
                ProposalStatus::Expired
            } else {
                ProposalStatus::Submission
            }
        }
    })
}

pub fn is_in_voting_phase(env: &Env, id: u64) -> bool {
    get(env, id).is_some_and(|proposal| in_voting_window(proposal.created_at, now(env)))
}

/// Create a proposal and lock its amount. The creator's yes-vote is counted.
pub fn create(
    env: &Env,
    creator: &Address,
    role: Role,
    receiver: &Address,
    amount: i128,
) -> Result<u64, DaoError> {
    validate_positive_amount(amount)?;
    validate_receiver(receiver, &env.current_contract_address())?;
    validate_sufficient_funds(
        treasury::withdrawable(env)?,
        amount,
        DaoError::InsufficientDaoFunds,
    )?;

    let id = storage::next_proposal_id(env)?;
    let proposal = Proposal {
        id,
        proposer: creator.clone(),
        receiver: receiver.clone(),
        amount,
        created_at: now(env),
        approvals: 1,
        team_approval: role == Role::Team,
    };

    storage::set_proposal(env, id, &ProposalRecord::Active(proposal));
    storage::set_voted(env, id, creator);
    treasury::reserve(env, amount)?;

    events::new_proposal(env, id, receiver, amount);
    Ok(id)
}

/// Cast a vote. Approvals may execute the proposal; a team rejection vetoes it.
pub fn vote(
    env: &Env,
    voter: &Address,
    role: Role,
    id: u64,
    approve: bool,
) -> Result<(), DaoError> {
    let mut proposal = match get(env, id) {
        Some(proposal) if in_voting_window(proposal.created_at, now(env)) => proposal,
        _ => {
            log!(env, "proposal not in voting phase", id);
            return Err(DaoError::NotInVotingPhase);
        }
    };

    if storage::has_voted(env, id, voter) {
        log!(env, "member already voted", voter, id);
        return Err(DaoError::AlreadyVoted);
    }
    storage::set_voted(env, id, voter);

    match VoteDecision::resolve(approve, role) {
        VoteDecision::Veto => {
            log!(env, "proposal vetoed", id, voter);
            terminate(env, &proposal, ProposalRecord::Deleted)?;
            events::delete_proposal(env, id);
        }
        VoteDecision::Reject => {
            events::vote_proposal(env, id, voter, false);
        }
        VoteDecision::Approve => {
            proposal.approvals = proposal
                .approvals
                .checked_add(1)
                .ok_or(DaoError::Overflow)?;
            if role == Role::Team {
                proposal.team_approval = true;
            }
            events::vote_proposal(env, id, voter, true);

            let to_pass = storage::get_config(env)?.to_pass;
            if proposal.approvals >= to_pass && proposal.team_approval {
                execute(env, &proposal)?;
            } else {
                storage::set_proposal(env, id, &ProposalRecord::Active(proposal));
            }
        }
    }
    Ok(())
}

/// Delete an expired proposal. Only its creator may do this.
pub fn delete(env: &Env, caller: &Address, id: u64) -> Result<(), DaoError> {
    let proposal = match get(env, id) {
        Some(proposal) if proposal.proposer == *caller => proposal,
        _ => {
            log!(env, "caller is not the proposer", caller, id);
            return Err(DaoError::NotProposer);
        }
    };

    if !is_expired(proposal.created_at, now(env)) {
        log!(env, "proposal not expired", id);
        return Err(DaoError::NotExpired);
    }

    terminate(env, &proposal, ProposalRecord::Deleted)?;
    events::delete_proposal(env, id);
    Ok(())
}

/// Terminal state is stored before the external transfer is issued.
fn execute(env: &Env, proposal: &Proposal) -> Result<(), DaoError> {
    terminate(env, proposal, ProposalRecord::Executed)?;
    treasury::transfer_out(env, &proposal.receiver, proposal.amount)?;

    log!(env, "proposal executed", proposal.id, proposal.amount);
    events::execute_proposal(env, proposal.id, &proposal.receiver, proposal.amount);
    Ok(())
}

fn terminate(env: &Env, proposal: &Proposal, record: ProposalRecord) -> Result<(), DaoError> {
    storage::set_proposal(env, proposal.id, &record);
    treasury::release(env, proposal.amount)
}
