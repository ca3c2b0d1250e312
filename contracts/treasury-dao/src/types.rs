use soroban_sdk::{contracttype, Address};

/// Member role. The two role sets are disjoint.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Team,
    Community,
}

/// Deployment parameters and membership counters
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DaoConfig {
    pub token: Address,
    pub to_pass: u32,
    pub team_count: u32,
    pub community_count: u32,
}

impl DaoConfig {
    pub fn member_count(&self) -> u32 {
        self.team_count.saturating_add(self.community_count)
    }
}

/// A disbursement proposal while it is still active
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Address,
    pub receiver: Address,
    pub amount: i128,
    pub created_at: u64,
    pub approvals: u32,
    pub team_approval: bool,
}

/// Stored form of a proposal id. Terminal variants keep the id taken but
/// hold no funds-bearing fields.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProposalRecord {
    Active(Proposal),
    Executed,
    Deleted,
}

/// Lifecycle phase of a proposal, evaluated against the ledger clock
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Submission,
    Voting,
    Expired,
    Executed,
    Deleted,
}

/// What a single vote does to a proposal
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VoteDecision {
    Approve,
    /// Team `false` vote: deletes the proposal
    Veto,
    /// Community `false` vote: recorded, non-binding
    Reject,
}

impl VoteDecision {
    pub fn resolve(approve: bool, role: Role) -> Self {
        match (approve, role) {
            (true, _) => VoteDecision::Approve,
            (false, Role::Team) => VoteDecision::Veto,
            (false, Role::Community) => VoteDecision::Reject,
        }
    }
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Locked,
    ProposalCount,
    Members,
    Member(Address),
    Proposal(u64),
    Voted(u64, Address), // (proposal_id, member)
}
