//! Error codes for the treasury DAO
//!
//! Every failure the DAO can report is a variant of [`DaoError`]. Codes are
//! stable across releases because external indexers key on them.
//! Error ranges are organized by category:
//! - 1-19: Configuration errors (construction and initialization)
//! - 20-39: Authorization errors
//! - 40-59: Argument errors
//! - 60-79: Treasury funding errors
//! - 80-99: Proposal lifecycle errors
//! - 100-119: Host and arithmetic errors

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DaoError {
    // ===== Configuration Errors (1-19) =====
    /// Contract has not been initialized
    NotInitialized = 1,

    /// Contract was already initialized
    AlreadyInitialized = 2,

    /// The initial team set is empty
    NoTeamMembers = 3,

    /// `to_pass` does not exceed the community member count
    QuorumTooLow = 4,

    /// `to_pass` exceeds the total member count
    QuorumTooHigh = 5,

    /// An address appears twice in the initial member lists
    DuplicateMember = 6,

    // ===== Authorization Errors (20-39) =====
    /// Caller is not a team member
    NotTeamMember = 20,

    /// Caller is not a member, or not the creator of the proposal
    NotProposer = 21,

    // ===== Argument Errors (40-59) =====
    /// Amount is zero or negative
    ZeroAmount = 40,

    /// Receiver is the null identity (the DAO itself)
    ZeroReceiver = 41,

    /// Address is already a member
    AlreadyMember = 42,

    // ===== Treasury Errors (60-79) =====
    /// Withdrawable balance cannot cover a new proposal
    InsufficientDaoFunds = 60,

    /// Withdrawable balance cannot cover a team withdrawal
    UnableToWithdraw = 61,

    // ===== Proposal Lifecycle Errors (80-99) =====
    /// Proposal is in its submission delay, expired, or terminal
    NotInVotingPhase = 80,

    /// Member already voted on this proposal
    AlreadyVoted = 81,

    /// Proposal has not reached its expiry yet
    NotExpired = 82,

    /// No proposal was ever created with this id
    ProposalNotFound = 83,

    // ===== Host Errors (100-119) =====
    /// The token contract refused the transfer
    TransferFailed = 100,

    /// Arithmetic overflow or underflow
    Overflow = 101,
}

/// Coarse error taxonomy shared with callers and observers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidConfig,
    Unauthorized,
    InvalidArgument,
    InsufficientFunds,
    InvalidState,
    Host,
}

impl DaoError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            1..=19 => ErrorKind::InvalidConfig,
            20..=39 => ErrorKind::Unauthorized,
            40..=59 => ErrorKind::InvalidArgument,
            60..=79 => ErrorKind::InsufficientFunds,
            80..=99 => ErrorKind::InvalidState,
            _ => ErrorKind::Host,
        }
    }

    /// Human-readable message surfaced to callers.
    pub fn message(&self) -> &'static str {
        match self {
            DaoError::NotInitialized => "Contract not initialized",
            DaoError::AlreadyInitialized => "Contract already initialized",
            DaoError::NoTeamMembers => "Need at least one teamMember",
            DaoError::QuorumTooLow => "Need higher value for toPass",
            DaoError::QuorumTooHigh => "Not enough members to pass votes",
            DaoError::DuplicateMember => "Duplicate member",

            DaoError::NotTeamMember => "Not team member",
            DaoError::NotProposer => "Not proposer",

            DaoError::ZeroAmount => "Amount must be greater than 0",
            DaoError::ZeroReceiver => "Receiver cannot be zero address",
            DaoError::AlreadyMember => "Already a member",

            DaoError::InsufficientDaoFunds => "Invalid funds on DAO",
            DaoError::UnableToWithdraw => "Unable to withdraw amount",

            DaoError::NotInVotingPhase => "Proposal not in voting phase",
            DaoError::AlreadyVoted => "Already voted",
            DaoError::NotExpired => "Proposal not expired",
            DaoError::ProposalNotFound => "Proposal not found",

            DaoError::TransferFailed => "Token transfer failed",
            DaoError::Overflow => "Arithmetic overflow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_code_ranges() {
        assert_eq!(DaoError::QuorumTooLow.kind(), ErrorKind::InvalidConfig);
        assert_eq!(DaoError::NotTeamMember.kind(), ErrorKind::Unauthorized);
        assert_eq!(DaoError::NotProposer.kind(), ErrorKind::Unauthorized);
        assert_eq!(DaoError::ZeroReceiver.kind(), ErrorKind::InvalidArgument);
        assert_eq!(DaoError::UnableToWithdraw.kind(), ErrorKind::InsufficientFunds);
        assert_eq!(DaoError::AlreadyVoted.kind(), ErrorKind::InvalidState);
        assert_eq!(DaoError::TransferFailed.kind(), ErrorKind::Host);
    }

    #[test]
    fn test_messages() {
        assert_eq!(DaoError::NoTeamMembers.message(), "Need at least one teamMember");
        assert_eq!(DaoError::NotInVotingPhase.message(), "Proposal not in voting phase");
        assert_eq!(DaoError::InsufficientDaoFunds.message(), "Invalid funds on DAO");
    }
}
