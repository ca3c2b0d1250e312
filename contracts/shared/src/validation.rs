//! Validation helpers for the treasury DAO
//!
//! Pure checks with no storage access, so they can be unit tested without a
//! contract environment.

use crate::constants::{PROPOSAL_EXPIRY_SECONDS, VOTING_DELAY_SECONDS};
use crate::errors::DaoError;
use soroban_sdk::Address;

// ===== Amount Validation =====

/// Validate that an amount is positive
pub fn validate_positive_amount(amount: i128) -> Result<(), DaoError> {
    if amount <= 0 {
        return Err(DaoError::ZeroAmount);
    }
    Ok(())
}

/// Validate that `available` covers `required`, reporting `err` otherwise
pub fn validate_sufficient_funds(
    available: i128,
    required: i128,
    err: DaoError,
) -> Result<(), DaoError> {
    if available < required {
        return Err(err);
    }
    Ok(())
}

// ===== Address Validation =====

/// Validate that a receiver is not the null identity.
///
/// Soroban has no zero address; the DAO's own address plays that role,
/// since paying the treasury back to itself moves nothing.
pub fn validate_receiver(receiver: &Address, dao: &Address) -> Result<(), DaoError> {
    if receiver == dao {
        return Err(DaoError::ZeroReceiver);
    }
    Ok(())
}

// ===== Quorum Validation =====

/// Validate the quorum threshold against the membership.
///
/// `to_pass` must exceed the community size, so community votes alone can
/// never reach quorum, and must not exceed the total member count.
pub fn validate_quorum(
    team_count: u32,
    community_count: u32,
    to_pass: u32,
) -> Result<(), DaoError> {
    if team_count == 0 {
        return Err(DaoError::NoTeamMembers);
    }
    if to_pass <= community_count {
        return Err(DaoError::QuorumTooLow);
    }
    let member_count = team_count
        .checked_add(community_count)
        .ok_or(DaoError::Overflow)?;
    if to_pass > member_count {
        return Err(DaoError::QuorumTooHigh);
    }
    Ok(())
}

// ===== Time Validation =====

/// Whether a proposal created at `created_at` accepts votes at `now`
pub fn in_voting_window(created_at: u64, now: u64) -> bool {
    now > created_at.saturating_add(VOTING_DELAY_SECONDS)
        && now <= created_at.saturating_add(PROPOSAL_EXPIRY_SECONDS)
}

/// Whether a proposal created at `created_at` is past its expiry at `now`
pub fn is_expired(created_at: u64, now: u64) -> bool {
    now > created_at.saturating_add(PROPOSAL_EXPIRY_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ONE_DAY_SECONDS;
    use soroban_sdk::{testutils::Address as _, Env};

    #[test]
    fn test_positive_amount() {
        assert_eq!(validate_positive_amount(1), Ok(()));
        assert_eq!(validate_positive_amount(0), Err(DaoError::ZeroAmount));
        assert_eq!(validate_positive_amount(-5), Err(DaoError::ZeroAmount));
    }

    #[test]
    fn test_sufficient_funds() {
        assert_eq!(validate_sufficient_funds(10, 10, DaoError::UnableToWithdraw), Ok(()));
        assert_eq!(
            validate_sufficient_funds(9, 10, DaoError::UnableToWithdraw),
            Err(DaoError::UnableToWithdraw)
        );
    }

    #[test]
    fn test_receiver_cannot_be_dao() {
        let env = Env::default();
        let dao = Address::generate(&env);
        let other = Address::generate(&env);

        assert_eq!(validate_receiver(&other, &dao), Ok(()));
        assert_eq!(validate_receiver(&dao, &dao), Err(DaoError::ZeroReceiver));
    }

    #[test]
    fn test_quorum_bounds() {
        assert_eq!(validate_quorum(2, 3, 4), Ok(()));
        assert_eq!(validate_quorum(2, 3, 5), Ok(()));
        assert_eq!(validate_quorum(0, 3, 4), Err(DaoError::NoTeamMembers));
        assert_eq!(validate_quorum(2, 3, 3), Err(DaoError::QuorumTooLow));
        assert_eq!(validate_quorum(2, 3, 6), Err(DaoError::QuorumTooHigh));
    }

    #[test]
    fn test_voting_window_edges() {
        let created = 1_000;
        let delay_end = created + 2 * ONE_DAY_SECONDS;
        let expiry = created + 9 * ONE_DAY_SECONDS;

        assert!(!in_voting_window(created, created));
        assert!(!in_voting_window(created, delay_end));
        assert!(in_voting_window(created, delay_end + 1));
        assert!(in_voting_window(created, expiry));
        assert!(!in_voting_window(created, expiry + 1));

        assert!(!is_expired(created, expiry));
        assert!(is_expired(created, expiry + 1));
    }
}
