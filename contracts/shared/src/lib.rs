#![no_std]
//! # Shared Treasury DAO Library
//!
//! Error codes, domain constants, and validation helpers used by the
//! treasury DAO contract.
//!
//! ## Modules
//!
//! - `errors` - The `DaoError` codes and their taxonomy
//! - `constants` - Voting windows and storage TTL policy
//! - `validation` - Reusable validation helper functions
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::errors::DaoError;
//! use shared::validation::validate_positive_amount;
//! use shared::constants::PROPOSAL_EXPIRY_SECONDS;
//! ```

pub mod constants;
pub mod errors;
pub mod validation;

// Re-export commonly used types
pub use errors::{DaoError, ErrorKind};
pub use validation::{
    in_voting_window, is_expired, validate_positive_amount, validate_quorum,
    validate_receiver, validate_sufficient_funds,
};
