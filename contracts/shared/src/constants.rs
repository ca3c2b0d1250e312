//! Domain and storage constants for the treasury DAO

// ===== Time Constants (in seconds) =====

/// One day in seconds (86400)
pub const ONE_DAY_SECONDS: u64 = 86_400;

/// Delay after creation before a proposal accepts votes (2 days)
pub const VOTING_DELAY_SECONDS: u64 = 2 * ONE_DAY_SECONDS;

/// Age after which a proposal stops accepting votes and may be deleted (9 days)
pub const PROPOSAL_EXPIRY_SECONDS: u64 = 9 * ONE_DAY_SECONDS;

// ===== Ledger TTL Constants =====
// At ~5s per ledger: 1 day ≈ 17,280 ledgers.

/// Ledgers per day
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Target TTL after a bump (30 days)
pub const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Bump only once the remaining TTL drops below this
pub const LIFETIME_THRESHOLD: u32 = BUMP_AMOUNT - DAY_IN_LEDGERS;
