//! Treasury accounting: locked vs. withdrawable balance.
//!
//! The token contract is the source of truth for the balance and is read on
//! every call. `locked` only ever moves through [`reserve`] and [`release`].

use soroban_sdk::{log, token::TokenClient, Address, Env};

use shared::{validate_positive_amount, validate_sufficient_funds, DaoError};

use crate::events;
use crate::storage;

fn token_client(env: &Env) -> Result<TokenClient<'_>, DaoError> {
    let config = storage::get_config(env)?;
    Ok(TokenClient::new(env, &config.token))
}

/// Token balance held by the DAO.
pub fn balance(env: &Env) -> Result<i128, DaoError> {
    Ok(token_client(env)?.balance(&env.current_contract_address()))
}

/// `balance - locked`, floored at zero. A negative difference means funds
/// left the DAO without going through a proposal.
pub fn withdrawable(env: &Env) -> Result<i128, DaoError> {
    let locked = storage::get_locked(env);
    let balance = balance(env)?;
    let available = balance.checked_sub(locked).ok_or(DaoError::Overflow)?;
    if available < 0 {
        log!(env, "locked exceeds treasury balance", locked, balance);
        return Ok(0);
    }
    Ok(available)
}

/// Lock `amount` for an active proposal. The caller has already checked
/// `withdrawable() >= amount`.
pub fn reserve(env: &Env, amount: i128) -> Result<(), DaoError> {
    let locked = storage::get_locked(env)
        .checked_add(amount)
        .ok_or(DaoError::Overflow)?;
    storage::set_locked(env, locked);
    Ok(())
}

/// Unlock `amount` when a proposal reaches a terminal state.
pub fn release(env: &Env, amount: i128) -> Result<(), DaoError> {
    let locked = storage::get_locked(env)
        .checked_sub(amount)
        .filter(|locked| *locked >= 0)
        .ok_or(DaoError::Overflow)?;
    storage::set_locked(env, locked);
    Ok(())
}

/// Send `amount` from the DAO to `to`. Any refusal by the token contract
/// fails the whole call, which rolls back every write made before it.
pub fn transfer_out(env: &Env, to: &Address, amount: i128) -> Result<(), DaoError> {
    let client = token_client(env)?;
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "token transfer failed", to, amount);
            Err(DaoError::TransferFailed)
        }
    }
}

/// Team withdrawal of unlocked funds. Does not touch `locked`.
pub fn withdraw(env: &Env, to: &Address, amount: i128) -> Result<(), DaoError> {
    validate_positive_amount(amount)?;
    validate_sufficient_funds(withdrawable(env)?, amount, DaoError::UnableToWithdraw)?;

    transfer_out(env, to, amount)?;

    events::withdrawn(env, to, amount);
    Ok(())
}

/// Pull `amount` from `from` into the treasury.
pub fn deposit(env: &Env, from: &Address, amount: i128) -> Result<(), DaoError> {
    validate_positive_amount(amount)?;

    let client = token_client(env)?;
    match client.try_transfer(from, &env.current_contract_address(), &amount) {
        Ok(Ok(())) => {}
        _ => {
            log!(env, "deposit transfer failed", from, amount);
            return Err(DaoError::TransferFailed);
        }
    }

    events::deposited(env, from, amount);
    Ok(())
}
