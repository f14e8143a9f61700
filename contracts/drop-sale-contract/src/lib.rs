#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

mod access;
mod drop;
mod event;
mod external;
mod interface;
mod inventory;
mod phase;
mod sale;
mod tracking;
mod types;

use crate::access::AccessManager;
use crate::drop::DropManager;
use crate::inventory::InventoryManager;
use crate::sale::SaleManager;
use crate::tracking::TrackingManager;
use crate::types::{ClaimReceipt, DataKey, Drop, Error, ListKind};

#[contract]
pub struct DropSaleContract;

#[contractimpl]
impl DropSaleContract {
    /// Initialize the contract with an admin, the token used to settle
    /// claims, and the issuance contract recording ownership
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        issuance: Address,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::PaymentToken, &payment_token);
        env.storage().instance().set(&DataKey::Issuance, &issuance);

        env.events()
            .publish((Symbol::new(&env, "init"),), (admin, payment_token, issuance));
        Ok(())
    }

    /// Create a new drop (admin only)
    pub fn add_drop(
        env: Env,
        caller: Address,
        name: String,
        max_mints_per_address: u32,
        phase_start: u64,
        phase_extend: u64,
        phase_open: u64,
    ) -> Result<u32, Error> {
        caller.require_auth();
        DropManager::add_drop(
            &env,
            &caller,
            name,
            max_mints_per_address,
            phase_start,
            phase_extend,
            phase_open,
        )
    }

    /// Update an existing drop in place (admin only)
    pub fn update_drop(
        env: Env,
        caller: Address,
        drop_id: u32,
        name: String,
        max_mints_per_address: u32,
        phase_start: u64,
        phase_extend: u64,
        phase_open: u64,
    ) -> Result<(), Error> {
        caller.require_auth();
        DropManager::update_drop(
            &env,
            &caller,
            drop_id,
            name,
            max_mints_per_address,
            phase_start,
            phase_extend,
            phase_open,
        )
    }

    /// Add accounts to a drop's restricted or extended list (admin only)
    pub fn add_to_list(
        env: Env,
        caller: Address,
        drop_id: u32,
        kind: ListKind,
        accounts: Vec<Address>,
    ) -> Result<(), Error> {
        caller.require_auth();
        AccessManager::add_to_list(&env, &caller, drop_id, kind, accounts)
    }

    /// Remove accounts from a drop's restricted or extended list (admin only)
    pub fn remove_from_list(
        env: Env,
        caller: Address,
        drop_id: u32,
        kind: ListKind,
        accounts: Vec<Address>,
    ) -> Result<(), Error> {
        caller.require_auth();
        AccessManager::remove_from_list(&env, &caller, drop_id, kind, accounts)
    }

    /// Replace the price table of a drop (admin only)
    pub fn set_levels(
        env: Env,
        caller: Address,
        drop_id: u32,
        prices: Vec<i128>,
    ) -> Result<(), Error> {
        caller.require_auth();
        InventoryManager::set_levels(&env, &caller, drop_id, prices)
    }

    /// Add token IDs to level pools (admin only)
    pub fn add_tokens(
        env: Env,
        caller: Address,
        drop_id: u32,
        levels: Vec<u32>,
        token_ids: Vec<u64>,
    ) -> Result<(), Error> {
        caller.require_auth();
        InventoryManager::add_tokens(&env, &caller, drop_id, levels, token_ids)
    }

    /// Claim tokens from a level, paying out of `paid_value` for the
    /// quantity actually fulfilled; the excess is refunded
    pub fn claim(
        env: Env,
        buyer: Address,
        drop_id: u32,
        level: u32,
        quantity: u32,
        paid_value: i128,
    ) -> Result<ClaimReceipt, Error> {
        buyer.require_auth();
        SaleManager::claim(&env, buyer, drop_id, level, quantity, paid_value)
    }

    /// Get drop details
    pub fn get_drop(env: Env, drop_id: u32) -> Result<Drop, Error> {
        DropManager::get_drop(&env, drop_id)
    }

    /// Check membership on a drop's admission list
    pub fn is_listed(env: Env, drop_id: u32, kind: ListKind, account: Address) -> bool {
        AccessManager::is_listed(&env, drop_id, kind, &account)
    }

    /// Get the unit price of a level
    pub fn get_price_by_level(env: Env, drop_id: u32, level: u32) -> Result<i128, Error> {
        InventoryManager::get_price_by_level(&env, drop_id, level)
    }

    /// Get the unissued token IDs remaining in a level's pool
    pub fn get_token_list_by_level(env: Env, drop_id: u32, level: u32) -> Vec<u64> {
        InventoryManager::get_token_list_by_level(&env, drop_id, level)
    }

    /// Get how many items an account has claimed from a drop
    pub fn get_minted_count(env: Env, drop_id: u32, account: Address) -> u32 {
        TrackingManager::get_minted_count(&env, drop_id, &account)
    }
}
