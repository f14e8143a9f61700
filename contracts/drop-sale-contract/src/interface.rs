//! Interface documentation for the Drop Sale Contract
//!
//! This contract manages phased, inventory-bounded drop sales: admins define
//! timed drops with tiered price levels backed by finite pools of token IDs,
//! and eligible accounts pay to claim tokens during permission-gated phases.

use crate::types::{ClaimReceipt, Drop, Error, ListKind};
use soroban_sdk::{Address, String, Vec};

/// Contract Interface
pub trait DropSaleContract {
    /// Initialize the contract
    ///
    /// # Arguments
    /// * `admin` - The address that will have administrative privileges
    /// * `payment_token` - The token contract used to settle claims
    /// * `issuance` - The contract that durably records token ownership
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the contract has already been initialized
    fn initialize(admin: Address, payment_token: Address, issuance: Address)
        -> Result<(), Error>;

    /// Create a new drop (admin only)
    ///
    /// # Arguments
    /// * `caller` - The admin address
    /// * `name` - The name of the drop
    /// * `max_mints_per_address` - Maximum items a single account can claim
    /// * `phase_start` - Unix timestamp when the restricted list is admitted
    /// * `phase_extend` - Unix timestamp when the extended list is admitted
    /// * `phase_open` - Unix timestamp when everyone is admitted
    ///
    /// # Returns
    /// The ID of the created drop; IDs are sequential starting at 0
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the admin
    /// * `InvalidPhaseWindow` - If the boundaries are out of order
    /// * `InvalidMintLimit` - If the per-address limit is zero
    fn add_drop(
        caller: Address,
        name: String,
        max_mints_per_address: u32,
        phase_start: u64,
        phase_extend: u64,
        phase_open: u64,
    ) -> Result<u32, Error>;

    /// Overwrite every field of an existing drop (admin only)
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the admin
    /// * `DropNotFound` - If the drop doesn't exist
    /// * `InvalidPhaseWindow` - If the boundaries are out of order
    fn update_drop(
        caller: Address,
        drop_id: u32,
        name: String,
        max_mints_per_address: u32,
        phase_start: u64,
        phase_extend: u64,
        phase_open: u64,
    ) -> Result<(), Error>;

    /// Add accounts to an admission list (admin only). Already-listed
    /// accounts are skipped; the batch is rejected whole on an
    /// authorization failure.
    fn add_to_list(
        caller: Address,
        drop_id: u32,
        kind: ListKind,
        accounts: Vec<Address>,
    ) -> Result<(), Error>;

    /// Remove accounts from an admission list (admin only). Absent
    /// accounts are a no-op.
    fn remove_from_list(
        caller: Address,
        drop_id: u32,
        kind: ListKind,
        accounts: Vec<Address>,
    ) -> Result<(), Error>;

    /// Replace the full price table of a drop (admin only)
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the admin
    /// * `DropNotFound` - If the drop doesn't exist
    /// * `InvalidPrice` - If any price is negative
    fn set_levels(caller: Address, drop_id: u32, prices: Vec<i128>) -> Result<(), Error>;

    /// Append token IDs to level pools (admin only). `levels` and
    /// `token_ids` are parallel arrays.
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the admin
    /// * `LengthMismatch` - If the arrays differ in length
    fn add_tokens(
        caller: Address,
        drop_id: u32,
        levels: Vec<u32>,
        token_ids: Vec<u64>,
    ) -> Result<(), Error>;

    /// Claim up to `quantity` tokens from a level
    ///
    /// The buyer tenders `paid_value`; the charge is the unit price times
    /// the quantity actually fulfilled and the excess is refunded in the
    /// same call. A short pool fulfills partially rather than failing.
    ///
    /// # Errors
    /// * `DropNotFound` - If the drop doesn't exist
    /// * `LevelNotFound` - If the level has no configured price
    /// * `MintingNotOpen` - If no admission phase has opened yet
    /// * `NotAllowedToMint` - If the caller is not on a list the phase admits
    /// * `InvalidQuantity` - If `quantity` is zero
    /// * `AllowanceExhausted` - If the per-address cap is already reached
    /// * `InsufficientPayment` - If `paid_value` buys zero items
    /// * `ReentrantCall` - If invoked from within an ongoing claim
    /// * `IssuanceFailed` - If the issuance contract rejects an assignment
    fn claim(
        buyer: Address,
        drop_id: u32,
        level: u32,
        quantity: u32,
        paid_value: i128,
    ) -> Result<ClaimReceipt, Error>;

    /// Get details of a drop
    fn get_drop(drop_id: u32) -> Result<Drop, Error>;

    /// Check membership on a drop's admission list
    fn is_listed(drop_id: u32, kind: ListKind, account: Address) -> bool;

    /// Get the unit price of a level
    fn get_price_by_level(drop_id: u32, level: u32) -> Result<i128, Error>;

    /// Get the unissued token IDs remaining in a level's pool
    fn get_token_list_by_level(drop_id: u32, level: u32) -> Vec<u64>;

    /// Get how many items an account has claimed from a drop
    fn get_minted_count(drop_id: u32, account: Address) -> u32;
}
