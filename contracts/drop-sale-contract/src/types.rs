use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

/// Storage keys for contract data
#[contracttype]
pub enum DataKey {
    Admin,                // Contract administrator
    PaymentToken,         // Token contract used to settle claims
    Issuance,             // Issuance contract recording ownership
    MintLock,             // Reentrancy guard flag for claims
    DropCount,            // Counter for drop IDs
    Drop(u32),            // Drop ID -> Drop
    Restricted(u32),      // Drop ID -> restricted-list addresses
    Extended(u32),        // Drop ID -> extended-list addresses
    Levels(u32),          // Drop ID -> per-level unit prices
    Pool(u32, u32),       // (Drop ID, level) -> unissued token IDs
    Minted(u32, Address), // (Drop ID, account) -> issued count
}

/// A timed sale campaign with phased admission and tiered inventory.
///
/// The schedule is three ordered timestamps: the restricted list is admitted
/// at `phase_start`, the extended list at `phase_extend`, and everyone at
/// `phase_open`. Claims stay open indefinitely after `phase_open`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Drop {
    pub id: u32,
    pub name: String,
    pub max_mints_per_address: u32,
    pub phase_start: u64,
    pub phase_extend: u64,
    pub phase_open: u64,
}

/// Admission phase of a drop at a given time; ordered so that later
/// phases compare greater.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Phase {
    NotStarted,            // Before phase_start; nobody may claim
    RestrictedOnly,        // Restricted-listed accounts only
    ExtendedAndRestricted, // Either list is admitted
    Open,                  // Everyone is admitted
}

/// Which admission list a membership operation targets
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListKind {
    Restricted,
    Extended,
}

/// Result of a successful claim
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimReceipt {
    pub token_ids: Vec<u64>,
    pub charged: i128,
    pub refund: i128,
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,  // Contract already setup
    NotInitialized = 2,      // Contract not initialized
    Unauthorized = 3,        // Caller lacks admin capability
    DropNotFound = 4,        // Drop doesn't exist
    LevelNotFound = 5,       // Level has no configured price
    InvalidPhaseWindow = 6,  // Schedule boundaries out of order
    InvalidMintLimit = 7,    // Per-address limit must be positive
    InvalidPrice = 8,        // Negative unit price
    LengthMismatch = 9,      // Parallel batch arrays differ in length
    MintingNotOpen = 10,     // Claim attempted before phase_start
    NotAllowedToMint = 11,   // Caller not on a list the phase admits
    InvalidQuantity = 12,    // Zero quantity requested
    AllowanceExhausted = 13, // Per-address mint cap reached
    InsufficientPayment = 14, // Tendered value buys zero items
    ReentrantCall = 15,      // Nested claim detected
    IssuanceFailed = 16,     // Issuance contract rejected an assignment
}
