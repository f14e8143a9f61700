use soroban_sdk::{contracttype, symbol_short, Address, String, Symbol};

// Symbol representing drop lifecycle events.
pub const DROP: Symbol = symbol_short!("DROP");

// Symbol representing claim settlement events.
pub const CLAIM: Symbol = symbol_short!("CLAIM");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DropCreated {
    pub id: u32,
    pub name: String,
    pub max_mints_per_address: u32,
    pub phase_start: u64,
    pub phase_extend: u64,
    pub phase_open: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenIssued {
    pub token_id: u64,
    pub recipient: Address,
    pub drop_id: u32,
    pub level: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimSettled {
    pub drop_id: u32,
    pub level: u32,
    pub buyer: Address,
    pub quantity_issued: u32,
    pub charged: i128,
    pub refund: i128,
}
