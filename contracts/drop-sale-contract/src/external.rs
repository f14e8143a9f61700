use soroban_sdk::{contractclient, contracterror, Address};

/// Error codes for issuance contracts.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum IssuanceError {
    AssignmentFailed = 1,
    AlreadyIssued = 2,
}

/// Interface for the issuance contract: the system of record that durably
/// assigns a token ID to an account and enforces global ownership
/// uniqueness. Treated as untrusted; it is only ever invoked after the sale
/// bookkeeping is committed, and any failure it reports aborts the claim.
#[allow(dead_code)]
#[contractclient(name = "IssuanceClient")]
pub trait IssuanceService {
    /// Assigns `token_id` to `to`.
    /// - `to`: The recipient's address.
    /// - `token_id`: The identifier being issued.
    fn issue(to: Address, token_id: u64) -> Result<(), IssuanceError>;
}
