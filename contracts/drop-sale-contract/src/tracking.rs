use crate::types::{DataKey, Drop, Error};
use soroban_sdk::{Address, Env};

pub struct TrackingManager;

impl TrackingManager {
    /// Get the number of items an account has claimed from a drop
    pub fn get_minted_count(env: &Env, drop_id: u32, account: &Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::Minted(drop_id, account.clone()))
            .unwrap_or(0)
    }

    /// How many more items the account may still claim; floors at zero.
    pub fn remaining_allowance(env: &Env, drop: &Drop, account: &Address) -> u32 {
        drop.max_mints_per_address
            .saturating_sub(Self::get_minted_count(env, drop.id, account))
    }

    /// Increment the claimed count. A pure counter: the sale path clamps
    /// `n` against the remaining allowance before calling.
    pub fn record(env: &Env, drop_id: u32, account: &Address, n: u32) -> Result<(), Error> {
        let count = Self::get_minted_count(env, drop_id, account);
        env.storage()
            .persistent()
            .set(&DataKey::Minted(drop_id, account.clone()), &(count + n));
        Ok(())
    }
}
