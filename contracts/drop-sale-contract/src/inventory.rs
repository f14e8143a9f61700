use crate::access::AccessManager;
use crate::drop::DropManager;
use crate::types::{DataKey, Error};
use soroban_sdk::{Address, Env, Vec};

pub struct InventoryManager;

impl InventoryManager {
    /// Replace the full price table for a drop. Level numbers are 1-based
    /// and dense: `prices[0]` is level 1's unit price. Existing pools are
    /// untouched by a re-call.
    pub fn set_levels(
        env: &Env,
        caller: &Address,
        drop_id: u32,
        prices: Vec<i128>,
    ) -> Result<(), Error> {
        AccessManager::verify_admin(env, caller)?;
        DropManager::get_drop(env, drop_id)?;

        for price in prices.iter() {
            if price < 0 {
                return Err(Error::InvalidPrice);
            }
        }

        env.storage()
            .persistent()
            .set(&DataKey::Levels(drop_id), &prices);

        Ok(())
    }

    /// Append token IDs to level pools. `levels` and `token_ids` are
    /// parallel arrays; insertion order is preserved and consumption is
    /// oldest-first. Global uniqueness of IDs is the caller's
    /// responsibility and is not re-checked on the claim path.
    pub fn add_tokens(
        env: &Env,
        caller: &Address,
        drop_id: u32,
        levels: Vec<u32>,
        token_ids: Vec<u64>,
    ) -> Result<(), Error> {
        AccessManager::verify_admin(env, caller)?;

        if levels.len() != token_ids.len() {
            return Err(Error::LengthMismatch);
        }

        for (level, token_id) in levels.iter().zip(token_ids.iter()) {
            let key = DataKey::Pool(drop_id, level);
            let mut pool: Vec<u64> = env
                .storage()
                .persistent()
                .get(&key)
                .unwrap_or_else(|| Vec::new(env));
            pool.push_back(token_id);
            env.storage().persistent().set(&key, &pool);
        }

        Ok(())
    }

    /// Remove and return up to `wanted` token IDs from the front of a
    /// level's pool. A short pool yields a shorter (possibly empty) result;
    /// that is partial fulfillment, not a failure.
    pub fn draw_up_to(env: &Env, drop_id: u32, level: u32, wanted: u32) -> Vec<u64> {
        let key = DataKey::Pool(drop_id, level);
        let mut pool: Vec<u64> = env
            .storage()
            .persistent()
            .get(&key)
            .unwrap_or_else(|| Vec::new(env));

        let mut drawn = Vec::new(env);
        while drawn.len() < wanted {
            match pool.pop_front() {
                Some(token_id) => drawn.push_back(token_id),
                None => break,
            }
        }
        env.storage().persistent().set(&key, &pool);

        drawn
    }

    /// Get the unit price of a level
    pub fn get_price_by_level(env: &Env, drop_id: u32, level: u32) -> Result<i128, Error> {
        let prices: Vec<i128> = env
            .storage()
            .persistent()
            .get(&DataKey::Levels(drop_id))
            .unwrap_or_else(|| Vec::new(env));

        if level == 0 || level > prices.len() {
            return Err(Error::LevelNotFound);
        }
        Ok(prices.get_unchecked(level - 1))
    }

    /// Get the unissued token IDs remaining in a level's pool
    pub fn get_token_list_by_level(env: &Env, drop_id: u32, level: u32) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::Pool(drop_id, level))
            .unwrap_or_else(|| Vec::new(env))
    }
}
