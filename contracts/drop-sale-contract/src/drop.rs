use crate::access::AccessManager;
use crate::event::{self, DropCreated};
use crate::types::{DataKey, Drop, Error};
use soroban_sdk::{Address, Env, String, Symbol};

pub struct DropManager;

impl DropManager {
    /// Create a new drop with the next sequential ID (starting at 0)
    pub fn add_drop(
        env: &Env,
        caller: &Address,
        name: String,
        max_mints_per_address: u32,
        phase_start: u64,
        phase_extend: u64,
        phase_open: u64,
    ) -> Result<u32, Error> {
        AccessManager::verify_admin(env, caller)?;
        Self::validate_schedule(max_mints_per_address, phase_start, phase_extend, phase_open)?;

        let drop_id: u32 = env
            .storage()
            .instance()
            .get(&DataKey::DropCount)
            .unwrap_or(0);

        let drop = Drop {
            id: drop_id,
            name: name.clone(),
            max_mints_per_address,
            phase_start,
            phase_extend,
            phase_open,
        };

        env.storage().persistent().set(&DataKey::Drop(drop_id), &drop);
        env.storage()
            .instance()
            .set(&DataKey::DropCount, &(drop_id + 1));

        env.events().publish(
            (event::DROP, Symbol::new(env, "drop_created")),
            DropCreated {
                id: drop_id,
                name,
                max_mints_per_address,
                phase_start,
                phase_extend,
                phase_open,
            },
        );

        Ok(drop_id)
    }

    /// Overwrite every field of an existing drop, re-validating the schedule
    pub fn update_drop(
        env: &Env,
        caller: &Address,
        drop_id: u32,
        name: String,
        max_mints_per_address: u32,
        phase_start: u64,
        phase_extend: u64,
        phase_open: u64,
    ) -> Result<(), Error> {
        AccessManager::verify_admin(env, caller)?;

        if !env.storage().persistent().has(&DataKey::Drop(drop_id)) {
            return Err(Error::DropNotFound);
        }

        Self::validate_schedule(max_mints_per_address, phase_start, phase_extend, phase_open)?;

        let drop = Drop {
            id: drop_id,
            name,
            max_mints_per_address,
            phase_start,
            phase_extend,
            phase_open,
        };
        env.storage().persistent().set(&DataKey::Drop(drop_id), &drop);

        Ok(())
    }

    /// Get drop details
    pub fn get_drop(env: &Env, drop_id: u32) -> Result<Drop, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Drop(drop_id))
            .ok_or(Error::DropNotFound)
    }

    // Boundaries must be ordered start <= extend <= open; equal boundaries
    // collapse a phase, which is allowed.
    fn validate_schedule(
        max_mints_per_address: u32,
        phase_start: u64,
        phase_extend: u64,
        phase_open: u64,
    ) -> Result<(), Error> {
        if max_mints_per_address == 0 {
            return Err(Error::InvalidMintLimit);
        }
        if phase_start > phase_extend || phase_extend > phase_open {
            return Err(Error::InvalidPhaseWindow);
        }
        Ok(())
    }
}
