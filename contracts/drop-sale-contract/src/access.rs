use crate::types::{DataKey, Error, ListKind, Phase};
use soroban_sdk::{Address, Env, Vec};

pub struct AccessManager;

impl AccessManager {
    fn list_key(drop_id: u32, kind: ListKind) -> DataKey {
        match kind {
            ListKind::Restricted => DataKey::Restricted(drop_id),
            ListKind::Extended => DataKey::Extended(drop_id),
        }
    }

    fn load_list(env: &Env, drop_id: u32, kind: ListKind) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&Self::list_key(drop_id, kind))
            .unwrap_or_else(|| Vec::new(env))
    }

    /// Add accounts to an admission list. Already-present accounts are
    /// skipped; the batch is all-or-nothing on the admin check.
    pub fn add_to_list(
        env: &Env,
        caller: &Address,
        drop_id: u32,
        kind: ListKind,
        accounts: Vec<Address>,
    ) -> Result<(), Error> {
        Self::verify_admin(env, caller)?;

        let mut list = Self::load_list(env, drop_id, kind);
        for account in accounts.iter() {
            if !list.contains(&account) {
                list.push_back(account);
            }
        }
        env.storage()
            .persistent()
            .set(&Self::list_key(drop_id, kind), &list);

        Ok(())
    }

    /// Remove accounts from an admission list. Absent accounts are a no-op.
    pub fn remove_from_list(
        env: &Env,
        caller: &Address,
        drop_id: u32,
        kind: ListKind,
        accounts: Vec<Address>,
    ) -> Result<(), Error> {
        Self::verify_admin(env, caller)?;

        let mut list = Self::load_list(env, drop_id, kind);
        for account in accounts.iter() {
            if let Some(index) = list.first_index_of(&account) {
                list.remove(index);
            }
        }
        env.storage()
            .persistent()
            .set(&Self::list_key(drop_id, kind), &list);

        Ok(())
    }

    /// Check membership on an admission list
    pub fn is_listed(env: &Env, drop_id: u32, kind: ListKind, account: &Address) -> bool {
        Self::load_list(env, drop_id, kind).contains(account)
    }

    /// Admission rule for the claim path: which lists (if any) the current
    /// phase requires the caller to be on.
    pub fn is_admitted(env: &Env, drop_id: u32, phase: Phase, account: &Address) -> bool {
        match phase {
            Phase::NotStarted => false,
            Phase::RestrictedOnly => Self::is_listed(env, drop_id, ListKind::Restricted, account),
            Phase::ExtendedAndRestricted => {
                Self::is_listed(env, drop_id, ListKind::Restricted, account)
                    || Self::is_listed(env, drop_id, ListKind::Extended, account)
            }
            Phase::Open => true,
        }
    }

    /// Verify the caller holds the admin capability
    pub fn verify_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;

        if caller != &admin {
            return Err(Error::Unauthorized);
        }

        Ok(())
    }
}
