use crate::access::AccessManager;
use crate::drop::DropManager;
use crate::event::{self, ClaimSettled, TokenIssued};
use crate::external::IssuanceClient;
use crate::inventory::InventoryManager;
use crate::phase::resolve_phase;
use crate::tracking::TrackingManager;
use crate::types::{ClaimReceipt, DataKey, Error, Phase};
use soroban_sdk::{token, Address, Env, Symbol};

pub struct SaleManager;

impl SaleManager {
    /// Claim up to `quantity` tokens from a level, paying out of
    /// `paid_value` for what is actually fulfilled.
    ///
    /// Runs under a non-reentrant critical section: a nested claim made
    /// from within the issuance or refund call fails with `ReentrantCall`
    /// and mutates nothing. On the success path the guard is cleared
    /// explicitly; on the error path the host's rollback of the failed
    /// invocation clears it, along with every other write of the claim.
    pub fn claim(
        env: &Env,
        buyer: Address,
        drop_id: u32,
        level: u32,
        quantity: u32,
        paid_value: i128,
    ) -> Result<ClaimReceipt, Error> {
        if env
            .storage()
            .instance()
            .get(&DataKey::MintLock)
            .unwrap_or(false)
        {
            return Err(Error::ReentrantCall);
        }
        env.storage().instance().set(&DataKey::MintLock, &true);

        let result = Self::execute_claim(env, buyer, drop_id, level, quantity, paid_value);

        env.storage().instance().set(&DataKey::MintLock, &false);
        result
    }

    // Checks, then effects, then interactions: the pool draw and the mint
    // counter are committed before the issuance and refund calls, so a
    // reentrant caller observes post-mutation state and cannot double-draw.
    fn execute_claim(
        env: &Env,
        buyer: Address,
        drop_id: u32,
        level: u32,
        quantity: u32,
        paid_value: i128,
    ) -> Result<ClaimReceipt, Error> {
        let drop = DropManager::get_drop(env, drop_id)?;

        let now = env.ledger().timestamp();
        let phase = resolve_phase(&drop, now);
        if phase == Phase::NotStarted {
            return Err(Error::MintingNotOpen);
        }

        if !AccessManager::is_admitted(env, drop_id, phase, &buyer) {
            return Err(Error::NotAllowedToMint);
        }

        if quantity == 0 {
            return Err(Error::InvalidQuantity);
        }
        if paid_value < 0 {
            return Err(Error::InsufficientPayment);
        }

        let price = InventoryManager::get_price_by_level(env, drop_id, level)?;

        // Clamp the request against the per-address cap and the tendered
        // value. A free level is unbounded by payment.
        let cap = TrackingManager::remaining_allowance(env, &drop, &buyer);
        let affordable = if price == 0 {
            quantity
        } else {
            core::cmp::min(paid_value / price, quantity as i128) as u32
        };
        let to_attempt = quantity.min(cap).min(affordable);
        if to_attempt == 0 {
            return Err(if cap == 0 {
                Error::AllowanceExhausted
            } else {
                Error::InsufficientPayment
            });
        }

        // Take the tendered amount into custody; the excess over the final
        // charge is returned as the last step of the call.
        let token_client = token::TokenClient::new(env, &Self::payment_token(env)?);
        let contract = env.current_contract_address();
        if paid_value > 0 {
            token_client.transfer(&buyer, &contract, &paid_value);
        }

        let issued = InventoryManager::draw_up_to(env, drop_id, level, to_attempt);
        let actual = issued.len();

        let charged = (actual as i128) * price;
        let refund = paid_value - charged;

        if actual > 0 {
            TrackingManager::record(env, drop_id, &buyer, actual)?;
        }

        // All internal state is final; hand ownership to the issuance
        // contract, one token at a time.
        let issuance = IssuanceClient::new(env, &Self::issuance(env)?);
        for token_id in issued.iter() {
            match issuance.try_issue(&buyer, &token_id) {
                Ok(Ok(())) => {}
                _ => return Err(Error::IssuanceFailed),
            }

            env.events().publish(
                (event::CLAIM, Symbol::new(env, "token_issued")),
                TokenIssued {
                    token_id,
                    recipient: buyer.clone(),
                    drop_id,
                    level,
                },
            );
        }

        if refund > 0 {
            token_client.transfer(&contract, &buyer, &refund);
        }

        env.events().publish(
            (event::CLAIM, Symbol::new(env, "claim_settled")),
            ClaimSettled {
                drop_id,
                level,
                buyer: buyer.clone(),
                quantity_issued: actual,
                charged,
                refund,
            },
        );

        Ok(ClaimReceipt {
            token_ids: issued,
            charged,
            refund,
        })
    }

    fn payment_token(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .ok_or(Error::NotInitialized)
    }

    fn issuance(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Issuance)
            .ok_or(Error::NotInitialized)
    }
}
