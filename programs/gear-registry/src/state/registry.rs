use anchor_lang::prelude::*;
use registry_core::{Authority, TokenSequence, NULL_ACCOUNT};

use crate::errors::GearError;
use crate::state::{GearBalance, GearToken};

/// Global Gear registry state - owner record and id sequence
#[account]
#[derive(InitSpace)]
pub struct RegistryState {
    /// Minting authority (the Pack registry PDA once setup is done)
    pub authority: Authority,
    /// Gear id allocation and live supply
    pub sequence: TokenSequence,
    /// Bump seed for PDA
    pub bump: u8,
}

impl RegistryState {
    pub const SEED_PREFIX: &'static [u8] = b"registry";

    /// Write a new Gear for `recipient` and count it in their balance.
    /// Caller authority is checked by the instruction accounts.
    pub fn record_mint(
        &mut self,
        gear: &mut GearToken,
        balance: &mut GearBalance,
        recipient: Pubkey,
        minted_at: i64,
    ) -> Result<u64> {
        require_keys_neq!(recipient, NULL_ACCOUNT, GearError::InvalidRecipient);

        let token_id = self.sequence.issue()?;

        gear.token_id = token_id;
        gear.holder = recipient;
        gear.minted_at = minted_at;

        balance.credit()?;

        Ok(token_id)
    }
}
