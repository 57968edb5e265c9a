use anchor_lang::prelude::*;
use registry_core::{Authority, TokenSequence, NULL_ACCOUNT};

use crate::errors::PackError;
use crate::state::{PackBalance, PackToken};

/// Global Pack registry state - minter, id sequence and the Gear registry it feeds
#[account]
#[derive(InitSpace)]
pub struct RegistryState {
    /// Pack minter; also allowed to burn on behalf of any holder
    pub authority: Authority,
    /// Pack id allocation and live supply
    pub sequence: TokenSequence,
    /// Gear registry state account that burns mint into
    pub gear_registry: Pubkey,
    /// Bump seed for PDA; this PDA signs Gear mints
    pub bump: u8,
}

impl RegistryState {
    pub const SEED_PREFIX: &'static [u8] = b"registry";

    /// Write a new Pack for `recipient` and count it in their balance.
    /// Caller authority is checked by the instruction accounts.
    pub fn record_mint(
        &mut self,
        pack: &mut PackToken,
        balance: &mut PackBalance,
        recipient: Pubkey,
        uri: String,
        minted_at: i64,
    ) -> Result<u64> {
        require_keys_neq!(recipient, NULL_ACCOUNT, PackError::InvalidRecipient);
        require!(uri.len() <= PackToken::MAX_URI_LEN, PackError::UriTooLong);

        let token_id = self.sequence.issue()?;

        pack.token_id = token_id;
        pack.holder = recipient;
        pack.approved = NULL_ACCOUNT;
        pack.uri = uri;
        pack.minted_at = minted_at;

        balance.credit()?;

        Ok(token_id)
    }

    /// Authorize `caller` and apply the Pack side of a burn.
    ///
    /// Returns the former holder, who is owed one Gear. A failing debit or
    /// retire leaves partial writes only in memory; the instruction fails and
    /// nothing is persisted.
    pub fn record_burn(
        &mut self,
        caller: &Pubkey,
        pack: &PackToken,
        balance: &mut PackBalance,
        is_operator: bool,
    ) -> Result<Pubkey> {
        require_keys_eq!(balance.holder, pack.holder, PackError::HolderMismatch);
        require!(
            pack.can_burn(caller, is_operator, &self.authority),
            PackError::NotAuthorizedToBurn
        );

        balance.debit()?;
        self.sequence.retire()?;

        Ok(pack.holder)
    }
}
