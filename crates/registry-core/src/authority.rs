use anchor_lang::prelude::*;

use crate::errors::CoreError;
use crate::NULL_ACCOUNT;

/// Single-owner admin record held by each registry state account
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct Authority {
    /// The only account allowed to call privileged instructions
    pub owner: Pubkey,
}

impl Authority {
    pub fn new(owner: Pubkey) -> Self {
        Self { owner }
    }

    pub fn is_owner(&self, caller: &Pubkey) -> bool {
        self.owner == *caller
    }

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, CoreError::Unauthorized);
        Ok(())
    }

    /// Hand authority to `new_owner`.
    ///
    /// Returns the previous owner when the record changed, `None` when
    /// `new_owner` already holds it. Nothing is written on failure.
    pub fn transfer(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Option<Pubkey>> {
        self.require_owner(caller)?;
        require_keys_neq!(new_owner, NULL_ACCOUNT, CoreError::InvalidOwner);

        if new_owner == self.owner {
            return Ok(None);
        }

        Ok(Some(std::mem::replace(&mut self.owner, new_owner)))
    }
}

/// Emitted whenever a registry's owner changes
#[event]
pub struct AuthorityTransferred {
    /// State account of the registry whose authority moved
    pub registry: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
