use anchor_lang::prelude::*;
use registry_core::NULL_ACCOUNT;

use crate::errors::PackError;

/// Per-holder Pack count
#[account]
#[derive(InitSpace)]
pub struct PackBalance {
    /// Account whose holdings this counts
    pub holder: Pubkey,

    /// Number of Packs held
    pub count: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl PackBalance {
    pub const SEED_PREFIX: &'static [u8] = b"balance";

    /// Bind a freshly created balance account to its holder (no-op once bound)
    pub fn bind(&mut self, holder: Pubkey, bump: u8) {
        if self.holder == NULL_ACCOUNT {
            self.holder = holder;
            self.bump = bump;
        }
    }

    pub fn credit(&mut self) -> Result<()> {
        self.count = self.count.checked_add(1).ok_or(PackError::BalanceOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self) -> Result<()> {
        self.count = self.count.checked_sub(1).ok_or(PackError::BalanceUnderflow)?;
        Ok(())
    }
}
