use anchor_lang::prelude::*;
use registry_core::NULL_ACCOUNT;

use crate::errors::GearError;

/// Per-holder Gear count
#[account]
#[derive(InitSpace)]
pub struct GearBalance {
    /// Account whose holdings this counts
    pub holder: Pubkey,

    /// Number of Gear tokens held
    pub count: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl GearBalance {
    pub const SEED_PREFIX: &'static [u8] = b"balance";

    /// Bind a freshly created balance account to its holder (no-op once bound)
    pub fn bind(&mut self, holder: Pubkey, bump: u8) {
        if self.holder == NULL_ACCOUNT {
            self.holder = holder;
            self.bump = bump;
        }
    }

    pub fn credit(&mut self) -> Result<()> {
        self.count = self.count.checked_add(1).ok_or(GearError::BalanceOverflow)?;
        Ok(())
    }
}
