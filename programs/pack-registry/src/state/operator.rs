use anchor_lang::prelude::*;

use crate::errors::PackError;

/// Holder-wide burn approval for one operator
#[account]
#[derive(InitSpace)]
pub struct OperatorApproval {
    /// Holder granting the approval
    pub holder: Pubkey,

    /// Account allowed to burn any of the holder's Packs
    pub operator: Pubkey,

    /// Whether the approval is currently granted
    pub approved: bool,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl OperatorApproval {
    pub const SEED_PREFIX: &'static [u8] = b"operator";

    /// Grant or revoke `operator`'s right over all of `holder`'s Packs
    pub fn set(&mut self, holder: Pubkey, operator: Pubkey, approved: bool, bump: u8) -> Result<()> {
        require_keys_neq!(operator, holder, PackError::SelfApproval);

        self.holder = holder;
        self.operator = operator;
        self.approved = approved;
        self.bump = bump;

        Ok(())
    }
}
