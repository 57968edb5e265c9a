use anchor_lang::prelude::*;

/// Gear token account - one per minted Gear
#[account]
#[derive(InitSpace)]
pub struct GearToken {
    /// Sequential id, starting at 1
    pub token_id: u64,

    /// Current holder
    pub holder: Pubkey,

    /// Unix timestamp of the mint
    pub minted_at: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl GearToken {
    pub const SEED_PREFIX: &'static [u8] = b"gear";
}
