use anchor_lang::prelude::*;
use registry_core::{Authority, NULL_ACCOUNT};

/// Pack token account - one per minted Pack, closed when the Pack is burned
#[account]
#[derive(InitSpace, Debug)]
pub struct PackToken {
    /// Sequential id, starting at 1 and never reused
    pub token_id: u64,

    /// Current holder
    pub holder: Pubkey,

    /// Account approved to burn this Pack (null account when unset)
    pub approved: Pubkey,

    /// Opaque metadata URI, fixed at mint (`max_len` must equal `MAX_URI_LEN`)
    #[max_len(200)]
    pub uri: String,

    /// Unix timestamp of the mint
    pub minted_at: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl PackToken {
    pub const SEED_PREFIX: &'static [u8] = b"pack";

    /// Maximum metadata URI length in bytes
    pub const MAX_URI_LEN: usize = 200;

    pub fn is_approved(&self, caller: &Pubkey) -> bool {
        self.approved != NULL_ACCOUNT && self.approved == *caller
    }

    /// Holder, the token's approved account, an operator of the holder,
    /// or the registry owner acting on the holder's behalf
    pub fn can_burn(&self, caller: &Pubkey, is_operator: bool, authority: &Authority) -> bool {
        *caller == self.holder || self.is_approved(caller) || is_operator || authority.is_owner(caller)
    }

    pub fn can_approve(&self, caller: &Pubkey, is_operator: bool) -> bool {
        *caller == self.holder || is_operator
    }
}
