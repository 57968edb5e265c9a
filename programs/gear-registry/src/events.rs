use anchor_lang::prelude::*;

/// Gear ownership change; `from` is the null account on mint
#[event]
pub struct Transfer {
    pub from: Pubkey,
    pub to: Pubkey,
    pub token_id: u64,
}
