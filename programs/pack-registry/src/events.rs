use anchor_lang::prelude::*;

/// Pack ownership change. Mints come from the null account, burns go to it.
#[event]
pub struct Transfer {
    pub from: Pubkey,
    pub to: Pubkey,
    pub token_id: u64,
}

#[event]
pub struct Approval {
    pub holder: Pubkey,
    pub approved: Pubkey,
    pub token_id: u64,
}

#[event]
pub struct ApprovalForAll {
    pub holder: Pubkey,
    pub operator: Pubkey,
    pub approved: bool,
}
