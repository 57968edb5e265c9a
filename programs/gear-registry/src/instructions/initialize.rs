use anchor_lang::prelude::*;
use registry_core::{Authority, TokenSequence};
use crate::state::RegistryState;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + RegistryState::INIT_SPACE,
        seeds = [RegistryState::SEED_PREFIX],
        bump
    )]
    pub registry: Account<'info, RegistryState>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    registry.authority = Authority::new(ctx.accounts.owner.key());
    registry.sequence = TokenSequence::new();
    registry.bump = ctx.bumps.registry;

    msg!("Gear registry initialized with owner: {}", registry.authority.owner);

    Ok(())
}
