use anchor_lang::prelude::*;
use gear_registry::state::RegistryState as GearRegistryState;
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

    /// The Gear registry burns will mint into; its authority is handed to
    /// `registry` afterwards
    pub gear_registry: Account<'info, GearRegistryState>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;

    registry.authority = Authority::new(ctx.accounts.owner.key());
    registry.sequence = TokenSequence::new();
    registry.gear_registry = ctx.accounts.gear_registry.key();
    registry.bump = ctx.bumps.registry;

    msg!(
        "Pack registry initialized: owner={}, gear registry={}, signer={}",
        registry.authority.owner,
        registry.gear_registry,
        registry.key()
    );

    Ok(())
}
