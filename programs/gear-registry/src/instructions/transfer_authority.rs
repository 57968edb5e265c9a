use anchor_lang::prelude::*;
use registry_core::AuthorityTransferred;
use crate::state::RegistryState;

#[derive(Accounts)]
pub struct TransferAuthority<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryState::SEED_PREFIX],
        bump = registry.bump
    )]
    pub registry: Account<'info, RegistryState>,
}

/// Setup hands this to the Pack registry PDA, making the Pack registry the only minter
pub fn handler(ctx: Context<TransferAuthority>, new_owner: Pubkey) -> Result<()> {
    let registry_key = ctx.accounts.registry.key();
    let caller = ctx.accounts.owner.key();
    let registry = &mut ctx.accounts.registry;

    if let Some(previous_owner) = registry.authority.transfer(&caller, new_owner)? {
        emit!(AuthorityTransferred {
            registry: registry_key,
            previous_owner,
            new_owner,
        });

        msg!(
            "Gear registry authority transferred: {} -> {}",
            previous_owner,
            new_owner
        );
    }

    Ok(())
}
