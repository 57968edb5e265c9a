use anchor_lang::prelude::*;
use registry_core::{CoreError, NULL_ACCOUNT};
use crate::events::Transfer;
use crate::state::{GearBalance, GearToken, RegistryState};

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct MintGear<'info> {
    /// Registry owner; the Pack registry PDA signs here during a Pack burn
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryState::SEED_PREFIX],
        bump = registry.bump,
        constraint = registry.authority.is_owner(&authority.key()) @ CoreError::Unauthorized
    )]
    pub registry: Account<'info, RegistryState>,

    #[account(
        init,
        payer = payer,
        space = 8 + GearToken::INIT_SPACE,
        seeds = [
            GearToken::SEED_PREFIX,
            registry.sequence.next_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub gear: Account<'info, GearToken>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + GearBalance::INIT_SPACE,
        seeds = [GearBalance::SEED_PREFIX, recipient.as_ref()],
        bump
    )]
    pub recipient_balance: Account<'info, GearBalance>,

    /// Funds the new accounts (the burner, when called from the Pack registry)
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MintGear>, recipient: Pubkey) -> Result<u64> {
    let registry = &mut ctx.accounts.registry;
    let gear = &mut ctx.accounts.gear;
    let balance = &mut ctx.accounts.recipient_balance;
    let clock = Clock::get()?;

    balance.bind(recipient, ctx.bumps.recipient_balance);
    gear.bump = ctx.bumps.gear;

    let token_id = registry.record_mint(gear, balance, recipient, clock.unix_timestamp)?;

    emit!(Transfer {
        from: NULL_ACCOUNT,
        to: recipient,
        token_id,
    });

    msg!("Gear minted: id={}, recipient={}", token_id, recipient);

    Ok(token_id)
}
