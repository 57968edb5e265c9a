use anchor_lang::prelude::*;
use registry_core::{CoreError, NULL_ACCOUNT};
use crate::events::Transfer;
use crate::state::{PackBalance, PackToken, RegistryState};

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct MintPack<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryState::SEED_PREFIX],
        bump = registry.bump,
        constraint = registry.authority.is_owner(&owner.key()) @ CoreError::Unauthorized
    )]
    pub registry: Account<'info, RegistryState>,

    #[account(
        init,
        payer = owner,
        space = 8 + PackToken::INIT_SPACE,
        seeds = [
            PackToken::SEED_PREFIX,
            registry.sequence.next_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub pack: Account<'info, PackToken>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + PackBalance::INIT_SPACE,
        seeds = [PackBalance::SEED_PREFIX, recipient.as_ref()],
        bump
    )]
    pub recipient_balance: Account<'info, PackBalance>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MintPack>, recipient: Pubkey, uri: String) -> Result<u64> {
    let registry = &mut ctx.accounts.registry;
    let pack = &mut ctx.accounts.pack;
    let balance = &mut ctx.accounts.recipient_balance;
    let clock = Clock::get()?;

    balance.bind(recipient, ctx.bumps.recipient_balance);
    pack.bump = ctx.bumps.pack;

    let token_id = registry.record_mint(pack, balance, recipient, uri, clock.unix_timestamp)?;

    emit!(Transfer {
        from: NULL_ACCOUNT,
        to: recipient,
        token_id,
    });

    msg!(
        "Pack minted: id={}, recipient={}, uri={}",
        token_id,
        recipient,
        pack.uri
    );

    Ok(token_id)
}
