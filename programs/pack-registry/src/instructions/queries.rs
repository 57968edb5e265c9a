use anchor_lang::prelude::*;
use registry_core::load_if_exists;
use crate::errors::PackError;
use crate::state::{PackBalance, PackToken, RegistryState};

#[derive(Accounts)]
#[instruction(holder: Pubkey)]
pub struct BalanceOf<'info> {
    /// CHECK: absent until `holder` receives a first Pack; read through load_if_exists
    #[account(
        seeds = [PackBalance::SEED_PREFIX, holder.as_ref()],
        bump
    )]
    pub balance: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct OwnerOf<'info> {
    /// CHECK: may be unminted or burned; read through load_if_exists
    #[account(
        seeds = [PackToken::SEED_PREFIX, token_id.to_le_bytes().as_ref()],
        bump
    )]
    pub pack: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct TokenUri<'info> {
    /// CHECK: may be unminted or burned; read through load_if_exists
    #[account(
        seeds = [PackToken::SEED_PREFIX, token_id.to_le_bytes().as_ref()],
        bump
    )]
    pub pack: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct CurrentOwner<'info> {
    #[account(
        seeds = [RegistryState::SEED_PREFIX],
        bump = registry.bump
    )]
    pub registry: Account<'info, RegistryState>,
}

pub fn balance_of(ctx: Context<BalanceOf>, _holder: Pubkey) -> Result<u64> {
    held_count(&ctx.accounts.balance)
}

pub fn owner_of(ctx: Context<OwnerOf>, _token_id: u64) -> Result<Pubkey> {
    Ok(existing_pack(&ctx.accounts.pack)?.holder)
}

pub fn token_uri(ctx: Context<TokenUri>, _token_id: u64) -> Result<String> {
    Ok(existing_pack(&ctx.accounts.pack)?.uri)
}

pub fn current_owner(ctx: Context<CurrentOwner>) -> Result<Pubkey> {
    Ok(ctx.accounts.registry.authority.owner)
}

/// Zero until the holder receives a first Pack
fn held_count(balance: &AccountInfo) -> Result<u64> {
    Ok(load_if_exists::<PackBalance>(balance)?.map_or(0, |balance| balance.count))
}

fn existing_pack(pack: &AccountInfo) -> Result<PackToken> {
    Ok(load_if_exists::<PackToken>(pack)?.ok_or(PackError::TokenDoesNotExist)?)
}
