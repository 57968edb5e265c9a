use anchor_lang::prelude::*;
use registry_core::load_if_exists;
use crate::errors::GearError;
use crate::state::{GearBalance, GearToken, RegistryState};

#[derive(Accounts)]
#[instruction(holder: Pubkey)]
pub struct BalanceOf<'info> {
    /// CHECK: absent until `holder` receives a first Gear; read through load_if_exists
    #[account(
        seeds = [GearBalance::SEED_PREFIX, holder.as_ref()],
        bump
    )]
    pub balance: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct OwnerOf<'info> {
    /// CHECK: may not exist; read through load_if_exists
    #[account(
        seeds = [GearToken::SEED_PREFIX, token_id.to_le_bytes().as_ref()],
        bump
    )]
    pub gear: UncheckedAccount<'info>,
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
    let count = load_if_exists::<GearBalance>(&ctx.accounts.balance)?
        .map(|balance| balance.count)
        .unwrap_or(0);
    Ok(count)
}

pub fn owner_of(ctx: Context<OwnerOf>, _token_id: u64) -> Result<Pubkey> {
    gear_holder(&ctx.accounts.gear)
}

pub fn current_owner(ctx: Context<CurrentOwner>) -> Result<Pubkey> {
    Ok(ctx.accounts.registry.authority.owner)
}

fn gear_holder(gear: &AccountInfo) -> Result<Pubkey> {
    let gear = load_if_exists::<GearToken>(gear)?.ok_or(GearError::TokenDoesNotExist)?;
    Ok(gear.holder)
}
