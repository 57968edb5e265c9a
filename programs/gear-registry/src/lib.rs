use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("6mcdLmsRV4QpAtnacnS4b6eV79tDFG2hdxAvJpWgfP3W");

#[program]
pub mod gear_registry {
    use super::*;

    /// Create the registry state; the signer becomes its owner
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Mint one Gear to `recipient` (owner only).
    /// After setup the owner is the Pack registry PDA, so this is reached through
    /// the Pack registry's burn.
    pub fn mint_gear(ctx: Context<MintGear>, recipient: Pubkey) -> Result<u64> {
        instructions::mint_gear::handler(ctx, recipient)
    }

    /// Hand registry ownership to another account (owner only)
    pub fn transfer_authority(ctx: Context<TransferAuthority>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_authority::handler(ctx, new_owner)
    }

    /// Number of Gear tokens held by `holder`
    pub fn balance_of(ctx: Context<BalanceOf>, holder: Pubkey) -> Result<u64> {
        instructions::queries::balance_of(ctx, holder)
    }

    /// Current holder of a Gear token
    pub fn owner_of(ctx: Context<OwnerOf>, token_id: u64) -> Result<Pubkey> {
        instructions::queries::owner_of(ctx, token_id)
    }

    /// Account currently allowed to mint Gear
    pub fn current_owner(ctx: Context<CurrentOwner>) -> Result<Pubkey> {
        instructions::queries::current_owner(ctx)
    }
}
