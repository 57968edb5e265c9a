use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

#[cfg(test)]
mod tests;

use instructions::*;

declare_id!("5VRKhFV7z3FSi7KEgYnAVv9TSWyfWCqXkZitUbiq7jDG");

#[program]
pub mod pack_registry {
    use super::*;

    /// Initialize the Pack registry, pointing it at the Gear registry it will mint from.
    /// The signer becomes the Pack minter.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Mint a Pack to `recipient` with an immutable metadata URI (owner only)
    pub fn mint_pack(ctx: Context<MintPack>, recipient: Pubkey, uri: String) -> Result<u64> {
        instructions::mint_pack::handler(ctx, recipient, uri)
    }

    /// Burn a Pack and issue one Gear to its holder in the same transaction.
    /// Callable by the holder, an approved account, or the registry owner.
    pub fn burn_pack(ctx: Context<BurnPack>, token_id: u64) -> Result<()> {
        instructions::burn_pack::handler(ctx, token_id)
    }

    /// Approve a single account to burn one Pack (`Pubkey::default()` clears it)
    pub fn approve(ctx: Context<Approve>, token_id: u64, approved: Pubkey) -> Result<()> {
        instructions::approve::handler(ctx, token_id, approved)
    }

    /// Grant or revoke an operator's right to burn all of the signer's Packs
    pub fn set_approval_for_all(
        ctx: Context<SetApprovalForAll>,
        operator: Pubkey,
        approved: bool,
    ) -> Result<()> {
        instructions::set_approval_for_all::handler(ctx, operator, approved)
    }

    /// Hand the minter role to another account (owner only)
    pub fn transfer_authority(ctx: Context<TransferAuthority>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_authority::handler(ctx, new_owner)
    }

    /// Number of Packs held by `holder`
    pub fn balance_of(ctx: Context<BalanceOf>, holder: Pubkey) -> Result<u64> {
        instructions::queries::balance_of(ctx, holder)
    }

    /// Current holder of a Pack
    pub fn owner_of(ctx: Context<OwnerOf>, token_id: u64) -> Result<Pubkey> {
        instructions::queries::owner_of(ctx, token_id)
    }

    /// Metadata URI recorded at mint
    pub fn token_uri(ctx: Context<TokenUri>, token_id: u64) -> Result<String> {
        instructions::queries::token_uri(ctx, token_id)
    }

    /// Account currently allowed to mint Packs
    pub fn current_owner(ctx: Context<CurrentOwner>) -> Result<Pubkey> {
        instructions::queries::current_owner(ctx)
    }
}
