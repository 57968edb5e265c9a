use anchor_lang::prelude::*;
use gear_registry::program::GearRegistry;
use gear_registry::state::RegistryState as GearRegistryState;
use registry_core::{load_if_exists, open_if_exists, NULL_ACCOUNT};
use crate::errors::PackError;
use crate::events::Transfer;
use crate::state::{OperatorApproval, PackBalance, PackToken, RegistryState};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct BurnPack<'info> {
    /// Holder, approved account, operator or registry owner; pays for the Gear
    /// accounts and receives the Pack account's rent
    #[account(mut)]
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryState::SEED_PREFIX],
        bump = registry.bump,
        has_one = gear_registry @ PackError::GearRegistryMismatch
    )]
    pub registry: Account<'info, RegistryState>,

    /// CHECK: may be unminted or already burned; loaded in the handler so both
    /// cases report TokenDoesNotExist
    #[account(
        mut,
        seeds = [PackToken::SEED_PREFIX, token_id.to_le_bytes().as_ref()],
        bump
    )]
    pub pack: UncheckedAccount<'info>,

    /// CHECK: balance PDA of the Pack's holder; derived from the loaded token
    /// in the handler, since the holder is unknown until the token exists
    #[account(mut)]
    pub holder_balance: UncheckedAccount<'info>,

    /// CHECK: holder-wide approval of the caller, when burning as an operator;
    /// derived from the loaded token in the handler
    pub operator_approval: Option<UncheckedAccount<'info>>,

    #[account(mut)]
    pub gear_registry: Account<'info, GearRegistryState>,

    /// CHECK: created by the Gear program at its next id
    #[account(mut)]
    pub gear: UncheckedAccount<'info>,

    /// CHECK: created or updated by the Gear program for the Pack holder
    #[account(mut)]
    pub gear_balance: UncheckedAccount<'info>,

    pub gear_program: Program<'info, GearRegistry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<BurnPack>, token_id: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();

    let holder = retire_pack(
        &mut ctx.accounts.registry,
        ctx.accounts.caller.to_account_info(),
        token_id,
        ctx.accounts.pack.to_account_info(),
        ctx.accounts.holder_balance.to_account_info(),
        ctx.accounts
            .operator_approval
            .as_ref()
            .map(|approval| approval.to_account_info()),
    )?;

    emit!(Transfer {
        from: holder,
        to: NULL_ACCOUNT,
        token_id,
    });

    msg!("Pack burned: id={}, holder={}, caller={}", token_id, holder, caller);

    // Any failure here aborts the transaction, Pack burn included
    let gear_id = issue_gear(ctx.accounts, holder)?;

    msg!(
        "Gear issued for pack {}: gear id={}, recipient={}",
        token_id,
        gear_id,
        holder
    );

    Ok(())
}

/// Pack side of a burn: existence, holder accounts, authorization, then the
/// balance write-back and the token close (rent to `caller`).
///
/// Returns the former holder.
pub(crate) fn retire_pack<'info>(
    registry: &mut RegistryState,
    caller: AccountInfo<'info>,
    token_id: u64,
    pack: AccountInfo<'info>,
    holder_balance: AccountInfo<'info>,
    operator_approval: Option<AccountInfo<'info>>,
) -> Result<Pubkey> {
    require!(
        registry.sequence.was_issued(token_id),
        PackError::TokenDoesNotExist
    );
    let pack = open_if_exists::<PackToken>(pack)?.ok_or(PackError::TokenDoesNotExist)?;

    let (balance_address, _) = Pubkey::find_program_address(
        &[PackBalance::SEED_PREFIX, pack.holder.as_ref()],
        &crate::ID,
    );
    require_keys_eq!(holder_balance.key(), balance_address, PackError::HolderMismatch);
    let mut balance =
        open_if_exists::<PackBalance>(holder_balance)?.ok_or(PackError::HolderMismatch)?;

    let is_operator = match operator_approval {
        Some(info) => {
            let (approval_address, _) = Pubkey::find_program_address(
                &[
                    OperatorApproval::SEED_PREFIX,
                    pack.holder.as_ref(),
                    caller.key.as_ref(),
                ],
                &crate::ID,
            );
            require_keys_eq!(
                info.key(),
                approval_address,
                PackError::OperatorApprovalMismatch
            );
            load_if_exists::<OperatorApproval>(&info)?.is_some_and(|approval| approval.approved)
        }
        None => false,
    };

    let holder = registry.record_burn(caller.key, &pack, &mut balance, is_operator)?;

    balance.exit(&crate::ID)?;
    pack.close(caller)?;

    Ok(holder)
}

/// Mint one Gear to `holder`, signing as the Pack registry PDA
fn issue_gear(accounts: &BurnPack<'_>, holder: Pubkey) -> Result<u64> {
    let bump = [accounts.registry.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[RegistryState::SEED_PREFIX, &bump]];

    let cpi_accounts = gear_registry::cpi::accounts::MintGear {
        authority: accounts.registry.to_account_info(),
        registry: accounts.gear_registry.to_account_info(),
        gear: accounts.gear.to_account_info(),
        recipient_balance: accounts.gear_balance.to_account_info(),
        payer: accounts.caller.to_account_info(),
        system_program: accounts.system_program.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        accounts.gear_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );

    Ok(gear_registry::cpi::mint_gear(cpi_ctx, holder)?.get())
}
