use anchor_lang::prelude::*;
use crate::errors::PackError;
use crate::events::Approval;
use crate::state::{OperatorApproval, PackToken};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct Approve<'info> {
    /// Holder, or an operator approved by the holder
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [PackToken::SEED_PREFIX, token_id.to_le_bytes().as_ref()],
        bump = pack.bump
    )]
    pub pack: Account<'info, PackToken>,

    #[account(
        seeds = [
            OperatorApproval::SEED_PREFIX,
            pack.holder.as_ref(),
            caller.key().as_ref()
        ],
        bump = operator_approval.bump
    )]
    pub operator_approval: Option<Account<'info, OperatorApproval>>,
}

pub fn handler(ctx: Context<Approve>, token_id: u64, approved: Pubkey) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let is_operator = ctx
        .accounts
        .operator_approval
        .as_ref()
        .is_some_and(|approval| approval.approved);
    let pack = &mut ctx.accounts.pack;

    require!(
        pack.can_approve(&caller, is_operator),
        PackError::NotAuthorizedToApprove
    );

    pack.approved = approved;

    emit!(Approval {
        holder: pack.holder,
        approved,
        token_id,
    });

    msg!("Pack approval set: id={}, approved={}", token_id, approved);

    Ok(())
}
