use anchor_lang::prelude::*;
use crate::events::ApprovalForAll;
use crate::state::OperatorApproval;

#[derive(Accounts)]
#[instruction(operator: Pubkey)]
pub struct SetApprovalForAll<'info> {
    #[account(mut)]
    pub holder: Signer<'info>,

    #[account(
        init_if_needed,
        payer = holder,
        space = 8 + OperatorApproval::INIT_SPACE,
        seeds = [
            OperatorApproval::SEED_PREFIX,
            holder.key().as_ref(),
            operator.as_ref()
        ],
        bump
    )]
    pub operator_approval: Account<'info, OperatorApproval>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SetApprovalForAll>, operator: Pubkey, approved: bool) -> Result<()> {
    let holder = ctx.accounts.holder.key();
    ctx.accounts.operator_approval.set(
        holder,
        operator,
        approved,
        ctx.bumps.operator_approval,
    )?;

    emit!(ApprovalForAll {
        holder,
        operator,
        approved,
    });

    msg!(
        "Operator approval: holder={}, operator={}, approved={}",
        holder,
        operator,
        approved
    );

    Ok(())
}
