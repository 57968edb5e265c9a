use anchor_lang::prelude::*;

#[error_code]
pub enum GearError {
    #[msg("Gear token does not exist")]
    TokenDoesNotExist,

    #[msg("Cannot mint to the null account")]
    InvalidRecipient,

    #[msg("Balance overflow")]
    BalanceOverflow,
}
