use anchor_lang::prelude::*;

#[error_code]
pub enum PackError {
    #[msg("Caller is not the holder, an approved account, or the registry owner")]
    NotAuthorizedToBurn,

    // Never minted and already burned are the same failure
    #[msg("Pack token does not exist")]
    TokenDoesNotExist,

    #[msg("Caller is neither the holder nor an approved operator")]
    NotAuthorizedToApprove,

    #[msg("Cannot mint to the null account")]
    InvalidRecipient,

    #[msg("Metadata URI is too long (max 200 characters)")]
    UriTooLong,

    #[msg("Holder cannot approve themselves as operator")]
    SelfApproval,

    #[msg("Balance account does not belong to the token holder")]
    HolderMismatch,

    #[msg("Operator approval account does not belong to the holder and caller")]
    OperatorApprovalMismatch,

    #[msg("Gear registry does not match the one configured at initialization")]
    GearRegistryMismatch,

    #[msg("Balance underflow")]
    BalanceUnderflow,

    #[msg("Balance overflow")]
    BalanceOverflow,
}
