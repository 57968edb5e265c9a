use anchor_lang::prelude::*;

#[error_code(offset = 7000)]
pub enum CoreError {
    #[msg("Unauthorized: caller is not the registry owner")]
    Unauthorized,

    #[msg("New owner must not be the null account")]
    InvalidOwner,

    #[msg("Token id sequence is exhausted")]
    SequenceExhausted,

    #[msg("Live supply underflow")]
    SupplyUnderflow,
}
