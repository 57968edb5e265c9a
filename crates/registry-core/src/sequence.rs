use anchor_lang::prelude::*;

use crate::errors::CoreError;

/// Monotonic token id allocator plus a count of live (unburned) tokens.
///
/// Ids start at [`TokenSequence::FIRST_ID`] and are never handed out twice,
/// burned ids included.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct TokenSequence {
    /// Id the next mint receives
    pub next_id: u64,

    /// Tokens minted and not yet burned
    pub live_supply: u64,
}

impl Default for TokenSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSequence {
    pub const FIRST_ID: u64 = 1;

    pub fn new() -> Self {
        Self {
            next_id: Self::FIRST_ID,
            live_supply: 0,
        }
    }

    /// Allocate the next id and count it as live
    pub fn issue(&mut self) -> Result<u64> {
        let token_id = self.next_id;
        self.next_id = token_id
            .checked_add(1)
            .ok_or(CoreError::SequenceExhausted)?;
        self.live_supply = self
            .live_supply
            .checked_add(1)
            .ok_or(CoreError::SequenceExhausted)?;
        Ok(token_id)
    }

    /// Record that a live token was burned. The id itself stays consumed.
    pub fn retire(&mut self) -> Result<()> {
        self.live_supply = self
            .live_supply
            .checked_sub(1)
            .ok_or(CoreError::SupplyUnderflow)?;
        Ok(())
    }

    /// Whether `token_id` was ever allocated (it may since have been burned)
    pub fn was_issued(&self, token_id: u64) -> bool {
        (Self::FIRST_ID..self.next_id).contains(&token_id)
    }
}
