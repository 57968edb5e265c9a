//! Building blocks shared by the Pack and Gear registry programs.
//!
//! Both registries embed an [`Authority`] and a [`TokenSequence`] by value in
//! their state account, so access control and id allocation behave the same on
//! either side of the exchange.

use anchor_lang::prelude::*;

pub mod authority;
pub mod errors;
pub mod lookup;
pub mod sequence;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use authority::*;
pub use errors::*;
pub use lookup::*;
pub use sequence::*;

/// Null account used as the `from`/`to` side of mint and burn notifications
pub const NULL_ACCOUNT: Pubkey = Pubkey::new_from_array([0u8; 32]);
