pub mod initialize;
pub mod mint_pack;
pub mod burn_pack;
pub mod approve;
pub mod set_approval_for_all;
pub mod transfer_authority;
pub mod queries;

pub use initialize::*;
pub use mint_pack::*;
pub use burn_pack::*;
pub use approve::*;
pub use set_approval_for_all::*;
pub use transfer_authority::*;
pub use queries::*;
