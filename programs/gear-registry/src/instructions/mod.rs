pub mod initialize;
pub mod mint_gear;
pub mod transfer_authority;
pub mod queries;

pub use initialize::*;
pub use mint_gear::*;
pub use transfer_authority::*;
pub use queries::*;
