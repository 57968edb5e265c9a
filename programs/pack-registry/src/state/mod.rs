pub mod balance;
pub mod operator;
pub mod pack;
pub mod registry;

pub use balance::*;
pub use operator::*;
pub use pack::*;
pub use registry::*;
