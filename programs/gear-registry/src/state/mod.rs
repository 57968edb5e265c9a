pub mod balance;
pub mod gear;
pub mod registry;

pub use balance::*;
pub use gear::*;
pub use registry::*;
