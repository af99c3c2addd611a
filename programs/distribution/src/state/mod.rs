pub mod category;
pub mod distribution_state;
pub mod vesting_record;

pub use category::*;
pub use distribution_state::*;
pub use vesting_record::*;
