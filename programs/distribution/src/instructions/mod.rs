pub mod allocate_instant;
pub mod allocate_project;
pub mod allocate_sale;
pub mod initialize;
pub mod reassign_beneficiary;
pub mod revoke;
pub mod transfer_ownership;
pub mod transfer_revoked;
pub mod withdraw;

pub use allocate_instant::*;
pub use allocate_project::*;
pub use allocate_sale::*;
pub use initialize::*;
pub use reassign_beneficiary::*;
pub use revoke::*;
pub use transfer_ownership::*;
pub use transfer_revoked::*;
pub use withdraw::*;
