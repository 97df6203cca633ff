//! Execute handlers for the stablecoin bridge contract.
//!
//! - `lock` - outgoing transfers into custody
//! - `unlock` - relayer-reported settlements out of custody
//! - `roles` - grant, revoke and renounce
//! - `admin` - pause switch, risk limits and reserved operations

mod admin;
mod lock;
mod roles;
mod unlock;

pub use admin::*;
pub use lock::*;
pub use roles::*;
pub use unlock::*;
