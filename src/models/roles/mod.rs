pub mod entities;
pub mod requests;

pub use entities::{RoleVo, STATUS_DISABLED, STATUS_ENABLED};
pub use requests::{RoleParam, UserRoleParam};
