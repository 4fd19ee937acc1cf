pub mod entities;
pub mod requests;

pub use entities::LoginUser;
pub use requests::{LoginParam, RegisterParam};
