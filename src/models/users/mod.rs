pub mod entities;
pub mod requests;

pub use entities::UserVo;
pub use requests::UserParam;
