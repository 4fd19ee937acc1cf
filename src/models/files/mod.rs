pub mod entities;

pub use entities::FileVo;
