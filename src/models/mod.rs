pub mod auth;
pub mod common;
pub mod files;
pub mod logs;
pub mod roles;
pub mod users;

pub use common::{ApiResponse, ErrorCode, PageResult, SearchRequest, SortDirection};
