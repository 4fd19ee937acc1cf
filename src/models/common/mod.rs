pub mod page;
pub mod response;
pub mod search;

pub use page::PageResult;
pub use response::{ApiResponse, ErrorCode};
pub use search::{FIELD_CREATE_TIME, FIELD_LOGIN_TIME, FIELD_UPDATE_TIME, SearchRequest, SortDirection};
