//! 通用数据表格控制器
//!
//! 四个管理页共用的表格状态机：把 {过滤, 排序, 分页, 列显示, 行选择}
//! 五个独立状态切片归并为一个出站 SearchRequest，并把分页响应写回状态。

pub mod controller;
pub mod pagination;
pub mod schema;

pub use controller::{PageFetcher, TableQueryController};
pub use pagination::{PageItem, page_range};
pub use schema::{TableRow, TableSchema};
