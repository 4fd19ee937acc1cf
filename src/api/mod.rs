//! REST 接口调用层
//!
//! 每个实体一个模块，对应后端的 list/get/save/delete 端点；
//! 成功与否只看响应体里的 code 字段，不看 HTTP 状态码。

pub mod auth;
pub mod client;
pub mod files;
pub mod logs;
pub mod roles;
pub mod users;

pub use client::ApiClient;
