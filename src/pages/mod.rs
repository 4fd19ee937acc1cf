//! 管理页装配层
//!
//! 每个实体页只声明列集合（可过滤/可排序）、对应的 API 端点和增删改
//! 流程；过滤/排序/分页/选择的状态机全部复用 table::TableQueryController，
//! 不再按页面各写一份。

use std::collections::BTreeMap;

pub mod files;
pub mod logs;
pub mod roles;
pub mod users;

pub use files::FileManagePage;
pub use logs::LogManagePage;
pub use roles::RoleManagePage;
pub use users::UserManagePage;

/// 弹框表单提交结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 已保存并触发列表刷新
    Saved,
    /// 字段校验失败：字段名 → 错误消息，按字段就地渲染，未发请求
    Invalid(BTreeMap<String, String>),
    /// 服务端拒绝（code != 200），弹框保持打开
    Rejected(String),
}
