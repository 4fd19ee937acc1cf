//! Admin Console - 后台管理控制台核心
//!
//! 面向 REST 后端的无界面管理控制台：认证会话、用户/角色/登录日志/
//! 文件四个管理页，以及它们共用的表格查询状态机。
//!
//! # 架构
//! - `api`: REST 接口调用层（reqwest）
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `flows`: 批量删除确认、弹框生命周期
//! - `forms`: 表单字段校验
//! - `models`: 数据模型定义
//! - `notify`: 瞬时通知出口
//! - `pages`: 管理页装配层
//! - `session`: 登录会话与本地持久化
//! - `table`: 通用表格查询控制器
//! - `utils`: 工具函数

pub mod api;
pub mod config;
pub mod errors;
pub mod flows;
pub mod forms;
pub mod models;
pub mod notify;
pub mod pages;
pub mod session;
pub mod table;
pub mod utils;
