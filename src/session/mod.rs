//! 登录会话
//!
//! 会话是显式传递的对象，不是模块级全局状态：启动时从会话文件恢复，
//! 登录/更新档案时写入，登出时清除。会话文件是浏览器 localStorage
//! 的等价物，固定用 `user` 作为键。

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::{ConsoleError, Result};
use crate::models::auth::LoginUser;

// 会话文件中的键（与前端 localStorage 约定一致）
pub const USER_KEY: &str = "user";

/// 会话文件读写
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取持久化的登录用户；文件不存在视为未登录
    pub fn load(&self) -> Result<Option<LoginUser>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| ConsoleError::session_store(format!("corrupt session file: {e}")))?;
        match value.get(USER_KEY) {
            Some(Value::Null) | None => Ok(None),
            Some(user) => {
                let user: LoginUser = serde_json::from_value(user.clone())
                    .map_err(|e| ConsoleError::session_store(format!("corrupt session file: {e}")))?;
                Ok(Some(user))
            }
        }
    }

    pub fn save(&self, user: &LoginUser) -> Result<()> {
        let value = serde_json::json!({ USER_KEY: user });
        fs::write(&self.path, serde_json::to_string_pretty(&value)?)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// 登录会话对象
pub struct AuthSession {
    store: SessionStore,
    user: Option<LoginUser>,
}

impl AuthSession {
    /// 启动时从会话文件恢复
    pub fn restore(store: SessionStore) -> Result<Self> {
        let user = store.load()?;
        Ok(Self { store, user })
    }

    pub fn user(&self) -> Option<&LoginUser> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.token.as_str())
    }

    /// 是否已登录（有 token 即视为已登录）
    pub fn is_login(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }

    /// 建立/更新会话并落盘
    pub fn establish(&mut self, user: LoginUser) -> Result<()> {
        self.store.save(&user)?;
        self.user = Some(user);
        Ok(())
    }

    /// 清除会话（登出）
    pub fn clear(&mut self) -> Result<()> {
        self.user = None;
        self.store.clear()
    }
}
