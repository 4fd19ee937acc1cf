//! 弹框表单生命周期
//!
//! 新增/编辑弹框统一用命名状态机表达：
//! Closed → Open → Submitting → Closed（成功）/ Error（失败，可重试）。
//! 非法迁移（双重提交、关闭提交中的弹框）返回错误而不是被悄悄吞掉。

use crate::errors::{ConsoleError, Result};

/// 弹框所处阶段
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Closed,
    Open,
    Submitting,
    /// 提交失败：弹框保持打开，携带服务端消息
    Error(String),
}

#[derive(Debug, Default)]
pub struct DialogMachine {
    phase: DialogPhase,
}

impl DialogMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DialogPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.phase, DialogPhase::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, DialogPhase::Submitting)
    }

    /// 打开弹框（仅 Closed 状态允许）
    pub fn open(&mut self) -> Result<()> {
        match self.phase {
            DialogPhase::Closed => {
                self.phase = DialogPhase::Open;
                Ok(())
            }
            _ => Err(self.invalid("open")),
        }
    }

    /// 关闭弹框（提交中不允许关闭；调用方在关闭后重置表单）
    pub fn close(&mut self) -> Result<()> {
        match self.phase {
            DialogPhase::Open | DialogPhase::Error(_) => {
                self.phase = DialogPhase::Closed;
                Ok(())
            }
            _ => Err(self.invalid("close")),
        }
    }

    /// 开始提交；已在提交中的再次提交会被拒绝
    pub fn begin_submit(&mut self) -> Result<()> {
        match self.phase {
            DialogPhase::Open | DialogPhase::Error(_) => {
                self.phase = DialogPhase::Submitting;
                Ok(())
            }
            _ => Err(self.invalid("begin_submit")),
        }
    }

    /// 提交成功：弹框关闭
    pub fn submit_ok(&mut self) -> Result<()> {
        match self.phase {
            DialogPhase::Submitting => {
                self.phase = DialogPhase::Closed;
                Ok(())
            }
            _ => Err(self.invalid("submit_ok")),
        }
    }

    /// 提交失败：弹框保持打开并记录消息
    pub fn submit_err(&mut self, message: impl Into<String>) -> Result<()> {
        match self.phase {
            DialogPhase::Submitting => {
                self.phase = DialogPhase::Error(message.into());
                Ok(())
            }
            _ => Err(self.invalid("submit_err")),
        }
    }

    fn invalid(&self, action: &str) -> ConsoleError {
        ConsoleError::dialog_transition(format!(
            "cannot {action} from {:?}",
            self.phase
        ))
    }
}
