//! 批量删除流程
//!
//! 删除逐条顺序执行，遇到第一个失败立即中止后续删除；
//! 无论成败，结束回调都会执行（页面用它触发 reset 刷新）。

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::ApiResponse;
use crate::notify::Notifier;

/// 单行删除的外部接口（每个管理页对应一个 delete 端点）
#[async_trait]
pub trait RowDeleter: Send + Sync {
    async fn delete_row(&self, id: &str) -> Result<ApiResponse<()>>;
}

/// 批量删除的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// 入参为空：流程不做任何事，确认框也没有内容
    Inert,
    /// 全部删除成功
    Completed { deleted: usize },
    /// 中途失败：已删 deleted 条，failed_id 之后的都没有执行
    Aborted { deleted: usize, failed_id: String },
}

impl BatchOutcome {
    /// 是否需要刷新列表（只要真正执行过删除就需要）
    pub fn needs_refresh(&self) -> bool {
        !matches!(self, BatchOutcome::Inert)
    }
}

/// 确认框文案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmBody {
    pub title: String,
    pub description: String,
}

/// 删除确认流程
pub struct DeleteConfirm {
    ids: Vec<String>,
}

impl DeleteConfirm {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }

    /// 确认框内容；id 列表为空时没有内容可渲染
    pub fn body(&self) -> Option<ConfirmBody> {
        if self.ids.is_empty() {
            return None;
        }
        Some(ConfirmBody {
            title: format!("确定删除这 {} 条数据吗?", self.ids.len()),
            description: "删除后将无法恢复".to_string(),
        })
    }

    /// 执行批量删除
    ///
    /// 空列表直接返回 Inert，不调删除接口也不执行结束回调；
    /// 否则逐条顺序删除，首个 code != 200 的响应中止流程并上报其消息，
    /// 结束回调仍然执行。
    pub async fn confirm<F>(
        &self,
        deleter: &dyn RowDeleter,
        notifier: &dyn Notifier,
        on_finish: F,
    ) -> BatchOutcome
    where
        F: FnOnce(),
    {
        if self.ids.is_empty() {
            return BatchOutcome::Inert;
        }

        let mut deleted = 0usize;
        for id in &self.ids {
            match deleter.delete_row(id).await {
                Ok(resp) if resp.is_success() => {
                    deleted += 1;
                }
                Ok(resp) => {
                    notifier.error(&resp.message);
                    on_finish();
                    return BatchOutcome::Aborted {
                        deleted,
                        failed_id: id.clone(),
                    };
                }
                Err(e) => {
                    // 传输层错误同样中止，消息尽量取出来给用户
                    notifier.error(&e.to_string());
                    on_finish();
                    return BatchOutcome::Aborted {
                        deleted,
                        failed_id: id.clone(),
                    };
                }
            }
        }

        notifier.success(&format!("删除成功，共 {deleted} 条"));
        on_finish();
        BatchOutcome::Completed { deleted }
    }
}
