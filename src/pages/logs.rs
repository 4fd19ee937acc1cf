//! 登录日志管理页
//!
//! 只读列表加批量删除，没有新增/编辑弹框。

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{self, ApiClient};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::flows::{BatchOutcome, DeleteConfirm, RowDeleter};
use crate::models::common::FIELD_LOGIN_TIME;
use crate::models::logs::LoginLogVo;
use crate::models::{ApiResponse, PageResult, SearchRequest};
use crate::notify::Notifier;
use crate::table::{PageFetcher, TableQueryController, TableSchema};

const FILTERABLE: &[&str] = &["username", "ipAddr"];
const SORTABLE: &[&str] = &[FIELD_LOGIN_TIME];

struct LogListFetcher {
    client: Arc<ApiClient>,
}

#[async_trait]
impl PageFetcher<LoginLogVo> for LogListFetcher {
    async fn fetch(&self, request: &SearchRequest) -> Result<ApiResponse<PageResult<LoginLogVo>>> {
        api::logs::list(&self.client, request).await
    }
}

struct LogRowDeleter {
    client: Arc<ApiClient>,
}

#[async_trait]
impl RowDeleter for LogRowDeleter {
    async fn delete_row(&self, id: &str) -> Result<ApiResponse<()>> {
        Ok(api::logs::delete(&self.client, id).await?.into_status())
    }
}

pub struct LogManagePage {
    client: Arc<ApiClient>,
    notifier: Arc<dyn Notifier>,
    controller: TableQueryController<LoginLogVo>,
}

impl LogManagePage {
    pub fn new(client: Arc<ApiClient>, notifier: Arc<dyn Notifier>) -> Self {
        let table = &AppConfig::get().table;
        let schema = TableSchema::new(FILTERABLE, SORTABLE)
            .with_page_sizes(&table.page_size_options, table.default_page_size);
        let controller = TableQueryController::new(
            schema,
            Arc::new(LogListFetcher {
                client: client.clone(),
            }),
            notifier.clone(),
        );
        Self {
            client,
            notifier,
            controller,
        }
    }

    pub fn controller(&mut self) -> &mut TableQueryController<LoginLogVo> {
        &mut self.controller
    }

    /// 批量删除选中日志
    pub async fn delete_selected(&mut self) -> BatchOutcome {
        let flow = DeleteConfirm::new(self.controller.selected_ids());
        let deleter = LogRowDeleter {
            client: self.client.clone(),
        };
        let mut finished = false;
        let outcome = flow
            .confirm(&deleter, self.notifier.as_ref(), || finished = true)
            .await;
        if finished {
            self.controller.reset().await;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortDirection;
    use crate::notify::TracingNotifier;

    fn page() -> LogManagePage {
        LogManagePage::new(
            Arc::new(ApiClient::new("http://127.0.0.1:8080/api")),
            Arc::new(TracingNotifier),
        )
    }

    #[test]
    fn test_only_login_time_is_sortable() {
        let mut page = page();
        page.controller().set_filter("username", "admin");
        let request = page.controller().derived_request();
        assert_eq!(
            request.filters.get("username").map(String::as_str),
            Some("admin")
        );
        // createTime 不在日志页的可排序集合里
        assert!(request.sort.is_none());
    }

    #[tokio::test]
    async fn test_empty_selection_delete_is_inert() {
        let mut page = page();
        let outcome = page.delete_selected().await;
        assert_eq!(outcome, BatchOutcome::Inert);
        assert!(!outcome.needs_refresh());
    }

    #[test]
    fn test_login_time_sort_serializes_as_flat_key() {
        let mut request = SearchRequest::new(1, 10);
        request.sort = Some((FIELD_LOGIN_TIME.to_string(), SortDirection::Desc));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["loginTimeSort"], "desc");
    }
}
