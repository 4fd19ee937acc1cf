//! 文件管理页
//!
//! 列表加批量删除与上传；上传前按配置做本地校验，不合规的文件
//! 不发请求，上传成功后重置列表回到第一页。

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{self, ApiClient};
use crate::config::AppConfig;
use crate::errors::{ConsoleError, Result};
use crate::flows::{BatchOutcome, DeleteConfirm, RowDeleter};
use crate::models::common::{FIELD_CREATE_TIME, FIELD_UPDATE_TIME};
use crate::models::files::FileVo;
use crate::models::{ApiResponse, PageResult, SearchRequest};
use crate::notify::Notifier;
use crate::table::{PageFetcher, TableQueryController, TableSchema};

const FILTERABLE: &[&str] = &["name", "type", "path"];
const SORTABLE: &[&str] = &[FIELD_CREATE_TIME, FIELD_UPDATE_TIME];

struct FileListFetcher {
    client: Arc<ApiClient>,
}

#[async_trait]
impl PageFetcher<FileVo> for FileListFetcher {
    async fn fetch(&self, request: &SearchRequest) -> Result<ApiResponse<PageResult<FileVo>>> {
        api::files::list(&self.client, request).await
    }
}

struct FileRowDeleter {
    client: Arc<ApiClient>,
}

#[async_trait]
impl RowDeleter for FileRowDeleter {
    async fn delete_row(&self, id: &str) -> Result<ApiResponse<()>> {
        Ok(api::files::delete(&self.client, id).await?.into_status())
    }
}

pub struct FileManagePage {
    client: Arc<ApiClient>,
    notifier: Arc<dyn Notifier>,
    controller: TableQueryController<FileVo>,
}

impl FileManagePage {
    pub fn new(client: Arc<ApiClient>, notifier: Arc<dyn Notifier>) -> Self {
        let table = &AppConfig::get().table;
        let schema = TableSchema::new(FILTERABLE, SORTABLE)
            .with_page_sizes(&table.page_size_options, table.default_page_size);
        let controller = TableQueryController::new(
            schema,
            Arc::new(FileListFetcher {
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

    pub fn controller(&mut self) -> &mut TableQueryController<FileVo> {
        &mut self.controller
    }

    /// 上传文件并刷新列表
    ///
    /// 本地校验（大小/扩展名）失败时直接报错，不发请求。
    pub async fn upload(&mut self, file_name: &str, bytes: Vec<u8>) -> Result<FileVo> {
        let resp = match api::files::upload(&self.client, file_name, bytes).await {
            Ok(resp) => resp,
            Err(e) => {
                self.notifier.error(&e.to_string());
                return Err(e);
            }
        };
        if !resp.is_success() {
            self.notifier.error(&resp.message);
            return Err(ConsoleError::api(resp.message));
        }
        let file = resp
            .data
            .ok_or_else(|| ConsoleError::api("上传响应缺少 data"))?;
        self.notifier.success("上传成功");
        self.controller.reset().await;
        Ok(file)
    }

    /// 批量删除选中文件
    pub async fn delete_selected(&mut self) -> BatchOutcome {
        let flow = DeleteConfirm::new(self.controller.selected_ids());
        let deleter = FileRowDeleter {
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
    use crate::notify::TracingNotifier;

    fn page() -> FileManagePage {
        FileManagePage::new(
            Arc::new(ApiClient::new("http://127.0.0.1:8080/api")),
            Arc::new(TracingNotifier),
        )
    }

    #[tokio::test]
    async fn test_upload_rejects_bad_extension_locally() {
        // 本地校验拦下，不触发列表重置
        let mut page = page();
        let err = page.upload("evil.exe", vec![0u8; 16]).await.unwrap_err();
        assert_eq!(err.code(), "E006");
        assert_eq!(page.controller().total(), 0);
    }

    #[test]
    fn test_type_column_is_filterable() {
        let mut page = page();
        page.controller().set_filter("type", "png");
        let request = page.controller().derived_request();
        assert_eq!(request.filters.get("type").map(String::as_str), Some("png"));
    }
}
