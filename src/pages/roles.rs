//! 角色管理页
//!
//! 在通用控制器之外只多一个状态下拉：选"全部"等价于移除 status 过滤，
//! 推导出的查询对象里不出现 status 键。

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use super::SubmitOutcome;
use crate::api::{self, ApiClient};
use crate::config::AppConfig;
use crate::errors::{ConsoleError, Result};
use crate::flows::{BatchOutcome, DeleteConfirm, DialogMachine, RowDeleter};
use crate::forms;
use crate::models::common::{FIELD_CREATE_TIME, FIELD_UPDATE_TIME};
use crate::models::roles::{RoleParam, RoleVo, STATUS_DISABLED, STATUS_ENABLED};
use crate::models::{ApiResponse, PageResult, SearchRequest};
use crate::notify::Notifier;
use crate::table::{PageFetcher, TableQueryController, TableSchema};

const FILTERABLE: &[&str] = &["roleCode", "roleName", "status"];
const SORTABLE: &[&str] = &[FIELD_CREATE_TIME, FIELD_UPDATE_TIME];

// 状态下拉的哨兵值：全部（不过滤）
pub const STATUS_ALL: &str = "all";

/// 状态下拉选项：值 → 展示文案
pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    (STATUS_ALL, "全部"),
    (STATUS_ENABLED, "启用"),
    (STATUS_DISABLED, "禁用"),
];

struct RoleListFetcher {
    client: Arc<ApiClient>,
}

#[async_trait]
impl PageFetcher<RoleVo> for RoleListFetcher {
    async fn fetch(&self, request: &SearchRequest) -> Result<ApiResponse<PageResult<RoleVo>>> {
        api::roles::list(&self.client, request).await
    }
}

struct RoleRowDeleter {
    client: Arc<ApiClient>,
}

#[async_trait]
impl RowDeleter for RoleRowDeleter {
    async fn delete_row(&self, id: &str) -> Result<ApiResponse<()>> {
        Ok(api::roles::delete(&self.client, id).await?.into_status())
    }
}

pub struct RoleManagePage {
    client: Arc<ApiClient>,
    notifier: Arc<dyn Notifier>,
    controller: TableQueryController<RoleVo>,
    dialog: DialogMachine,
}

impl RoleManagePage {
    pub fn new(client: Arc<ApiClient>, notifier: Arc<dyn Notifier>) -> Self {
        let table = &AppConfig::get().table;
        let schema = TableSchema::new(FILTERABLE, SORTABLE)
            .with_page_sizes(&table.page_size_options, table.default_page_size);
        let controller = TableQueryController::new(
            schema,
            Arc::new(RoleListFetcher {
                client: client.clone(),
            }),
            notifier.clone(),
        );
        Self {
            client,
            notifier,
            controller,
            dialog: DialogMachine::new(),
        }
    }

    pub fn controller(&mut self) -> &mut TableQueryController<RoleVo> {
        &mut self.controller
    }

    pub fn dialog(&self) -> &DialogMachine {
        &self.dialog
    }

    /// 状态下拉：选"全部"时移除过滤键，其余取所选值
    pub fn set_status_filter(&mut self, value: &str) {
        if value == STATUS_ALL {
            self.controller.set_filter("status", "");
        } else {
            self.controller.set_filter("status", value);
        }
    }

    pub fn open_dialog(&mut self) -> Result<()> {
        self.dialog.open()
    }

    pub fn close_dialog(&mut self) -> Result<()> {
        self.dialog.close()
    }

    /// 编辑前回显：拉取角色详情
    pub async fn load_role(&self, id: &str) -> Result<RoleVo> {
        let resp = api::roles::get(&self.client, id).await?;
        if !resp.is_success() {
            return Err(ConsoleError::api(resp.message));
        }
        resp.data
            .ok_or_else(|| ConsoleError::api("角色信息响应缺少 data"))
    }

    /// 提交新增/编辑角色
    pub async fn submit_role(&mut self, param: &RoleParam) -> Result<SubmitOutcome> {
        let errors = forms::role_form().validate(&form_values(param));
        if !errors.is_empty() {
            return Ok(SubmitOutcome::Invalid(errors));
        }

        self.dialog.begin_submit()?;
        match api::roles::save(&self.client, param).await {
            Ok(resp) if resp.is_success() => {
                self.dialog.submit_ok()?;
                self.notifier.success("保存成功");
                self.controller.reset().await;
                Ok(SubmitOutcome::Saved)
            }
            Ok(resp) => {
                self.notifier.error(&resp.message);
                self.dialog.submit_err(resp.message.clone())?;
                Ok(SubmitOutcome::Rejected(resp.message))
            }
            Err(e) => {
                self.notifier.error(&e.to_string());
                self.dialog.submit_err(e.to_string())?;
                Err(e)
            }
        }
    }

    /// 批量删除选中角色
    pub async fn delete_selected(&mut self) -> BatchOutcome {
        let flow = DeleteConfirm::new(self.controller.selected_ids());
        let deleter = RoleRowDeleter {
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

fn form_values(param: &RoleParam) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    values.insert("roleCode".to_string(), param.role_code.clone());
    values.insert("roleName".to_string(), param.role_name.clone());
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::TracingNotifier;

    fn page() -> RoleManagePage {
        RoleManagePage::new(
            Arc::new(ApiClient::new("http://127.0.0.1:8080/api")),
            Arc::new(TracingNotifier),
        )
    }

    #[test]
    fn test_status_all_removes_filter_key() {
        let mut page = page();
        page.set_status_filter(STATUS_ENABLED);
        assert_eq!(
            page.controller()
                .derived_request()
                .filters
                .get("status")
                .map(String::as_str),
            Some("1")
        );

        page.set_status_filter(STATUS_ALL);
        assert!(
            !page
                .controller()
                .derived_request()
                .filters
                .contains_key("status")
        );
    }

    #[tokio::test]
    async fn test_invalid_role_form_keeps_dialog_open() {
        let mut page = page();
        page.open_dialog().unwrap();

        let param = RoleParam {
            id: None,
            role_code: String::new(),
            role_name: "管理员".to_string(),
            status: Some(STATUS_ENABLED.to_string()),
        };
        let outcome = page.submit_role(&param).await.unwrap();
        match outcome {
            SubmitOutcome::Invalid(errors) => {
                assert_eq!(errors["roleCode"], "角色码不能为空");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(page.dialog().is_open());
        assert!(!page.dialog().is_submitting());
    }
}
