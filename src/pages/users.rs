//! 用户管理页
//!
//! 列表查询走通用表格控制器；新增/编辑弹框除用户表单外还要加载
//! 启用状态的角色供下拉选择，角色配置是独立的一次往返。

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
use crate::models::roles::{RoleVo, STATUS_ENABLED, UserRoleParam};
use crate::models::users::{UserParam, UserVo};
use crate::models::{ApiResponse, PageResult, SearchRequest};
use crate::notify::Notifier;
use crate::table::{PageFetcher, TableQueryController, TableSchema};

// 可过滤列
const FILTERABLE: &[&str] = &["name", "email", "phone"];
// 可排序列
const SORTABLE: &[&str] = &[FIELD_CREATE_TIME, FIELD_UPDATE_TIME];

// 弹框角色下拉一次取全部启用角色
const ROLE_OPTION_PAGE_SIZE: i64 = 1000;

struct UserListFetcher {
    client: Arc<ApiClient>,
}

#[async_trait]
impl PageFetcher<UserVo> for UserListFetcher {
    async fn fetch(&self, request: &SearchRequest) -> Result<ApiResponse<PageResult<UserVo>>> {
        api::users::list(&self.client, request).await
    }
}

struct UserRowDeleter {
    client: Arc<ApiClient>,
}

#[async_trait]
impl RowDeleter for UserRowDeleter {
    async fn delete_row(&self, id: &str) -> Result<ApiResponse<()>> {
        Ok(api::users::delete(&self.client, id).await?.into_status())
    }
}

pub struct UserManagePage {
    client: Arc<ApiClient>,
    notifier: Arc<dyn Notifier>,
    controller: TableQueryController<UserVo>,
    dialog: DialogMachine,
}

impl UserManagePage {
    pub fn new(client: Arc<ApiClient>, notifier: Arc<dyn Notifier>) -> Self {
        let table = &AppConfig::get().table;
        let schema = TableSchema::new(FILTERABLE, SORTABLE)
            .with_page_sizes(&table.page_size_options, table.default_page_size);
        let controller = TableQueryController::new(
            schema,
            Arc::new(UserListFetcher {
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

    pub fn controller(&mut self) -> &mut TableQueryController<UserVo> {
        &mut self.controller
    }

    pub fn dialog(&self) -> &DialogMachine {
        &self.dialog
    }

    /// 打开新增/编辑弹框，同时加载角色下拉选项
    pub async fn open_dialog(&mut self) -> Result<Vec<RoleVo>> {
        self.dialog.open()?;
        self.load_enabled_roles().await
    }

    pub fn close_dialog(&mut self) -> Result<()> {
        self.dialog.close()
    }

    /// 编辑前回显：拉取用户详情
    pub async fn load_user(&self, id: &str) -> Result<UserVo> {
        let resp = api::users::get(&self.client, id).await?;
        if !resp.is_success() {
            return Err(ConsoleError::api(resp.message));
        }
        resp.data
            .ok_or_else(|| ConsoleError::api("用户信息响应缺少 data"))
    }

    /// 配置角色弹框回显：该用户当前持有的角色
    pub async fn load_user_roles(&self, user_id: &str) -> Result<Vec<RoleVo>> {
        let resp = api::roles::user_roles(&self.client, user_id).await?;
        if !resp.is_success() {
            return Err(ConsoleError::api(resp.message));
        }
        Ok(resp.data.unwrap_or_default())
    }

    /// 提交新增/编辑用户
    ///
    /// 校验失败时弹框停留在打开态，错误按字段返回给调用方就地渲染；
    /// 服务端拒绝时弹框转入错误态，可修改后重试。
    pub async fn submit_user(&mut self, param: &UserParam) -> Result<SubmitOutcome> {
        let errors = forms::user_form(param.id.is_none()).validate(&form_values(param));
        if !errors.is_empty() {
            return Ok(SubmitOutcome::Invalid(errors));
        }

        self.dialog.begin_submit()?;
        match api::users::save(&self.client, param).await {
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

    /// 保存用户的角色配置
    pub async fn save_user_roles(&self, param: &UserRoleParam) -> Result<()> {
        let resp = api::roles::save_user_roles(&self.client, param).await?;
        if resp.is_success() {
            self.notifier.success("保存成功");
            Ok(())
        } else {
            self.notifier.error(&resp.message);
            Err(ConsoleError::api(resp.message))
        }
    }

    /// 批量删除选中用户；只要执行过删除，结束后就刷新列表
    pub async fn delete_selected(&mut self) -> BatchOutcome {
        let flow = DeleteConfirm::new(self.controller.selected_ids());
        let deleter = UserRowDeleter {
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

    async fn load_enabled_roles(&self) -> Result<Vec<RoleVo>> {
        let mut request = SearchRequest::new(1, ROLE_OPTION_PAGE_SIZE);
        request
            .filters
            .insert("status".to_string(), STATUS_ENABLED.to_string());
        let resp = api::roles::list(&self.client, &request).await?;
        if !resp.is_success() {
            // 下拉加载失败不阻塞弹框，给空选项并提示
            self.notifier.error(&resp.message);
            return Ok(Vec::new());
        }
        Ok(resp.data.map(|page| page.list).unwrap_or_default())
    }
}

fn form_values(param: &UserParam) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();
    values.insert("name".to_string(), param.name.clone());
    if let Some(password) = &param.password {
        values.insert("password".to_string(), password.clone());
    }
    if let Some(email) = &param.email {
        values.insert("email".to_string(), email.clone());
    }
    if let Some(phone) = &param.phone {
        values.insert("phone".to_string(), phone.clone());
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flows::DialogPhase;
    use crate::notify::TracingNotifier;

    fn page() -> UserManagePage {
        UserManagePage::new(
            Arc::new(ApiClient::new("http://127.0.0.1:8080/api")),
            Arc::new(TracingNotifier),
        )
    }

    fn add_param(name: &str, password: &str) -> UserParam {
        UserParam {
            id: None,
            name: name.to_string(),
            password: Some(password.to_string()),
            email: None,
            phone: None,
            avatar_url: None,
            roles: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_invalid_form_short_circuits_before_request() {
        // 本地校验失败时不应发请求（桩地址上发了请求会得到传输错误）
        let mut page = page();
        page.dialog.open().unwrap();

        let outcome = page.submit_user(&add_param("", "123")).await.unwrap();
        match outcome {
            SubmitOutcome::Invalid(errors) => {
                assert_eq!(errors["name"], "用户名不能为空");
                assert_eq!(errors["password"], "密码至少 6 个字符");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        // 弹框保持打开，没有进入提交态
        assert_eq!(*page.dialog().phase(), DialogPhase::Open);
    }

    #[test]
    fn test_schema_is_lenient_for_unknown_columns() {
        let mut page = page();
        page.controller().set_filter("name", " 张三 ");
        page.controller().set_filter("createTime", "2026");

        let request = page.controller().derived_request();
        assert_eq!(request.filters.get("name").map(String::as_str), Some("张三"));
        assert!(!request.filters.contains_key("createTime"));
    }

    #[test]
    fn test_form_values_skips_absent_optionals() {
        let values = form_values(&add_param("张三", "secret8"));
        assert_eq!(values.len(), 2);
        assert!(values.contains_key("name"));
        assert!(values.contains_key("password"));
    }
}
