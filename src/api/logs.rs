use super::client::ApiClient;
use crate::errors::Result;
use crate::models::logs::LoginLogVo;
use crate::models::{ApiResponse, PageResult, SearchRequest};

/// 获取登录日志列表
pub async fn list(
    client: &ApiClient,
    param: &SearchRequest,
) -> Result<ApiResponse<PageResult<LoginLogVo>>> {
    client.post_json("/loginLog/list", param).await
}

/// 删除登录日志
pub async fn delete(client: &ApiClient, id: &str) -> Result<ApiResponse<String>> {
    client.delete(&format!("/loginLog/delete/{id}")).await
}
