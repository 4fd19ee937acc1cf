use super::client::ApiClient;
use crate::errors::Result;
use crate::models::users::{UserParam, UserVo};
use crate::models::{ApiResponse, PageResult, SearchRequest};

/// 获取登录用户信息
pub async fn get_login_user(client: &ApiClient) -> Result<ApiResponse<UserVo>> {
    client.get("/user/query").await
}

/// 获取用户列表
pub async fn list(client: &ApiClient, param: &SearchRequest) -> Result<ApiResponse<PageResult<UserVo>>> {
    client.post_json("/user/list", param).await
}

/// 查询用户信息
pub async fn get(client: &ApiClient, id: &str) -> Result<ApiResponse<UserVo>> {
    client.get(&format!("/user/{id}")).await
}

/// 保存用户
pub async fn save(client: &ApiClient, param: &UserParam) -> Result<ApiResponse<String>> {
    client.post_json("/user/save", param).await
}

/// 更新当前登录用户信息
pub async fn update(client: &ApiClient, param: &UserParam) -> Result<ApiResponse<String>> {
    client.post_json("/user/update", param).await
}

/// 删除用户
pub async fn delete(client: &ApiClient, id: &str) -> Result<ApiResponse<String>> {
    client.delete(&format!("/user/delete/{id}")).await
}
