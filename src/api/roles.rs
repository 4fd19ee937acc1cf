use super::client::ApiClient;
use crate::errors::Result;
use crate::models::roles::{RoleParam, RoleVo, UserRoleParam};
use crate::models::{ApiResponse, PageResult, SearchRequest};

/// 获取角色列表
pub async fn list(client: &ApiClient, param: &SearchRequest) -> Result<ApiResponse<PageResult<RoleVo>>> {
    client.post_json("/role/list", param).await
}

/// 查询角色信息
pub async fn get(client: &ApiClient, id: &str) -> Result<ApiResponse<RoleVo>> {
    client.get(&format!("/role/{id}")).await
}

/// 保存角色
pub async fn save(client: &ApiClient, param: &RoleParam) -> Result<ApiResponse<String>> {
    client.post_json("/role/save", param).await
}

/// 删除角色
pub async fn delete(client: &ApiClient, id: &str) -> Result<ApiResponse<String>> {
    client.delete(&format!("/role/delete/{id}")).await
}

/// 查询用户配置角色列表
pub async fn user_roles(client: &ApiClient, user_id: &str) -> Result<ApiResponse<Vec<RoleVo>>> {
    client.get(&format!("/role/user/{user_id}")).await
}

/// 保存用户配置角色
pub async fn save_user_roles(client: &ApiClient, param: &UserRoleParam) -> Result<ApiResponse<()>> {
    client.post_json("/role/user/save", param).await
}
