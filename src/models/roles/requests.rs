use serde::{Deserialize, Serialize};

// 角色入参（保存用户时内嵌、配置用户角色时引用）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub role_code: String,
    pub role_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

// 用户配置角色入参
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleParam {
    pub user_id: String,
    pub roles: Vec<RoleParam>,
}
