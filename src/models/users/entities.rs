use serde::{Deserialize, Serialize};

use crate::models::roles::requests::RoleParam;
use crate::table::TableRow;

// 用户信息返参
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserVo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    // 用户与角色多对多，保存时内嵌角色引用
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<RoleParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

impl TableRow for UserVo {
    fn row_id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}
