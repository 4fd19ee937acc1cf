use serde::{Deserialize, Serialize};

use crate::table::TableRow;

// 启用
pub const STATUS_ENABLED: &str = "1";

// 禁用
pub const STATUS_DISABLED: &str = "0";

// 角色返参
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleVo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub role_code: String,
    pub role_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

impl RoleVo {
    pub fn is_enabled(&self) -> bool {
        self.status.as_deref() == Some(STATUS_ENABLED)
    }
}

impl TableRow for RoleVo {
    fn row_id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}
