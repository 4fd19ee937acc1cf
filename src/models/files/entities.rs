use serde::{Deserialize, Serialize};

use crate::table::TableRow;

// 文件返参
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileVo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    // 文件名称
    pub name: String,
    // 文件类型
    #[serde(rename = "type")]
    pub file_type: String,
    // 文件大小（字节，服务端以字符串返回）
    pub size: String,
    // 存储路径
    pub path: String,
    // 访问地址
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

impl TableRow for FileVo {
    fn row_id(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }
}
