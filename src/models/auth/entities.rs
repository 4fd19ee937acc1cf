use serde::{Deserialize, Serialize};

// 登录用户信息（连同 token 持久化到会话文件）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    // 不透明令牌，只存储不解析
    pub token: String,
}

impl LoginUser {
    /// 登录刚成功、还没拉取到用户信息时的占位会话
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            id: None,
            name: String::new(),
            email: None,
            phone: None,
            avatar_url: None,
            token: token.into(),
        }
    }
}
