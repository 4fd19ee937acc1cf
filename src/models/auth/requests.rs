use serde::Serialize;

// 注册入参
#[derive(Debug, Clone, Serialize)]
pub struct RegisterParam {
    pub username: String,
    pub password: String,
}

// 用户登录入参
#[derive(Debug, Clone, Serialize)]
pub struct LoginParam {
    pub username: String,
    pub password: String,
}
