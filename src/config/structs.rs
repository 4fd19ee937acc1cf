use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub table: TableConfig,
    pub upload: UploadConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 后端服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String, // REST 接口基础地址
}

/// 会话持久化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub file: String, // 会话文件路径（localStorage 的等价物）
}

/// 表格配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    pub default_page_size: i64,       // 默认页大小
    pub page_size_options: Vec<i64>,  // 允许的页大小选项
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_size: u64,              // 单文件最大字节数
    pub allowed_types: Vec<String>, // 允许的扩展名
}
