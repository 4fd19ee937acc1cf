use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 无配置文件时也能运行的默认值
            .set_default("app.system_name", "Admin Console")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.base_url", "http://127.0.0.1:8080/api")?
            .set_default("session.file", ".admin-console-session.json")?
            .set_default("table.default_page_size", 10)?
            .set_default("table.page_size_options", vec![2i64, 10, 20, 50, 100])?
            .set_default("upload.max_size", 10 * 1024 * 1024u64)?
            .set_default(
                "upload.allowed_types",
                vec!["png", "jpg", "jpeg", "gif", "webp"],
            )?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("ADMINCONSOLE")
                    .separator("_")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.base_url", std::env::var("SERVER_BASE_URL").ok())?
            .set_override_option("session.file", std::env::var("SESSION_FILE").ok())?;

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = AppConfig::load().expect("defaults should always load");
        assert_eq!(config.table.default_page_size, 10);
        assert!(config.table.page_size_options.contains(&10));
        assert!(!config.server.base_url.is_empty());
    }
}
