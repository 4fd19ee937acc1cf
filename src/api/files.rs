use std::path::Path;

use super::client::ApiClient;
use crate::config::AppConfig;
use crate::errors::{ConsoleError, Result};
use crate::models::files::FileVo;
use crate::models::{ApiResponse, PageResult, SearchRequest};

/// 获取文件列表
pub async fn list(client: &ApiClient, param: &SearchRequest) -> Result<ApiResponse<PageResult<FileVo>>> {
    client.post_json("/file/list", param).await
}

/// 上传文件
///
/// 大小和扩展名在发送前按配置校验，不合规的文件不会发出请求。
pub async fn upload(
    client: &ApiClient,
    file_name: &str,
    bytes: Vec<u8>,
) -> Result<ApiResponse<FileVo>> {
    let config = AppConfig::get();
    check_upload(file_name, bytes.len() as u64, &config.upload.allowed_types, config.upload.max_size)?;
    client.upload("/file/upload", file_name, bytes).await
}

/// 删除文件
pub async fn delete(client: &ApiClient, id: &str) -> Result<ApiResponse<bool>> {
    client.delete(&format!("/file/delete/{id}")).await
}

fn check_upload(file_name: &str, size: u64, allowed_types: &[String], max_size: u64) -> Result<()> {
    if size > max_size {
        return Err(ConsoleError::validation(format!(
            "文件超过大小限制（{max_size} 字节）"
        )));
    }
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !allowed_types.iter().any(|t| t.eq_ignore_ascii_case(&extension)) {
        return Err(ConsoleError::validation(format!(
            "不支持的文件类型: {file_name}"
        )));
    }
    Ok(())
}
