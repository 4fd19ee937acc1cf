use std::sync::RwLock;

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::Result;
use crate::models::ApiResponse;

/// HTTP 客户端封装
///
/// 持有基础地址和当前令牌；所有请求自动带上 Authorization 头。
/// 不设超时、不重试：失败对单次请求而言就是终态。
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: RwLock::new(None),
        }
    }

    /// 更新令牌（登录成功/登出时由会话流程调用）
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token;
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let token = self.token.read().ok().and_then(|t| t.clone());
        match token {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        debug!("GET {}", path);
        let resp = self.authorize(self.http.get(self.url(path))).send().await?;
        Ok(resp.json().await?)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<ApiResponse<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", path);
        let resp = self
            .authorize(self.http.post(self.url(path)))
            .json(body)
            .send()
            .await?;
        Ok(resp.json().await?)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>> {
        debug!("DELETE {}", path);
        let resp = self
            .authorize(self.http.delete(self.url(path)))
            .send()
            .await?;
        Ok(resp.json().await?)
    }

    /// 单文件 multipart 上传，字段名固定为 `file`
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ApiResponse<T>> {
        debug!("POST {} (multipart, {} bytes)", path, bytes.len());
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        let resp = self
            .authorize(self.http.post(self.url(path)))
            .multipart(form)
            .send()
            .await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = ApiClient::new("http://localhost:8080/api/");
        assert_eq!(client.url("/user/list"), "http://localhost:8080/api/user/list");
    }

    #[test]
    fn test_token_slot() {
        let client = ApiClient::new("http://localhost");
        assert!(client.token.read().unwrap().is_none());
        client.set_token(Some("t".to_string()));
        assert_eq!(client.token.read().unwrap().as_deref(), Some("t"));
        client.set_token(None);
        assert!(client.token.read().unwrap().is_none());
    }
}
