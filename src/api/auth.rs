use tracing::info;

use super::client::ApiClient;
use crate::errors::{ConsoleError, Result};
use crate::models::ApiResponse;
use crate::models::auth::{LoginParam, LoginUser, RegisterParam};
use crate::session::AuthSession;

/// 注册接口
pub async fn register(client: &ApiClient, param: &RegisterParam) -> Result<ApiResponse<()>> {
    client.post_json("/user/register", param).await
}

/// 登录接口（data 为不透明 token）
pub async fn login(client: &ApiClient, param: &LoginParam) -> Result<ApiResponse<String>> {
    client.post_json("/user/login", param).await
}

/// 退出登录
pub async fn logout(client: &ApiClient) -> Result<ApiResponse<()>> {
    client.delete("/user/logout").await
}

/// 处理注册
pub async fn handle_register(client: &ApiClient, param: &RegisterParam) -> Result<()> {
    let resp = register(client, param).await?;
    if !resp.is_success() {
        return Err(ConsoleError::authentication(resp.message));
    }
    info!("User {} registered", param.username);
    Ok(())
}

/// 处理登录
///
/// 先拿 token 建立会话，再拉取登录用户信息补全档案。
/// 档案拉取失败时登录视为失败，但已写入的 token 会话保留原样。
pub async fn handle_login(
    client: &ApiClient,
    session: &mut AuthSession,
    param: &LoginParam,
) -> Result<LoginUser> {
    let resp = login(client, param).await?;
    if !resp.is_success() {
        return Err(ConsoleError::authentication(resp.message));
    }
    let token = resp
        .data
        .ok_or_else(|| ConsoleError::authentication("登录响应缺少 token"))?;

    client.set_token(Some(token.clone()));
    session.establish(LoginUser::with_token(&token))?;

    // 获取登录用户信息
    let profile = crate::api::users::get_login_user(client).await?;
    if !profile.is_success() {
        return Err(ConsoleError::authentication(profile.message));
    }
    let user = profile
        .data
        .ok_or_else(|| ConsoleError::authentication("用户信息响应缺少 data"))?;

    let merged = LoginUser {
        id: user.id,
        name: user.name,
        email: user.email,
        phone: user.phone,
        avatar_url: user.avatar_url,
        token,
    };
    session.establish(merged.clone())?;
    info!("User {} logged in", merged.name);
    Ok(merged)
}

/// 处理登出
///
/// 无论接口成败，本地会话和令牌都会清除。
pub async fn handle_logout(client: &ApiClient, session: &mut AuthSession) -> Result<()> {
    let outcome = logout(client).await;
    client.set_token(None);
    session.clear()?;

    match outcome {
        Ok(resp) if resp.is_success() => {
            info!("User logged out");
            Ok(())
        }
        Ok(resp) => Err(ConsoleError::authentication(resp.message)),
        Err(e) => Err(e),
    }
}
