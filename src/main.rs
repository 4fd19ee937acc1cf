use std::sync::Arc;

use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, warn};

use rust_admin_console_next::api::{self, ApiClient};
use rust_admin_console_next::config::AppConfig;
use rust_admin_console_next::errors::{ConsoleError, Result};
use rust_admin_console_next::models::users::UserParam;
use rust_admin_console_next::models::auth::{LoginParam, RegisterParam};
use rust_admin_console_next::notify::TracingNotifier;
use rust_admin_console_next::pages::{FileManagePage, LogManagePage, RoleManagePage, UserManagePage};
use rust_admin_console_next::session::{AuthSession, SessionStore};
use rust_admin_console_next::table::{PageItem, TableRow, page_range};

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 启动前预处理 //

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    warn!(
        "Starting {} v{} against {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.server.base_url
    );

    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    // 预处理完成 //

    if let Err(e) = run(config).await {
        eprintln!("{}", e.format_simple());
        std::process::exit(1);
    }
}

async fn run(config: &AppConfig) -> Result<()> {
    // 恢复会话并把令牌装回客户端
    let store = SessionStore::new(&config.session.file);
    let mut session = AuthSession::restore(store)?;
    let client = Arc::new(ApiClient::new(&config.server.base_url));
    if let Some(token) = session.token() {
        client.set_token(Some(token.to_string()));
    }
    let notifier = Arc::new(TracingNotifier);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("help");

    match command {
        "register" => {
            let (username, password) = credentials(&args)?;
            api::auth::handle_register(&client, &RegisterParam { username, password }).await?;
            println!("注册成功，请登录");
        }
        "login" => {
            let (username, password) = credentials(&args)?;
            let user =
                api::auth::handle_login(&client, &mut session, &LoginParam { username, password })
                    .await?;
            println!("欢迎，{}", user.name);
        }
        "logout" => {
            api::auth::handle_logout(&client, &mut session).await?;
            println!("已退出登录");
        }
        "profile" => {
            let user = session
                .user()
                .cloned()
                .ok_or_else(|| ConsoleError::authentication("未登录"))?;
            let name = args.get(1).cloned().unwrap_or_else(|| user.name.clone());
            let email = args.get(2).cloned().or_else(|| user.email.clone());
            let param = UserParam {
                id: user.id.clone(),
                name,
                password: None,
                email,
                phone: user.phone.clone(),
                avatar_url: user.avatar_url.clone(),
                roles: Vec::new(),
            };
            let resp = api::users::update(&client, &param).await?;
            if !resp.is_success() {
                return Err(ConsoleError::api(resp.message));
            }
            // 更新成功后重新拉取档案并刷新会话
            let profile = api::users::get_login_user(&client).await?;
            let fresh = if profile.is_success() { profile.data } else { None };
            if let Some(fresh) = fresh {
                let mut updated = user;
                updated.name = fresh.name;
                updated.email = fresh.email;
                updated.phone = fresh.phone;
                updated.avatar_url = fresh.avatar_url;
                session.establish(updated)?;
            }
            println!("资料已更新");
        }
        "whoami" => match session.user() {
            Some(user) => {
                println!("{}", user.name);
                if let Some(email) = &user.email {
                    println!("  email: {email}");
                }
                if let Some(phone) = &user.phone {
                    println!("  phone: {phone}");
                }
            }
            None => println!("未登录"),
        },
        "users" => {
            let mut page = UserManagePage::new(client, notifier);
            page.controller().search().await;
            for row in page.controller().rows() {
                println!(
                    "{}\t{}\t{}",
                    row.row_id(),
                    row.name,
                    row.email.as_deref().unwrap_or("-")
                );
            }
            print_page_bar(page.controller().page_num(), page.controller().page_count());
        }
        "roles" => {
            let mut page = RoleManagePage::new(client, notifier);
            page.controller().search().await;
            for row in page.controller().rows() {
                let status = if row.is_enabled() { "启用" } else { "禁用" };
                println!("{}\t{}\t{}\t{}", row.row_id(), row.role_code, row.role_name, status);
            }
            print_page_bar(page.controller().page_num(), page.controller().page_count());
        }
        "logs" => {
            let mut page = LogManagePage::new(client, notifier);
            page.controller().search().await;
            for row in page.controller().rows() {
                println!(
                    "{}\t{}\t{}\t{}",
                    row.row_id(),
                    row.username,
                    row.ip_addr.as_deref().unwrap_or("-"),
                    row.login_time
                );
            }
            print_page_bar(page.controller().page_num(), page.controller().page_count());
        }
        "files" => {
            let mut page = FileManagePage::new(client, notifier);
            page.controller().search().await;
            for row in page.controller().rows() {
                println!("{}\t{}\t{}\t{}", row.row_id(), row.name, row.file_type, row.url);
            }
            print_page_bar(page.controller().page_num(), page.controller().page_count());
        }
        "upload" => {
            let path = args
                .get(1)
                .ok_or_else(|| missing_argument("upload <文件路径>"))?;
            let bytes = std::fs::read(path)?;
            let file_name = std::path::Path::new(path)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(path.as_str());
            let mut page = FileManagePage::new(client, notifier);
            let file = page.upload(file_name, bytes).await?;
            println!("已上传: {}", file.url);
        }
        _ => usage(),
    }

    Ok(())
}

fn credentials(args: &[String]) -> Result<(String, String)> {
    match (args.get(1), args.get(2)) {
        (Some(username), Some(password)) => Ok((username.clone(), password.clone())),
        _ => Err(missing_argument("<用户名> <密码>")),
    }
}

fn missing_argument(hint: &str) -> ConsoleError {
    ConsoleError::validation(format!("缺少参数: {hint}"))
}

/// 终端里的页码条，和分页组件同一套折叠算法
fn print_page_bar(page_num: i64, page_count: i64) {
    let bar: Vec<String> = page_range(page_count, page_num)
        .into_iter()
        .map(|item| match item {
            PageItem::Page(n) if n == page_num => format!("[{n}]"),
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "…".to_string(),
        })
        .collect();
    println!("第 {page_num}/{page_count} 页  {}", bar.join(" "));
}

fn usage() {
    println!("用法: admin-console <命令>");
    println!();
    println!("  register <用户名> <密码>   注册");
    println!("  login    <用户名> <密码>   登录");
    println!("  logout                     退出登录");
    println!("  whoami                     查看当前会话");
    println!("  profile <姓名> [邮箱]      更新个人资料");
    println!("  users                      用户列表");
    println!("  roles                      角色列表");
    println!("  logs                       登录日志列表");
    println!("  files                      文件列表");
    println!("  upload <文件路径>          上传文件");
}
