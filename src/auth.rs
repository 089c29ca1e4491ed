//! 认证模块
//!
//! 管理客户端认证状态，与路由系统解耦。
//! 路由守卫只检查 `authToken` Cookie 是否存在——不解析、
//! 不校验有效期、不读取角色，真正的授权由后端强制执行。

use leptos::prelude::*;

use crate::api::{ApiError, ShopApi};
use crate::models::LoginRequest;
use crate::web::CookieJar;

/// 会话 Cookie：仅以"存在"作为客户端放行依据
pub const AUTH_COOKIE: &str = "authToken";
/// CSRF Cookie：值回显到变更类请求的 `X-CSRFToken` 头
pub const CSRF_COOKIE: &str = "csrftoken";

/// 认证状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 是否已认证（仅客户端视角，启动时由 Cookie 种子化）
    pub is_authenticated: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态：以会话 Cookie 的存在与否种子化
pub fn init_auth(ctx: &AuthContext) {
    let present = has_session();
    ctx.set_state.update(|state| {
        state.is_authenticated = present;
    });
}

/// 会话检查函数（注入路由守卫）
///
/// 每次导航时重新读取 Cookie，历史记录前进/后退同样经过此检查。
pub fn has_session() -> bool {
    CookieJar::has(AUTH_COOKIE)
}

/// 读取 CSRF Cookie 值，缺失时回退为空字符串（与后端约定一致）
pub fn csrf_token() -> String {
    CookieJar::get(CSRF_COOKIE).unwrap_or_default()
}

// =========================================================
// 登录 / 注销编排
// =========================================================

/// 登录结果
///
/// `is_staff` 检查只在登录后发生这一次，客户端不再做角色判断。
#[derive(Debug)]
pub enum LoginOutcome {
    /// 员工账号，放行进入后台
    Granted,
    /// 凭据有效但非员工账号
    Denied,
    /// 请求失败（HTTP 错误或网络错误）
    Failed(ApiError),
}

/// 提交登录请求并更新认证状态
pub async fn login(
    ctx: &AuthContext,
    api: &ShopApi,
    username: String,
    password: String,
) -> LoginOutcome {
    let request = LoginRequest { username, password };
    match api.login(&request).await {
        Ok(response) if response.is_staff => {
            ctx.set_state.update(|state| state.is_authenticated = true);
            LoginOutcome::Granted
        }
        Ok(_) => LoginOutcome::Denied,
        Err(err) => LoginOutcome::Failed(err),
    }
}

/// 注销：调用后端清除会话，成功后再清除客户端状态
pub async fn logout(ctx: &AuthContext, api: &ShopApi) -> Result<(), ApiError> {
    api.logout().await?;
    ctx.set_state.update(|state| state.is_authenticated = false);
    Ok(())
}
