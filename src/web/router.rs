//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 守卫 -> 处理 -> 加载"的导航流程，
//! 守卫在任何页面代码运行之前同步求值。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, GuardDecision, check_access};

/// 获取当前浏览器路径（含 query string）
fn current_path() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return "/".to_string();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    match location.search() {
        Ok(search) if !search.is_empty() => format!("{}{}", path, search),
        _ => path,
    }
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入会话检查函数实现与 Cookie 存储的解耦：
/// 守卫只关心 `authToken` Cookie 是否存在，不校验其内容。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 会话检查函数（注入，实现解耦），每次导航时重新求值
    check_session: fn() -> bool,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// 初始路由同样经过守卫：直接在地址栏输入受保护路径
    /// 且无会话 Cookie 时，首次加载即被重定向到登录页。
    fn new(check_session: fn() -> bool) -> Self {
        let path = current_path();
        let initial_route = match check_access(&path, check_session()) {
            GuardDecision::Allow => AppRoute::from_path(&path),
            GuardDecision::RedirectToLogin { from } => {
                let redirect = AppRoute::Login { from: Some(from) };
                replace_history_state(&redirect.to_path());
                redirect
            }
        };
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            check_session,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 守卫(Guard) -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        match check_access(path, (self.check_session)()) {
            GuardDecision::Allow => {
                let target_route = AppRoute::from_path(path);
                push_history_state(&target_route.to_path());
                self.set_route.set(target_route);
            }
            GuardDecision::RedirectToLogin { from } => {
                web_sys::console::log_1(&"[Router] Access denied. Redirecting to login.".into());
                let redirect = AppRoute::Login { from: Some(from) };
                push_history_state(&redirect.to_path());
                self.set_route.set(redirect);
            }
        }
    }

    /// 初始化浏览器后退/前进按钮监听
    ///
    /// popstate 时也执行守卫逻辑，历史记录不能绕过守卫。
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let check_session = self.check_session;

        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            match check_access(&path, check_session()) {
                GuardDecision::Allow => set_route.set(AppRoute::from_path(&path)),
                GuardDecision::RedirectToLogin { from } => {
                    let redirect = AppRoute::Login { from: Some(from) };
                    replace_history_state(&redirect.to_path());
                    set_route.set(redirect);
                }
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(check_session: fn() -> bool) -> RouterService {
    let router = RouterService::new(check_session);
    router.init_popstate_listener();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 会话检查函数（守卫数据源）
    check_session: fn() -> bool,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(check_session);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
