//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、受保护路径模式以及路由守卫决策。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 商城首页 (默认路由)
    #[default]
    Home,
    /// 公开商品列表
    Products,
    /// 公开商品详情
    ProductDetail(u32),
    /// 创建商品 (需要认证)
    CreateProduct,
    /// 后台商品管理 (需要认证)
    Manage,
    /// 后台商品编辑 (需要认证)
    ManageEdit(u32),
    /// 员工登录页面，携带可选的回跳目标
    Login { from: Option<String> },
    /// 注销页面（副作用页面）
    Logout,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path（可含 query string）解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        // 统一去掉尾部斜杠（根路径除外）
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match path {
            "/" => Self::Home,
            "/products" => Self::Products,
            "/create-product" => Self::CreateProduct,
            "/manage" => Self::Manage,
            "/login" => Self::Login {
                from: query.and_then(|q| query_param(q, "from")),
            },
            "/logout" => Self::Logout,
            _ => {
                if let Some(id) = path.strip_prefix("/products/") {
                    match id.parse::<u32>() {
                        Ok(id) => Self::ProductDetail(id),
                        Err(_) => Self::NotFound,
                    }
                } else if let Some(id) = path.strip_prefix("/manage/") {
                    match id.parse::<u32>() {
                        Ok(id) => Self::ManageEdit(id),
                        Err(_) => Self::NotFound,
                    }
                } else {
                    Self::NotFound
                }
            }
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Products => "/products".to_string(),
            Self::ProductDetail(id) => format!("/products/{}", id),
            Self::CreateProduct => "/create-product".to_string(),
            Self::Manage => "/manage".to_string(),
            Self::ManageEdit(id) => format!("/manage/{}", id),
            Self::Login { from: None } => "/login".to_string(),
            Self::Login { from: Some(from) } => format!("/login?from={}", from),
            Self::Logout => "/logout".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// 从 query string 中提取指定参数的值
fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, value)| *key == name && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

// =========================================================
// 路由守卫 (Route Guard)
// =========================================================

/// 路由守卫决策
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// 放行
    Allow,
    /// 重定向到登录页，携带原始路径作为回跳目标
    RedirectToLogin { from: String },
}

/// **核心守卫逻辑：判断路径是否为受保护路径**
///
/// 与原始中间件语义一致：按路径前缀匹配，`/manage` 下的所有路径
/// 以及 `/create-product` 均需要会话 Cookie。
pub fn is_protected_path(path: &str) -> bool {
    let path = path.split('?').next().unwrap_or(path);
    path == "/manage"
        || path.starts_with("/manage/")
        || path == "/create-product"
        || path.starts_with("/create-product/")
}

/// 导航请求的守卫决策
///
/// 只看 Cookie 是否存在，不做任何签名、有效期或角色校验，
/// 真正的授权由后端强制执行。
pub fn check_access(path: &str, has_session: bool) -> GuardDecision {
    if is_protected_path(path) && !has_session {
        let from = path.split('?').next().unwrap_or(path).to_string();
        GuardDecision::RedirectToLogin { from }
    } else {
        GuardDecision::Allow
    }
}

#[cfg(test)]
mod tests;
