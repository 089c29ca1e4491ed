//! 后端 REST API 客户端
//!
//! 所有网络请求都集中在 `ShopApi`，组件通过 Context 获取同一个
//! 客户端实例，而不是在任意调用点直接访问 fetch。
//! 变更类请求（POST/PUT/DELETE）统一回显 CSRF Cookie 并携带凭据。

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::use_context;
use web_sys::{FormData, RequestCache, RequestCredentials};

use crate::auth::csrf_token;
use crate::models::{ErrorBody, LoginRequest, LoginResponse, Product};

/// 固定后端源；后端自行持有持久化与授权
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// CSRF Cookie 回显的请求头名称
pub const X_CSRF_HEADER: &str = "X-CSRFToken";

// =========================================================
// 错误类型
// =========================================================

/// API 错误分类
///
/// - `Http`: 非 2xx 响应，尽量从响应体提取人类可读的 detail
/// - `Network`: 传输层失败
/// - `Decode`: 2xx 响应但响应体解析失败
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Http { status: u16, detail: Option<String> },
    Network(String),
    Decode(String),
}

impl ApiError {
    /// 详情页用：404 走"未找到"展示而不是行内错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Http {
                status,
                detail: Some(detail),
            } => write!(f, "HTTP {}: {}", status, detail),
            ApiError::Http {
                status,
                detail: None,
            } => write!(f, "HTTP {}", status),
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// 从非 2xx 响应构造 `ApiError::Http`
///
/// 优先取 DRF 风格的 `{"detail": "..."}`，否则退回原始响应体文本。
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let detail = match response.text().await {
        Ok(text) => serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.detail)
            .or_else(|| {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }),
        Err(_) => None,
    };
    ApiError::Http { status, detail }
}

// =========================================================
// API 客户端
// =========================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ShopApi {
    pub base_url: String,
}

impl Default for ShopApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ShopApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 将后端返回的相对图片路径解析为完整 URL
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            self.url(path)
        }
    }

    /// 变更类请求的公共配置：CSRF 回显 + 凭据
    fn mutating(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(X_CSRF_HEADER, &csrf_token())
            .credentials(RequestCredentials::Include)
    }

    /// 获取商品列表（公开，禁用缓存保证每次导航拿到新数据）
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = Request::get(&self.url("/api/products/"))
            .cache(RequestCache::NoStore)
            .send()
            .await?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(response.json::<Vec<Product>>().await?)
    }

    /// 获取商品列表（后台，携带会话凭据）
    pub async fn list_products_with_session(&self) -> Result<Vec<Product>, ApiError> {
        let response = Request::get(&self.url("/api/products/"))
            .cache(RequestCache::NoStore)
            .credentials(RequestCredentials::Include)
            .send()
            .await?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(response.json::<Vec<Product>>().await?)
    }

    /// 按 id 获取单个商品
    pub async fn get_product(&self, id: u32) -> Result<Product, ApiError> {
        let response = Request::get(&self.url(&format!("/api/products/{}/", id)))
            .cache(RequestCache::NoStore)
            .send()
            .await?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(response.json::<Product>().await?)
    }

    /// 创建商品（multipart：name/description/price/stock/可选 image）
    pub async fn create_product(&self, form: FormData) -> Result<(), ApiError> {
        let response = self
            .mutating(Request::post(&self.url("/api/products/enter/")))
            .body(form)?
            .send()
            .await?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    /// 更新商品（与创建同样的 multipart 结构）
    pub async fn update_product(&self, id: u32, form: FormData) -> Result<(), ApiError> {
        let response = self
            .mutating(Request::put(&self.url(&format!("/api/products/{}/", id))))
            .body(form)?
            .send()
            .await?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    /// 删除商品
    pub async fn delete_product(&self, id: u32) -> Result<(), ApiError> {
        let response = self
            .mutating(Request::delete(&self.url(&format!("/api/products/{}/", id))))
            .send()
            .await?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }

    /// 员工登录；成功时后端通过 Set-Cookie 建立会话
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .mutating(Request::post(&self.url("/api/login/")))
            .json(credentials)?
            .send()
            .await?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(response.json::<LoginResponse>().await?)
    }

    /// 注销当前会话
    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self
            .mutating(Request::post(&self.url("/api/logout/")))
            .send()
            .await?;
        if !response.ok() {
            return Err(error_from_response(response).await);
        }
        Ok(())
    }
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> ShopApi {
    use_context::<ShopApi>().expect("ShopApi should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = ShopApi::new("http://127.0.0.1:8000/");
        assert_eq!(api.url("/api/products/"), "http://127.0.0.1:8000/api/products/");
        assert_eq!(api.url("api/login/"), "http://127.0.0.1:8000/api/login/");
    }

    #[test]
    fn asset_url_resolves_relative_paths_against_backend() {
        let api = ShopApi::default();
        assert_eq!(
            api.asset_url("/media/product_images/a.png"),
            "http://127.0.0.1:8000/media/product_images/a.png"
        );
    }

    #[test]
    fn asset_url_leaves_absolute_urls_untouched() {
        let api = ShopApi::default();
        assert_eq!(
            api.asset_url("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn not_found_predicate_only_matches_404() {
        assert!(ApiError::Http { status: 404, detail: None }.is_not_found());
        assert!(!ApiError::Http { status: 500, detail: None }.is_not_found());
        assert!(!ApiError::Network("offline".into()).is_not_found());
    }

    #[test]
    fn display_prefers_detail_when_present() {
        let err = ApiError::Http {
            status: 403,
            detail: Some("Invalid credentials.".into()),
        };
        assert_eq!(err.to_string(), "HTTP 403: Invalid credentials.");
        assert_eq!(
            ApiError::Http { status: 500, detail: None }.to_string(),
            "HTTP 500"
        );
    }
}
