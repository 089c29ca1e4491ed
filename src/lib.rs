//! Emporium 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型，含路由守卫决策）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `api`: 后端 REST API 客户端
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod home;
    mod icons;
    pub mod login;
    pub mod logout;
    pub mod manage;
    pub mod product_detail;
    pub mod product_form;
    pub mod products;
}
mod models;
mod serde_helper;

use crate::api::ShopApi;
use crate::auth::{AuthContext, has_session, init_auth};
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::logout::LogoutPage;
use crate::components::manage::ManagePage;
use crate::components::product_detail::ProductDetailPage;
use crate::components::product_form::{CreateProductPage, EditProductPage};
use crate::components::products::ProductsPage;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，
// 所有对 document.cookie / window.history 的操作都集中在这里。
pub(crate) mod web {
    pub mod cookie;
    pub mod dialog;
    pub mod route;
    pub mod router;

    pub use cookie::CookieJar;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Products => view! { <ProductsPage /> }.into_any(),
        AppRoute::ProductDetail(id) => view! { <ProductDetailPage id=id /> }.into_any(),
        AppRoute::CreateProduct => view! { <CreateProductPage /> }.into_any(),
        AppRoute::Manage => view! { <ManagePage /> }.into_any(),
        AppRoute::ManageEdit(id) => view! { <EditProductPage id=id /> }.into_any(),
        AppRoute::Login { from } => view! { <LoginPage from=from /> }.into_any(),
        AppRoute::Logout => view! { <LogoutPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-gray-100">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-red-500">"404"</h1>
                    <p class="text-xl mt-4 text-gray-700">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建 API 客户端（固定后端源），通过 Context 共享
    provide_context(ShopApi::default());

    // 2. 创建认证上下文并从 Cookie 初始化
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    view! {
        // 3. 路由器组件：注入会话检查函数实现守卫
        <Router check_session=has_session>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
