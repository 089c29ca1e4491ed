//! 注销页 (`/logout`)
//!
//! 副作用页面：挂载时发起一次 CSRF 回显的注销请求，
//! 成功后导航到登录页；失败只输出诊断日志，无用户侧重试。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::{logout, use_auth};
use crate::web::router::use_router;

#[component]
pub fn LogoutPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let router = use_router();

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match logout(&auth, &api).await {
                Ok(()) => {
                    web_sys::console::log_1(
                        &"[Logout] Logout successful, redirecting to /login".into(),
                    );
                    router.navigate("/login");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[Logout] Logout failed: {}", err).into());
                }
            }
        });
    });

    view! {
        <div class="container mx-auto p-4">
            <p>"Logging out..."</p>
        </div>
    }
}
