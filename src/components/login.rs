//! 员工登录页 (`/login`)
//!
//! `is_staff` 判断只在这里发生一次；守卫被重定向时携带的
//! `from` 参数在登录成功后作为回跳目标。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, use_api};
use crate::auth::{LoginOutcome, login, use_auth};
use crate::web::router::use_router;

/// 登录成功后的跳转目标：守卫携带的 `from` 优先，否则后台列表页
fn success_target(from: Option<&str>) -> &str {
    from.unwrap_or("/manage")
}

/// 将登录失败映射为用户可见文案
fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { detail, .. } => format!(
            "Login failed: {}",
            detail.as_deref().unwrap_or("Invalid credentials.")
        ),
        ApiError::Network(msg) => format!("Network error: {}", msg),
        ApiError::Decode(_) => "Login failed: Invalid credentials.".to_string(),
    }
}

#[component]
pub fn LoginPage(from: Option<String>) -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (message, set_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        // 客户端必填校验（仅此而已，无重试、无锁定）
        if username.get().is_empty() {
            set_message.set(Some("Username is required".to_string()));
            return;
        }
        if password.get().is_empty() {
            set_message.set(Some("Password is required".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_message.set(None);

        let api = api.clone();
        let from = from.clone();
        spawn_local(async move {
            match login(&auth, &api, username.get_untracked(), password.get_untracked()).await {
                LoginOutcome::Granted => {
                    router.navigate(success_target(from.as_deref()));
                }
                LoginOutcome::Denied => {
                    set_message.set(Some(
                        "Access denied: You are not a staff member.".to_string(),
                    ));
                }
                LoginOutcome::Failed(err) => {
                    set_message.set(Some(failure_message(&err)));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <main class="flex items-center justify-center h-screen bg-gray-900">
            <div class="bg-gray-800 text-white p-6 rounded-lg shadow-lg w-96">
                <h1 class="text-3xl font-bold text-center mb-4">"Staff Login"</h1>

                <Show when=move || message.get().is_some()>
                    <p class="mb-4 text-red-500 text-center">
                        {move || message.get().unwrap_or_default()}
                    </p>
                </Show>

                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label class="block font-medium text-gray-300" for="username">
                            "Username"
                        </label>
                        <input
                            id="username"
                            type="text"
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            prop:value=username
                            class="border p-2 w-full text-black bg-white rounded"
                            required
                        />
                    </div>
                    <div>
                        <label class="block font-medium text-gray-300" for="password">
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                            class="border p-2 w-full text-black bg-white rounded"
                            required
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || is_submitting.get()
                        class="bg-blue-500 hover:bg-blue-700 text-white p-2 rounded w-full transition duration-200"
                    >
                        {move || if is_submitting.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::{failure_message, success_target};
    use crate::api::ApiError;

    #[test]
    fn staff_login_without_return_target_lands_on_manage() {
        assert_eq!(success_target(None), "/manage");
    }

    #[test]
    fn staff_login_honors_the_guard_return_target() {
        assert_eq!(success_target(Some("/manage/7")), "/manage/7");
    }

    #[test]
    fn http_failure_uses_server_detail() {
        let err = ApiError::Http {
            status: 403,
            detail: Some("Account disabled.".to_string()),
        };
        assert_eq!(failure_message(&err), "Login failed: Account disabled.");
    }

    #[test]
    fn http_failure_without_detail_falls_back_to_generic_text() {
        let err = ApiError::Http {
            status: 401,
            detail: None,
        };
        assert_eq!(failure_message(&err), "Login failed: Invalid credentials.");
    }

    #[test]
    fn transport_failure_is_a_network_message() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(failure_message(&err), "Network error: connection refused");
    }
}
