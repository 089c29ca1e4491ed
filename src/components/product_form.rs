//! 商品表单组件（创建/编辑共用）
//!
//! 无 `product_id` 时为创建模式（POST）；有 `product_id` 时先拉取
//! 当前值回填，再以编辑模式提交（PUT）。提交始终使用 multipart
//! 编码以支持可选的图片上传。状态机仅有
//! idle -> submitting -> success|error，无重试、无乐观更新。

mod form_state;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, use_api};
use crate::web::dialog::confirm;
use crate::web::router::use_router;
use self::form_state::FormState;

/// 提交失败映射为用户可见文案
fn submit_failure_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Network(_) => "Network error.",
        _ => "Failed to process request.",
    }
}

#[component]
pub fn ProductForm(product_id: Option<u32>) -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let state = FormState::new();
    let (message, set_message) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);
    // 编辑模式下商品已有的图片路径（用于预览）
    let (existing_image, set_existing_image) = signal(Option::<String>::None);

    // 编辑模式：挂载时拉取当前值并回填
    Effect::new(move |_| {
        let Some(id) = product_id else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            match api.get_product(id).await {
                Ok(product) => {
                    state.populate(&product);
                    set_existing_image.set(product.image.clone());
                }
                Err(_) => {
                    set_message.set(Some("Failed to fetch product details".to_string()));
                }
            }
        });
    });

    let on_file_change = move |ev: leptos::web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        state.image.set(input.files().and_then(|files| files.get(0)));
    };

    let submit_api = use_api();
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        if let Err(missing) = state.validate() {
            set_message.set(Some(missing.to_string()));
            return;
        }
        let form = match state.to_form_data() {
            Ok(form) => form,
            Err(err) => {
                web_sys::console::error_1(&format!("[ProductForm] FormData: {}", err).into());
                set_message.set(Some("Failed to process request.".to_string()));
                return;
            }
        };

        set_is_submitting.set(true);
        set_message.set(None);

        let api = submit_api.clone();
        spawn_local(async move {
            let result = match product_id {
                Some(id) => api.update_product(id, form).await,
                None => api.create_product(form).await,
            };
            match result {
                Ok(()) => {
                    state.reset();
                    set_message.set(Some(match product_id {
                        Some(_) => "Product updated successfully!".to_string(),
                        None => "Product created successfully!".to_string(),
                    }));
                    router.navigate("/manage");
                }
                Err(err) => {
                    set_message.set(Some(submit_failure_message(&err).to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    // StoredValue 让删除回调保持 Copy，可以在 Show 的子闭包里反复使用
    let delete_api = StoredValue::new(use_api());
    let handle_delete = move |_| {
        let Some(id) = product_id else {
            return;
        };
        if !confirm("Are you sure you want to delete this product?") {
            return;
        }
        let api = delete_api.get_value();
        spawn_local(async move {
            match api.delete_product(id).await {
                Ok(()) => {
                    state.reset();
                    set_message.set(Some("Product deleted successfully!".to_string()));
                    router.navigate("/manage");
                }
                Err(ApiError::Network(_)) => {
                    set_message.set(Some("Network error while deleting.".to_string()));
                }
                Err(_) => {
                    set_message.set(Some("Failed to delete product.".to_string()));
                }
            }
        });
    };

    let preview_api = use_api();

    view! {
        <div class="max-w-lg mx-auto bg-gray-900 text-white shadow-lg rounded-lg p-6">
            <Show when=move || message.get().is_some()>
                <p class="text-green-400 mb-4" aria-live="polite">
                    {move || message.get().unwrap_or_default()}
                </p>
            </Show>

            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class="block font-medium text-gray-300" for="name">"Name"</label>
                    <input
                        id="name"
                        type="text"
                        on:input=move |ev| state.name.set(event_target_value(&ev))
                        prop:value=state.name
                        class="border p-2 w-full text-black bg-gray-100"
                    />
                </div>
                <div>
                    <label class="block font-medium text-gray-300" for="description">"Description"</label>
                    <textarea
                        id="description"
                        on:input=move |ev| state.description.set(event_target_value(&ev))
                        prop:value=state.description
                        class="border p-2 w-full text-black bg-gray-100"
                    ></textarea>
                </div>
                <div>
                    <label class="block font-medium text-gray-300" for="price">"Price"</label>
                    <input
                        id="price"
                        type="number"
                        step="0.01"
                        on:input=move |ev| state.price.set(event_target_value(&ev))
                        prop:value=state.price
                        class="border p-2 w-full text-black bg-gray-100"
                    />
                </div>
                <div>
                    <label class="block font-medium text-gray-300" for="stock">"Stock"</label>
                    <input
                        id="stock"
                        type="number"
                        on:input=move |ev| state.stock.set(event_target_value(&ev))
                        prop:value=state.stock
                        class="border p-2 w-full text-black bg-gray-100"
                    />
                </div>
                <div>
                    <label class="block font-medium text-gray-300" for="image">"Image"</label>
                    <input
                        id="image"
                        type="file"
                        on:change=on_file_change
                        class="border p-2 w-full text-gray-400 bg-gray-100"
                    />
                    // 编辑模式下预览当前图片
                    {move || {
                        existing_image
                            .get()
                            .map(|path| {
                                let src = preview_api.asset_url(&path);
                                view! { <img src=src class="mt-2 w-48" /> }
                            })
                    }}
                </div>
                <button
                    type="submit"
                    disabled=move || is_submitting.get()
                    class="bg-blue-500 text-white p-2 rounded w-full hover:bg-blue-600 disabled:opacity-50"
                >
                    {match product_id {
                        Some(_) => "Update Product",
                        None => "Create Product",
                    }}
                </button>
                <Show when=move || product_id.is_some()>
                    <button
                        type="button"
                        on:click=handle_delete
                        class="bg-red-500 text-white p-2 rounded w-full mt-2 hover:bg-red-600"
                    >
                        "Delete Product"
                    </button>
                </Show>
            </form>
        </div>
    }
}

// =========================================================
// 路由包装页面
// =========================================================

#[component]
pub fn CreateProductPage() -> impl IntoView {
    view! {
        <main class="container mx-auto p-4 min-h-screen bg-gray-100">
            <h1 class="text-3xl font-bold mb-4">"Create a New Product"</h1>
            <ProductForm product_id=None />
        </main>
    }
}

#[component]
pub fn EditProductPage(id: u32) -> impl IntoView {
    view! {
        <main class="container mx-auto p-4 min-h-screen bg-gray-100">
            <h1 class="text-2xl font-bold mb-4">"Edit Product"</h1>
            <ProductForm product_id=Some(id) />
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::submit_failure_message;
    use crate::api::ApiError;

    #[test]
    fn network_failures_get_their_own_message() {
        assert_eq!(
            submit_failure_message(&ApiError::Network("offline".into())),
            "Network error."
        );
    }

    #[test]
    fn http_failures_use_the_generic_message() {
        let err = ApiError::Http {
            status: 400,
            detail: Some("price: invalid".into()),
        };
        assert_eq!(submit_failure_message(&err), "Failed to process request.");
    }
}
