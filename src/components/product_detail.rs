//! 公开商品详情页 (`/products/{id}`)
//!
//! 资源不存在（404）走"未找到"展示；其余拉取失败显示行内错误。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, use_api};
use crate::models::Product;
use crate::web::router::use_router;

/// 详情页加载状态：idle -> loaded | not_found | failed
#[derive(Clone, Debug, Default, PartialEq)]
enum DetailState {
    #[default]
    Loading,
    Loaded(Product),
    NotFound,
    Failed(String),
}

/// 将拉取失败映射为详情页状态
fn state_for_error(err: &ApiError) -> DetailState {
    if err.is_not_found() {
        DetailState::NotFound
    } else {
        DetailState::Failed("Error fetching product details".to_string())
    }
}

#[component]
pub fn ProductDetailPage(id: u32) -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (state, set_state) = signal(DetailState::default());

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.get_product(id).await {
                Ok(product) => set_state.set(DetailState::Loaded(product)),
                Err(err) => set_state.set(state_for_error(&err)),
            }
        });
    });

    let asset_api = use_api();

    move || match state.get() {
        DetailState::Loading => view! {
            <main class="container mx-auto p-4">
                <p class="text-gray-500">"Loading product details..."</p>
            </main>
        }
        .into_any(),
        DetailState::NotFound => view! {
            <main class="flex items-center justify-center min-h-screen bg-gray-100">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-red-500">"404"</h1>
                    <p class="text-xl mt-4 text-gray-700">"Product not found"</p>
                    <a
                        href="/products"
                        class="text-blue-600 hover:underline mt-4 inline-block"
                        on:click=move |ev| {
                            ev.prevent_default();
                            router.navigate("/products");
                        }
                    >
                        "Back to products"
                    </a>
                </div>
            </main>
        }
        .into_any(),
        DetailState::Failed(message) => view! {
            <main class="container mx-auto p-4">
                <p class="text-red-500">{message}</p>
            </main>
        }
        .into_any(),
        DetailState::Loaded(product) => {
            let image_url = product.image.as_ref().map(|path| asset_api.asset_url(path));
            view! {
                <main class="container mx-auto p-4">
                    <h1 class="text-3xl font-bold mb-4">{product.name.clone()}</h1>
                    {image_url.map(|src| view! {
                        <img src=src alt=product.name.clone() class="mb-4 w-64 rounded" />
                    })}
                    <p class="text-gray-700 mb-2">{product.description.clone()}</p>
                    <p class="text-blue-600 font-semibold text-lg">{product.display_price()}</p>
                    <p class="text-sm text-gray-600 mt-1">"Stock: " {product.stock}</p>
                    <a
                        href="/products"
                        class="text-blue-600 hover:underline mt-6 inline-block"
                        on:click=move |ev| {
                            ev.prevent_default();
                            router.navigate("/products");
                        }
                    >
                        "Back to products"
                    </a>
                </main>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DetailState, state_for_error};
    use crate::api::ApiError;

    #[test]
    fn missing_resource_goes_to_not_found() {
        let err = ApiError::Http {
            status: 404,
            detail: None,
        };
        assert_eq!(state_for_error(&err), DetailState::NotFound);
    }

    #[test]
    fn other_failures_surface_an_inline_error() {
        let http = ApiError::Http {
            status: 500,
            detail: None,
        };
        assert_eq!(
            state_for_error(&http),
            DetailState::Failed("Error fetching product details".to_string())
        );
        let network = ApiError::Network("offline".to_string());
        assert_eq!(
            state_for_error(&network),
            DetailState::Failed("Error fetching product details".to_string())
        );
    }
}
