//! 商城首页：带门店外壳（页头导航 + 页脚）的商品网格

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::use_auth;
use crate::components::icons::ShoppingBag;
use crate::models::Product;
use crate::web::router::use_router;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();
    let router = use_router();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 初始加载：每次导航到首页都重新拉取（无客户端缓存）
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.list_products().await {
                Ok(data) => set_products.set(data),
                Err(_) => set_error_msg.set(Some("Failed to fetch products".to_string())),
            }
            set_loading.set(false);
        });
    });

    let is_authenticated = move || auth.state.get().is_authenticated;

    let nav_link = move |ev: leptos::web_sys::MouseEvent, to: &str| {
        ev.prevent_default();
        router.navigate(to);
    };

    let asset_api = use_api();

    view! {
        <main class="bg-gray-100 min-h-screen">
            // 页头：logo 与导航
            <header class="bg-white shadow p-4">
                <div class="container mx-auto flex justify-between items-center">
                    <div class="flex items-center gap-2">
                        <ShoppingBag attr:class="h-6 w-6 text-blue-600" />
                        <h1 class="text-2xl font-bold text-blue-600">"Emporium"</h1>
                    </div>
                    <nav>
                        <ul class="flex space-x-4">
                            <li>
                                <a
                                    href="/"
                                    on:click=move |ev| nav_link(ev, "/")
                                    class="text-gray-700 hover:text-blue-600"
                                >
                                    "Home"
                                </a>
                            </li>
                            <li>
                                <a
                                    href="/products"
                                    on:click=move |ev| nav_link(ev, "/products")
                                    class="text-gray-700 hover:text-blue-600"
                                >
                                    "Products"
                                </a>
                            </li>
                            <li>
                                <Show
                                    when=is_authenticated
                                    fallback=move || view! {
                                        <a
                                            href="/login"
                                            on:click=move |ev| nav_link(ev, "/login")
                                            class="text-gray-700 hover:text-blue-600"
                                        >
                                            "Staff Login"
                                        </a>
                                    }
                                >
                                    <a
                                        href="/manage"
                                        on:click=move |ev| nav_link(ev, "/manage")
                                        class="text-gray-700 hover:text-blue-600"
                                    >
                                        "Manage"
                                    </a>
                                </Show>
                            </li>
                        </ul>
                    </nav>
                </div>
            </header>

            <div class="container mx-auto py-8">
                <h2 class="text-xl font-semibold mb-6">"Featured Products"</h2>

                <Show when=move || error_msg.get().is_some()>
                    <p class="mb-4 text-red-500">{move || error_msg.get().unwrap_or_default()}</p>
                </Show>

                <Show when=move || loading.get()>
                    <p class="text-gray-500">"Loading products..."</p>
                </Show>

                <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                    <For
                        each=move || products.get()
                        key=|p| p.id
                        children=move |product| {
                            let image_url = product
                                .image
                                .as_ref()
                                .map(|path| asset_api.asset_url(path));
                            let price = product.display_price();
                            let detail_path = format!("/products/{}", product.id);
                            let detail_href = detail_path.clone();
                            view! {
                                <div class="bg-white border rounded shadow hover:shadow-lg transition duration-200">
                                    {image_url.map(|src| view! {
                                        <img
                                            src=src
                                            alt=product.name.clone()
                                            class="w-full h-48 object-cover rounded-t"
                                        />
                                    })}
                                    <div class="p-4">
                                        <h3 class="text-lg font-bold text-gray-800">
                                            <a
                                                href=detail_href
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    router.navigate(&detail_path);
                                                }
                                            >
                                                {product.name.clone()}
                                            </a>
                                        </h3>
                                        <p class="text-sm text-gray-600 mt-2">{product.description.clone()}</p>
                                        <p class="mt-4 text-blue-600 font-semibold">{price}</p>
                                        <p class="text-xs text-gray-500 mt-1">"Stock: " {product.stock}</p>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>

            <footer class="bg-white border-t p-4">
                <div class="container mx-auto text-center text-gray-600">
                    "© 2025 Emporium. All rights reserved."
                </div>
            </footer>
        </main>
    }
}
