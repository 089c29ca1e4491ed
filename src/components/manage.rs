//! 后台商品管理页 (`/manage`)
//!
//! 携带凭据拉取列表；删除前弹浏览器确认框；
//! 删除成功后只做本地列表过滤，不重新拉取。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::components::icons::{LogOut, Pencil, Plus, Trash2};
use crate::models::{Product, remove_product};
use crate::web::dialog::confirm;
use crate::web::router::use_router;

#[component]
pub fn ManagePage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (message, set_message) = signal(Option::<String>::None);

    // 挂载时拉取（携带会话凭据）
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.list_products_with_session().await {
                Ok(data) => set_products.set(data),
                Err(_) => set_message.set(Some("Error fetching products".to_string())),
            }
        });
    });

    let delete_api = use_api();
    let handle_delete = move |id: u32| {
        if !confirm("Are you sure you want to delete this product?") {
            return;
        }
        let api = delete_api.clone();
        spawn_local(async move {
            match api.delete_product(id).await {
                Ok(()) => {
                    set_products.update(|list| remove_product(list, id));
                }
                Err(_) => set_message.set(Some("Error deleting product".to_string())),
            }
        });
    };

    // 注销按钮只负责导航，真正的网络调用发生在注销页面
    let handle_logout = move |_| {
        router.navigate("/logout");
    };

    view! {
        <div class="p-6 bg-gray-900 min-h-screen">
            <header class="flex justify-between items-center mb-6">
                <h1 class="text-3xl font-extrabold text-white drop-shadow-lg">
                    "Manage Products"
                </h1>
                <button
                    on:click=handle_logout
                    class="bg-gray-800 text-red-400 px-6 py-2 rounded-full shadow-lg hover:bg-gray-700 transition duration-200 flex items-center gap-2"
                >
                    <LogOut attr:class="h-4 w-4" />
                    "Logout"
                </button>
            </header>

            <Show when=move || message.get().is_some()>
                <p class="mb-4 text-yellow-200 font-semibold">
                    {move || message.get().unwrap_or_default()}
                </p>
            </Show>

            <div class="mb-6">
                <a
                    href="/create-product"
                    on:click=move |ev| {
                        ev.prevent_default();
                        router.navigate("/create-product");
                    }
                    class="bg-gray-800 text-green-400 px-6 py-2 rounded-full shadow-lg hover:bg-gray-700 transition duration-200 inline-flex items-center gap-2"
                >
                    <Plus attr:class="h-4 w-4" />
                    "Create New Product"
                </a>
            </div>

            <ul class="space-y-6">
                <For
                    each=move || products.get()
                    key=|p| p.id
                    children=move |product| {
                        let id = product.id;
                        let edit_path = format!("/manage/{}", id);
                        let edit_href = edit_path.clone();
                        let handle_delete = handle_delete.clone();
                        view! {
                            <li class="bg-gray-800 bg-opacity-90 rounded-lg p-6 shadow-xl flex justify-between items-center">
                                <div>
                                    <h3 class="text-2xl font-bold text-white">{product.name.clone()}</h3>
                                    <p class="text-gray-300 mt-2">{product.description.clone()}</p>
                                    <p class="text-lg font-medium text-indigo-300 mt-2">
                                        {product.display_price()}
                                    </p>
                                    <p class="text-sm text-gray-400 mt-1">"Stock: " {product.stock}</p>
                                </div>
                                <div class="flex flex-col space-y-2">
                                    <a
                                        href=edit_href
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            router.navigate(&edit_path);
                                        }
                                        class="bg-blue-600 text-white px-4 py-2 rounded shadow hover:bg-blue-700 transition duration-200 inline-flex items-center gap-2"
                                    >
                                        <Pencil attr:class="h-4 w-4" />
                                        "Edit"
                                    </a>
                                    <button
                                        on:click=move |_| handle_delete(id)
                                        class="bg-red-600 text-white px-4 py-2 rounded shadow hover:bg-red-700 transition duration-200 inline-flex items-center gap-2"
                                    >
                                        <Trash2 attr:class="h-4 w-4" />
                                        "Delete"
                                    </button>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
