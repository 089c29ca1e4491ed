//! 公开商品列表页 (`/products`)

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::models::Product;
use crate::web::router::use_router;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (products, set_products) = signal(Vec::<Product>::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.list_products().await {
                Ok(data) => set_products.set(data),
                Err(_) => set_error_msg.set(Some("Failed to fetch products".to_string())),
            }
        });
    });

    let asset_api = use_api();

    view! {
        <main class="container mx-auto p-4">
            <h1 class="text-3xl font-bold mb-4">"Product List"</h1>

            <Show when=move || error_msg.get().is_some()>
                <p class="mb-4 text-red-500">{move || error_msg.get().unwrap_or_default()}</p>
            </Show>

            <For
                each=move || products.get()
                key=|p| p.id
                children=move |product| {
                    let detail_path = format!("/products/{}", product.id);
                    let detail_href = detail_path.clone();
                    let image_url = product.image.as_ref().map(|path| asset_api.asset_url(path));
                    view! {
                        <div class="border rounded p-4 mb-4">
                            <h2 class="text-xl font-semibold">
                                <a
                                    href=detail_href
                                    class="text-blue-600 hover:underline"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        router.navigate(&detail_path);
                                    }
                                >
                                    {product.name.clone()}
                                </a>
                            </h2>
                            <p>{product.description.clone()}</p>
                            <p class="font-medium">"Price: " {product.display_price()}</p>
                            <p class="text-sm text-gray-600">"Stock: " {product.stock}</p>
                            {image_url.map(|src| view! {
                                <img src=src alt=product.name.clone() class="mt-2 w-48" />
                            })}
                        </div>
                    }
                }
            />
        </main>
    }
}
