use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::checkout::format_price;
use crate::routes::AdminRoute;
use crate::stores::catalog::{self, CatalogState};

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[function_component(AdminProductsPage)]
pub fn admin_products_page() -> Html {
    let (catalog_state, dispatch) = use_store::<CatalogState>();
    let navigator = use_navigator();

    let products = catalog_state.products();

    let on_new = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&AdminRoute::NewProduct);
            }
        })
    };

    html! {
        <>
            <header class="flex items-center justify-between mb-6">
                <div>
                    <h1 class="text-3xl font-bold">{"Produtos"}</h1>
                    <p class="text-base-content/60">{"Gerencie o catálogo de produtos"}</p>
                </div>
                <button class="btn btn-primary" onclick={on_new}>{"Novo produto"}</button>
            </header>

            if products.is_empty() {
                <p class="text-base-content/60">{"Nenhum produto cadastrado."}</p>
            } else {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    { for products.into_iter().map(|product| {
                        let edit_route = AdminRoute::EditProduct { id: product.id.clone() };
                        let on_delete = {
                            let dispatch = dispatch.clone();
                            let id = product.id.clone();
                            let name = product.name.clone();
                            Callback::from(move |_: MouseEvent| {
                                if confirm(&format!("Excluir produto \"{name}\"?")) {
                                    catalog::delete_product(&dispatch, &id);
                                }
                            })
                        };
                        html! {
                            <div class="card bg-base-100 shadow-md">
                                <figure class="relative">
                                    if let Some(tag) = &product.tag {
                                        <span class="badge badge-secondary absolute top-2 left-2">{tag.clone()}</span>
                                    }
                                    <img src={product.image.clone()} alt={product.name.clone()} class="h-36 w-full object-cover" />
                                </figure>
                                <div class="card-body p-4">
                                    <h3 class="card-title text-base">{&product.name}</h3>
                                    <div class="flex items-center justify-between">
                                        <span class="text-sm text-base-content/60">
                                            {if product.category_name.is_empty() { "—".to_string() } else { product.category_name.clone() }}
                                        </span>
                                        <span class="font-semibold">{format_price(product.price)}</span>
                                    </div>
                                    <div class="card-actions mt-2">
                                        <Link<AdminRoute> to={edit_route} classes="btn btn-outline btn-sm flex-1">
                                            {"Editar"}
                                        </Link<AdminRoute>>
                                        <button class="btn btn-error btn-sm flex-1" onclick={on_delete}>
                                            {"Excluir"}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            }
        </>
    }
}
