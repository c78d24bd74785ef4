use shared::models::Product;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::*;

use crate::components::product_card::ProductCard;
use crate::components::quantity_modal::QuantityModal;
use crate::routes::MainRoute;
use crate::stores::cart::{self, CartState};
use crate::stores::catalog::CatalogState;

#[derive(Properties, PartialEq)]
pub struct CategoryPageProps {
    /// Slug from the `/categoria/:slug` route.
    pub slug: String,
}

#[function_component(CategoryPage)]
pub fn category_page(props: &CategoryPageProps) -> Html {
    let catalog = use_store_value::<CatalogState>();
    let (_, cart_dispatch) = use_store::<CartState>();
    let selected = use_state(|| None::<Product>);

    let Some(category) = catalog.category(&props.slug).cloned() else {
        return html! {
            <div class="text-center py-16">
                <h1 class="text-2xl font-semibold">{"Categoria não encontrada"}</h1>
                <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary mt-4">
                    {"Voltar à loja"}
                </Link<MainRoute>>
            </div>
        };
    };

    let on_add = {
        let selected = selected.clone();
        Callback::from(move |product: Product| selected.set(Some(product)))
    };
    let on_confirm = {
        let selected = selected.clone();
        Callback::from(move |(product, quantity): (Product, u32)| {
            cart::add_to_cart(&cart_dispatch, &product, quantity);
            selected.set(None);
        })
    };
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    let products = category.flattened_products();

    html! {
        <>
            <header class="mb-6">
                <h1 class="text-3xl font-bold">{&category.name}</h1>
                <p class="text-base-content/60">{&category.description}</p>
            </header>
            if products.is_empty() {
                <p class="text-base-content/60">{"Nenhum produto nesta categoria ainda."}</p>
            } else {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    { for products.into_iter().map(|product| html! {
                        <ProductCard {product} on_add={on_add.clone()} />
                    }) }
                </div>
            }
            <QuantityModal product={(*selected).clone()} {on_confirm} {on_close} />
        </>
    }
}
