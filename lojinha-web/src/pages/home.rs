use shared::models::Product;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::*;

use crate::components::product_card::ProductCard;
use crate::components::quantity_modal::QuantityModal;
use crate::routes::MainRoute;
use crate::stores::cart::{self, CartState};
use crate::stores::catalog::CatalogState;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let catalog = use_store_value::<CatalogState>();
    let (_, cart_dispatch) = use_store::<CartState>();
    let selected = use_state(|| None::<Product>);

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

    html! {
        <>
            <section class="hero bg-base-200 rounded-lg mb-8">
                <div class="hero-content text-center py-12">
                    <div>
                        <h1 class="text-4xl font-bold">{"Presentes que contam histórias"}</h1>
                        <p class="py-4 text-base-content/70">
                            {"Canecas, chaveiros e lembrancinhas personalizadas, feitas à mão."}
                        </p>
                    </div>
                </div>
            </section>

            { for catalog.categories.iter().map(|category| {
                let products = category.flattened_products();
                html! {
                    <section class="mb-10">
                        <div class="flex items-center justify-between mb-4">
                            <div>
                                <h2 class="text-2xl font-semibold">{&category.name}</h2>
                                <p class="text-sm text-base-content/60">{&category.description}</p>
                            </div>
                            <Link<MainRoute>
                                to={MainRoute::Category { slug: category.id.clone() }}
                                classes="btn btn-outline btn-sm"
                            >
                                {"Ver mais"}
                            </Link<MainRoute>>
                        </div>
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-4">
                            { for products.into_iter().map(|product| html! {
                                <ProductCard {product} on_add={on_add.clone()} />
                            }) }
                        </div>
                    </section>
                }
            }) }

            <QuantityModal product={(*selected).clone()} {on_confirm} {on_close} />
        </>
    }
}
