use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::*;

use crate::checkout::{format_price, order_message, whatsapp_url};
use crate::config::FrontendConfig;
use crate::stores::cart::{self, CartState};

#[function_component(CartPage)]
pub fn cart_page() -> Html {
    let (cart, dispatch) = use_store::<CartState>();

    if cart.is_empty() {
        return html! {
            <div class="text-center py-16">
                <h1 class="text-2xl font-semibold">{"Carrinho vazio"}</h1>
                <p class="text-base-content/60 mt-2">
                    {"Adicione produtos para prosseguir com seu pedido."}
                </p>
            </div>
        };
    }

    let on_checkout = {
        let cart = cart.clone();
        Callback::from(move |_: MouseEvent| {
            let config = FrontendConfig::default();
            let url = whatsapp_url(&config.whatsapp_number, &order_message(&cart));
            if let Some(window) = web_sys::window() {
                let _ = window.open_with_url_and_target(&url, "_blank");
            }
        })
    };
    let on_clear = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| cart::clear_cart(&dispatch))
    };

    html! {
        <>
            <h1 class="text-3xl font-bold mb-6">{"Meu Carrinho"}</h1>
            <ul class="space-y-4">
                { for cart.items.iter().map(|item| {
                    let product_id = item.product_id.clone();
                    let on_decrease = {
                        let dispatch = dispatch.clone();
                        let product_id = product_id.clone();
                        Callback::from(move |_: MouseEvent| cart::decrease(&dispatch, &product_id))
                    };
                    let on_increase = {
                        let dispatch = dispatch.clone();
                        let product_id = product_id.clone();
                        Callback::from(move |_: MouseEvent| cart::increase(&dispatch, &product_id))
                    };
                    let on_remove = {
                        let dispatch = dispatch.clone();
                        let product_id = product_id.clone();
                        Callback::from(move |_: MouseEvent| {
                            cart::remove_from_cart(&dispatch, &product_id);
                        })
                    };
                    html! {
                        <li class="card card-side bg-base-100 shadow-sm">
                            <figure class="w-28">
                                <img src={item.image.clone()} alt={item.name.clone()} class="object-cover h-full" />
                            </figure>
                            <div class="card-body py-4">
                                <h3 class="card-title text-base">{&item.name}</h3>
                                <div class="flex items-center gap-3">
                                    <button class="btn btn-circle btn-xs" onclick={on_decrease}>{"-"}</button>
                                    <span class="w-6 text-center">{item.quantity}</span>
                                    <button class="btn btn-circle btn-xs" onclick={on_increase}>{"+"}</button>
                                </div>
                                <p class="text-sm">{"Preço: "}{format_price(item.subtotal())}</p>
                            </div>
                            <div class="flex items-center pr-4">
                                <button class="btn btn-ghost btn-sm text-error" onclick={on_remove}>
                                    <Icon icon_id={IconId::HeroiconsOutlineTrash} class="h-5 w-5" />
                                </button>
                            </div>
                        </li>
                    }
                }) }
            </ul>

            <h2 class="text-2xl font-semibold mt-6">{"Total: "}{format_price(cart.total())}</h2>

            <div class="flex gap-3 mt-4">
                <button class="btn btn-primary" onclick={on_checkout}>
                    {"Finalizar Pedido no WhatsApp"}
                </button>
                <button class="btn btn-outline btn-error" onclick={on_clear}>
                    {"Limpar Carrinho"}
                </button>
            </div>
        </>
    }
}
