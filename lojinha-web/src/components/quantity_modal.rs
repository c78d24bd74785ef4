use shared::models::Product;
use yew::prelude::*;

use crate::checkout::format_price;

#[derive(Properties, PartialEq)]
pub struct QuantityModalProps {
    /// Product being added; `None` keeps the modal closed.
    pub product: Option<Product>,
    pub on_confirm: Callback<(Product, u32)>,
    pub on_close: Callback<()>,
}

/// Quantity picker shown before a product enters the cart.
#[function_component(QuantityModal)]
pub fn quantity_modal(props: &QuantityModalProps) -> Html {
    let quantity = use_state(|| 1u32);

    let Some(product) = props.product.clone() else {
        return html! {};
    };

    let on_decrease = {
        let quantity = quantity.clone();
        Callback::from(move |_: MouseEvent| {
            quantity.set((*quantity).saturating_sub(1).max(1));
        })
    };
    let on_increase = {
        let quantity = quantity.clone();
        Callback::from(move |_: MouseEvent| quantity.set(*quantity + 1))
    };
    let on_confirm = {
        let quantity = quantity.clone();
        let product = product.clone();
        let confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            confirm.emit((product.clone(), *quantity));
            quantity.set(1);
        })
    };
    let on_close = {
        let quantity = quantity.clone();
        let close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            quantity.set(1);
            close.emit(());
        })
    };

    html! {
        <div class="modal modal-open">
            <div class="modal-box">
                <h3 class="font-bold text-lg">{&product.name}</h3>
                <p class="py-2">{format_price(product.price)}</p>
                <div class="flex items-center justify-center gap-4 py-4">
                    <button class="btn btn-circle btn-sm" onclick={on_decrease}>{"-"}</button>
                    <span class="text-xl font-semibold w-8 text-center">{*quantity}</span>
                    <button class="btn btn-circle btn-sm" onclick={on_increase}>{"+"}</button>
                </div>
                <div class="modal-action">
                    <button class="btn" onclick={on_close}>{"Cancelar"}</button>
                    <button class="btn btn-primary" onclick={on_confirm}>{"Adicionar"}</button>
                </div>
            </div>
        </div>
    }
}
