use shared::models::Product;
use yew::prelude::*;

use crate::checkout::format_price;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    /// Emitted when the visitor wants this product in the cart.
    pub on_add: Callback<Product>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let on_click = {
        let product = props.product.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(product.clone()))
    };

    html! {
        <div class="card bg-base-100 shadow-md">
            <figure class="relative">
                if let Some(tag) = &props.product.tag {
                    <span class="badge badge-secondary absolute top-2 left-2">{tag.clone()}</span>
                }
                <img src={props.product.image.clone()} alt={props.product.name.clone()} class="h-44 w-full object-cover" />
            </figure>
            <div class="card-body p-4">
                <h3 class="card-title text-base">{&props.product.name}</h3>
                if let Some(description) = &props.product.description {
                    <p class="text-sm text-base-content/70 line-clamp-2">{description.clone()}</p>
                }
                <div class="flex items-center justify-between mt-2">
                    <span class="text-sm text-base-content/60">{&props.product.category_name}</span>
                    <span class="font-semibold">{format_price(props.product.price)}</span>
                </div>
                <div class="card-actions mt-2">
                    <button class="btn btn-primary btn-sm w-full" onclick={on_click}>
                        {"Adicionar ao carrinho"}
                    </button>
                </div>
            </div>
        </div>
    }
}
