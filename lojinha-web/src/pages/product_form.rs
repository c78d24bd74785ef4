use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::routes::AdminRoute;
use crate::stores::catalog::{self, CatalogState, ProductDraft};

#[derive(Properties, PartialEq)]
pub struct ProductFormPageProps {
    /// `Some` when editing an existing product, `None` when creating.
    #[prop_or_default]
    pub id: Option<String>,
}

#[function_component(ProductFormPage)]
pub fn product_form_page(props: &ProductFormPageProps) -> Html {
    let (catalog_state, dispatch) = use_store::<CatalogState>();
    let navigator = use_navigator();

    let editing = props
        .id
        .as_ref()
        .and_then(|id| catalog_state.product(id));

    let name = use_state(|| editing.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let price = use_state(|| {
        editing
            .as_ref()
            .map(|p| format!("{:.2}", p.price))
            .unwrap_or_default()
    });
    let image = use_state(|| editing.as_ref().map(|p| p.image.clone()).unwrap_or_default());
    let description = use_state(|| {
        editing
            .as_ref()
            .and_then(|p| p.description.clone())
            .unwrap_or_default()
    });
    let tag = use_state(|| editing.as_ref().and_then(|p| p.tag.clone()).unwrap_or_default());
    let new_tag = use_state(String::new);
    let category_id = use_state(|| {
        editing
            .as_ref()
            .map(|p| p.category_id.clone())
            .or_else(|| catalog_state.categories.first().map(|c| c.id.clone()))
            .unwrap_or_default()
    });
    let error = use_state(|| None::<String>);

    if props.id.is_some() && editing.is_none() {
        return html! {
            <div class="text-center py-16">
                <h1 class="text-2xl font-semibold">{"Produto não encontrado"}</h1>
                <Link<AdminRoute> to={AdminRoute::Products} classes="btn btn-primary mt-4">
                    {"Voltar aos produtos"}
                </Link<AdminRoute>>
            </div>
        };
    }

    let onsubmit = {
        let name = name.clone();
        let price = price.clone();
        let image = image.clone();
        let description = description.clone();
        let tag = tag.clone();
        let new_tag = new_tag.clone();
        let category_id = category_id.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        let editing_id = props.id.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let name_value = name.trim().to_string();
            if name_value.is_empty() {
                error.set(Some("Informe o nome do produto.".to_string()));
                return;
            }
            let Ok(price_value) = price.replace(',', ".").parse::<f64>() else {
                error.set(Some("Preço inválido.".to_string()));
                return;
            };
            if price_value < 0.0 {
                error.set(Some("Preço inválido.".to_string()));
                return;
            }
            if category_id.is_empty() {
                error.set(Some("Escolha uma categoria.".to_string()));
                return;
            }

            // A freshly typed tag wins over the dropdown selection.
            let chosen_tag = if new_tag.trim().is_empty() {
                if tag.is_empty() { None } else { Some((*tag).clone()) }
            } else {
                catalog::create_tag(&dispatch, &new_tag);
                Some(new_tag.trim().to_string())
            };

            let draft = ProductDraft {
                name: name_value,
                price: price_value,
                image: (*image).clone(),
                description: if description.is_empty() {
                    None
                } else {
                    Some((*description).clone())
                },
                tag: chosen_tag,
                category_id: (*category_id).clone(),
            };
            match &editing_id {
                Some(id) => catalog::update_product(&dispatch, id, &draft),
                None => catalog::create_product(&dispatch, &draft),
            }
            if let Some(navigator) = &navigator {
                navigator.push(&AdminRoute::Products);
            }
        })
    };

    let bind_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };
    let on_description_change = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                description.set(input.value());
            }
        })
    };
    let on_tag_change = {
        let tag = tag.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                tag.set(select.value());
            }
        })
    };
    let on_category_change = {
        let category_id = category_id.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                category_id.set(select.value());
            }
        })
    };

    let title = if props.id.is_some() { "Editar produto" } else { "Novo produto" };

    html! {
        <>
            <header class="mb-6">
                <h1 class="text-3xl font-bold">{title}</h1>
            </header>

            if let Some(message) = &*error {
                <div class="alert alert-error mb-4"><span>{message.clone()}</span></div>
            }

            <form class="max-w-xl space-y-4" onsubmit={onsubmit}>
                <div class="form-control">
                    <label class="label" for="name"><span class="label-text">{"Nome"}</span></label>
                    <input id="name" class="input input-bordered" value={(*name).clone()} oninput={bind_input(&name)} />
                </div>
                <div class="form-control">
                    <label class="label" for="price"><span class="label-text">{"Preço (R$)"}</span></label>
                    <input id="price" class="input input-bordered" inputmode="decimal" value={(*price).clone()} oninput={bind_input(&price)} />
                </div>
                <div class="form-control">
                    <label class="label" for="image"><span class="label-text">{"Imagem (URL)"}</span></label>
                    <input id="image" class="input input-bordered" value={(*image).clone()} oninput={bind_input(&image)} />
                </div>
                <div class="form-control">
                    <label class="label" for="description"><span class="label-text">{"Descrição"}</span></label>
                    <textarea id="description" class="textarea textarea-bordered" value={(*description).clone()} oninput={on_description_change} />
                </div>
                <div class="form-control">
                    <label class="label" for="category"><span class="label-text">{"Categoria"}</span></label>
                    <select id="category" class="select select-bordered" onchange={on_category_change}>
                        { for catalog_state.categories.iter().map(|category| html! {
                            <option value={category.id.clone()} selected={*category_id == category.id}>
                                {category.name.clone()}
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-control">
                    <label class="label" for="tag"><span class="label-text">{"Tag"}</span></label>
                    <select id="tag" class="select select-bordered" onchange={on_tag_change}>
                        <option value="" selected={tag.is_empty()}>{"Sem tag"}</option>
                        { for catalog_state.tags.iter().map(|existing| html! {
                            <option value={existing.clone()} selected={*tag == *existing}>
                                {existing.clone()}
                            </option>
                        }) }
                    </select>
                </div>
                <div class="form-control">
                    <label class="label" for="new-tag"><span class="label-text">{"Ou crie uma nova tag"}</span></label>
                    <input id="new-tag" class="input input-bordered" value={(*new_tag).clone()} oninput={bind_input(&new_tag)} />
                </div>
                <div class="flex gap-3 pt-2">
                    <button class="btn btn-primary" type="submit">{"Salvar"}</button>
                    <Link<AdminRoute> to={AdminRoute::Products} classes="btn btn-ghost">
                        {"Cancelar"}
                    </Link<AdminRoute>>
                </div>
            </form>
        </>
    }
}
