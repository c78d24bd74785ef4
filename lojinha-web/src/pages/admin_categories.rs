use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::stores::catalog::{self, CatalogState};

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[function_component(AdminCategoriesPage)]
pub fn admin_categories_page() -> Html {
    let (catalog_state, dispatch) = use_store::<CatalogState>();

    // `Some(id)` while editing an existing category, `None` for creation.
    let editing = use_state(|| None::<String>);
    let name = use_state(String::new);
    let description = use_state(String::new);
    let error = use_state(|| None::<String>);

    let reset_form = {
        let editing = editing.clone();
        let name = name.clone();
        let description = description.clone();
        move || {
            editing.set(None);
            name.set(String::new());
            description.set(String::new());
        }
    };

    let onsubmit = {
        let editing = editing.clone();
        let name = name.clone();
        let description = description.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        let reset_form = reset_form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let name_value = name.trim().to_string();
            if name_value.is_empty() {
                error.set(Some("Informe o nome da categoria.".to_string()));
                return;
            }
            error.set(None);
            match &*editing {
                Some(id) => catalog::update_category(&dispatch, id, &name_value, &description),
                None => catalog::create_category(&dispatch, &name_value, &description),
            }
            reset_form();
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

    let on_cancel = {
        let reset_form = reset_form.clone();
        Callback::from(move |_: MouseEvent| reset_form())
    };

    let form_title = if editing.is_some() { "Editar categoria" } else { "Nova categoria" };

    html! {
        <>
            <header class="mb-6">
                <h1 class="text-3xl font-bold">{"Categorias"}</h1>
                <p class="text-base-content/60">{"Organize as seções da loja"}</p>
            </header>

            if let Some(message) = &*error {
                <div class="alert alert-error mb-4"><span>{message.clone()}</span></div>
            }

            <form class="card bg-base-100 shadow-sm p-4 max-w-xl mb-8" onsubmit={onsubmit}>
                <h2 class="font-semibold mb-2">{form_title}</h2>
                <div class="form-control">
                    <label class="label" for="category-name"><span class="label-text">{"Nome"}</span></label>
                    <input id="category-name" class="input input-bordered" value={(*name).clone()} oninput={bind_input(&name)} />
                </div>
                <div class="form-control">
                    <label class="label" for="category-description"><span class="label-text">{"Descrição"}</span></label>
                    <input id="category-description" class="input input-bordered" value={(*description).clone()} oninput={bind_input(&description)} />
                </div>
                <div class="flex gap-3 mt-4">
                    <button class="btn btn-primary btn-sm" type="submit">{"Salvar"}</button>
                    if editing.is_some() {
                        <button class="btn btn-ghost btn-sm" type="button" onclick={on_cancel}>
                            {"Cancelar"}
                        </button>
                    }
                </div>
            </form>

            <ul class="space-y-2">
                { for catalog_state.categories.iter().map(|category| {
                    let on_edit = {
                        let editing = editing.clone();
                        let name = name.clone();
                        let description = description.clone();
                        let category = category.clone();
                        Callback::from(move |_: MouseEvent| {
                            editing.set(Some(category.id.clone()));
                            name.set(category.name.clone());
                            description.set(category.description.clone());
                        })
                    };
                    let on_delete = {
                        let dispatch = dispatch.clone();
                        let id = category.id.clone();
                        let label = category.name.clone();
                        Callback::from(move |_: MouseEvent| {
                            if confirm(&format!(
                                "Excluir a categoria \"{label}\" e todos os seus produtos?"
                            )) {
                                catalog::delete_category(&dispatch, &id);
                            }
                        })
                    };
                    html! {
                        <li class="card bg-base-100 shadow-sm">
                            <div class="card-body py-4 flex-row items-center justify-between">
                                <div>
                                    <h3 class="font-semibold">{&category.name}</h3>
                                    <p class="text-sm text-base-content/60">
                                        {format!("{} · {} produto(s)", category.description, category.products.len())}
                                    </p>
                                </div>
                                <div class="flex gap-2">
                                    <button class="btn btn-outline btn-sm" onclick={on_edit}>{"Editar"}</button>
                                    <button class="btn btn-error btn-sm" onclick={on_delete}>{"Excluir"}</button>
                                </div>
                            </div>
                        </li>
                    }
                }) }
            </ul>
        </>
    }
}
