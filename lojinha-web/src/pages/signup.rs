use shared::models::SignupRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::stores::session;

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let name = use_state(String::new);
    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        let notice = notice.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            error.set(None);
            notice.set(None);
            if name.trim().is_empty() || username.trim().is_empty() || email.trim().is_empty() {
                error.set(Some("Preencha todos os campos.".to_string()));
                return;
            }
            if *password != *confirm {
                error.set(Some("As senhas não conferem.".to_string()));
                return;
            }
            let request = SignupRequest {
                username: username.trim().to_string(),
                password: (*password).clone(),
                name: name.trim().to_string(),
                email: email.trim().to_string(),
            };
            loading.set(true);
            let name = name.clone();
            let username = username.clone();
            let email = email.clone();
            let password = password.clone();
            let confirm = confirm.clone();
            let error = error.clone();
            let notice = notice.clone();
            let loading = loading.clone();
            spawn_local(async move {
                match session::signup(request).await {
                    Ok(()) => {
                        notice.set(Some("Acesso criado com sucesso.".to_string()));
                        name.set(String::new());
                        username.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                        confirm.set(String::new());
                    }
                    Err(err) => error.set(Some(err.message)),
                }
                loading.set(false);
            });
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

    let is_busy = *loading;

    html! {
        <>
            <header class="mb-6">
                <h1 class="text-3xl font-bold">{"Novo acesso"}</h1>
                <p class="text-base-content/60">{"Crie uma conta para outro membro da equipe"}</p>
            </header>

            if let Some(message) = &*error {
                <div class="alert alert-error mb-4"><span>{message.clone()}</span></div>
            }
            if let Some(message) = &*notice {
                <div class="alert alert-success mb-4"><span>{message.clone()}</span></div>
            }

            <form class="max-w-md space-y-4" onsubmit={onsubmit}>
                <div class="form-control">
                    <label class="label" for="name"><span class="label-text">{"Nome"}</span></label>
                    <input id="name" class="input input-bordered" value={(*name).clone()} oninput={bind_input(&name)} />
                </div>
                <div class="form-control">
                    <label class="label" for="username"><span class="label-text">{"Usuário"}</span></label>
                    <input id="username" class="input input-bordered" value={(*username).clone()} oninput={bind_input(&username)} />
                </div>
                <div class="form-control">
                    <label class="label" for="email"><span class="label-text">{"Email"}</span></label>
                    <input id="email" class="input input-bordered" type="email" value={(*email).clone()} oninput={bind_input(&email)} />
                </div>
                <div class="form-control">
                    <label class="label" for="password"><span class="label-text">{"Senha"}</span></label>
                    <input id="password" class="input input-bordered" type="password" autocomplete="new-password" value={(*password).clone()} oninput={bind_input(&password)} />
                </div>
                <div class="form-control">
                    <label class="label" for="confirm"><span class="label-text">{"Confirmar senha"}</span></label>
                    <input id="confirm" class="input input-bordered" type="password" autocomplete="new-password" value={(*confirm).clone()} oninput={bind_input(&confirm)} />
                </div>
                <button class="btn btn-primary" type="submit" disabled={is_busy}>
                    {if is_busy { "Criando..." } else { "Criar acesso" }}
                </button>
            </form>
        </>
    }
}
