use shared::models::ResetPasswordRequest;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{ApiError, LojinhaClient};
use crate::containers::portal::PortalShell;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct ResetPasswordPageProps {
    /// Recovering user id from the `/portal/redefinir-senha/:user_id` route.
    pub user_id: String,
}

#[function_component(ResetPasswordPage)]
pub fn reset_password_page(props: &ResetPasswordPageProps) -> Html {
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let user_id = Uuid::parse_str(&props.user_id).ok();

    // A missing or mangled id means the visitor skipped the code step.
    let Some(user_id) = user_id else {
        return html! {
            <PortalShell
                title="Link Inválido"
                subtitle="Este link de recuperação é inválido ou já expirou."
            >
                <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary mt-4">
                    {"Voltar ao login"}
                </Link<MainRoute>>
            </PortalShell>
        };
    };

    let onsubmit = {
        let password = password.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let password_value = (*password).clone();
            if password_value != *confirm {
                error.set(Some("As senhas não conferem.".to_string()));
                return;
            }
            loading.set(true);
            error.set(None);
            let loading = loading.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = LojinhaClient::shared();
                let request = ResetPasswordRequest {
                    user_id,
                    password: password_value,
                };
                match client.reset_password(&request).await {
                    Ok(()) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&MainRoute::Login);
                        }
                    }
                    Err(ApiError::Server(body)) => error.set(Some(body.message)),
                    Err(_) => error.set(Some("Erro ao redefinir senha.".to_string())),
                }
                loading.set(false);
            });
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };
    let on_confirm_change = {
        let confirm = confirm.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                confirm.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*password).is_empty() || (*confirm).is_empty() || is_busy;

    html! {
        <PortalShell
            title="Redefinir Senha"
            subtitle="Escolha sua nova senha de acesso."
        >
            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }
            <form class="mt-2" onsubmit={onsubmit}>
                <div class="form-control">
                    <label class="label" for="password">
                        <span class="label-text">{"Nova senha"}</span>
                    </label>
                    <input
                        id="password"
                        class="input input-bordered"
                        type="password"
                        required=true
                        autocomplete="new-password"
                        value={(*password).clone()}
                        oninput={on_password_change}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="confirm">
                        <span class="label-text">{"Confirmar senha"}</span>
                    </label>
                    <input
                        id="confirm"
                        class="input input-bordered"
                        type="password"
                        required=true
                        autocomplete="new-password"
                        value={(*confirm).clone()}
                        oninput={on_confirm_change}
                    />
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                        {if is_busy { "Salvando..." } else { "Redefinir senha" }}
                    </button>
                </div>
            </form>
        </PortalShell>
    }
}
