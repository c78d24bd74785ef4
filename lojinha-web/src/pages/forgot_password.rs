use shared::models::ForgotPasswordRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{ApiError, LojinhaClient};
use crate::containers::portal::PortalShell;
use crate::routes::MainRoute;

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let email = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let email = email.clone();
        let error = error.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email).clone();
            loading.set(true);
            error.set(None);
            let loading = loading.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let client = LojinhaClient::shared();
                let request = ForgotPasswordRequest { email: email_value };
                match client.forgot_password(&request).await {
                    Ok(response) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&MainRoute::RecoveryCode {
                                user_id: response.id.to_string(),
                            });
                        }
                    }
                    Err(ApiError::Server(body)) => error.set(Some(body.message)),
                    Err(_) => {
                        error.set(Some("Erro ao enviar email de recuperação.".to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let is_busy = *loading;
    let disable_submit = (*email).is_empty() || is_busy;

    html! {
        <PortalShell
            title="Recuperar Senha"
            subtitle="Digite seu email para receber o código de recuperação de senha"
        >
            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }
            <form class="mt-2" onsubmit={onsubmit}>
                <div class="form-control">
                    <label class="label" for="email">
                        <span class="label-text">{"Email"}</span>
                    </label>
                    <input
                        id="email"
                        class="input input-bordered"
                        type="email"
                        required=true
                        value={(*email).clone()}
                        oninput={on_email_change}
                    />
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                        {if is_busy { "Enviando..." } else { "Enviar código de recuperação" }}
                    </button>
                </div>
                <p class="text-sm text-center mt-4">
                    <Link<MainRoute> to={MainRoute::Login} classes="link">
                        {"Voltar ao login"}
                    </Link<MainRoute>>
                </p>
            </form>
        </PortalShell>
    }
}
