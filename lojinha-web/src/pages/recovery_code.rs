use shared::models::RecoveryCodeRequest;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{ApiError, LojinhaClient};
use crate::containers::portal::PortalShell;
use crate::routes::MainRoute;
use crate::stores::session::code_is_valid;

#[derive(Properties, PartialEq)]
pub struct RecoveryCodePageProps {
    /// Recovering user id from the `/portal/codigo/:user_id` route.
    pub user_id: String,
}

#[function_component(RecoveryCodePage)]
pub fn recovery_code_page(props: &RecoveryCodePageProps) -> Html {
    let code = use_state(String::new);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let user_id = Uuid::parse_str(&props.user_id).ok();
    let route_user_id = props.user_id.clone();

    let onsubmit = {
        let code = code.clone();
        let error = error.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        let route_user_id = route_user_id.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(user_id) = user_id else {
                error.set(Some(
                    "Usuário não identificado. Volte e insira o email novamente.".to_string(),
                ));
                return;
            };
            let code_value = (*code).clone();
            if !code_is_valid(&code_value) {
                error.set(Some("Insira o código de 6 dígitos.".to_string()));
                return;
            }
            loading.set(true);
            error.set(None);
            let loading = loading.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            let route_user_id = route_user_id.clone();
            spawn_local(async move {
                let client = LojinhaClient::shared();
                let request = RecoveryCodeRequest { code: code_value };
                match client.verify_recovery_code(user_id, &request).await {
                    Ok(response) if response.valid => {
                        if let Some(navigator) = navigator {
                            navigator.push(&MainRoute::ResetPassword {
                                user_id: route_user_id,
                            });
                        }
                    }
                    Ok(_) => error.set(Some("Código inválido.".to_string())),
                    Err(ApiError::Server(body)) => error.set(Some(body.message)),
                    Err(_) => {
                        error.set(Some("Código de recuperação inválido ou expirado.".to_string()));
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_resend = {
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(user_id) = user_id else {
                return;
            };
            let error = error.clone();
            let notice = notice.clone();
            notice.set(None);
            spawn_local(async move {
                let client = LojinhaClient::shared();
                match client.resend_recovery_code(user_id).await {
                    Ok(()) => notice.set(Some("Código reenviado — verifique seu email.".to_string())),
                    Err(_) => error.set(Some("Erro ao reenviar código.".to_string())),
                }
            });
        })
    };

    let on_code_change = {
        let code = code.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let digits: String = input.value().chars().filter(char::is_ascii_digit).collect();
                code.set(digits.chars().take(6).collect());
            }
        })
    };

    let is_busy = *loading;

    html! {
        <PortalShell
            title="Código de Recuperação"
            subtitle="Digite o código de 6 dígitos enviado para seu email."
        >
            if let Some(message) = &*error {
                <div class="alert alert-error"><span>{message.clone()}</span></div>
            }
            if let Some(message) = &*notice {
                <div class="alert alert-success"><span>{message.clone()}</span></div>
            }
            <form class="mt-2" onsubmit={onsubmit}>
                <div class="form-control">
                    <input
                        class="input input-bordered text-center text-2xl tracking-[0.5em]"
                        inputmode="numeric"
                        maxlength="6"
                        value={(*code).clone()}
                        oninput={on_code_change}
                    />
                </div>
                <div class="flex justify-center gap-3 mt-6">
                    <button class="btn btn-primary" type="submit" disabled={is_busy}>
                        {if is_busy { "Verificando..." } else { "Verificar" }}
                    </button>
                    <button class="btn btn-outline" type="button" onclick={on_resend}>
                        {"Reenviar código"}
                    </button>
                </div>
                <p class="text-sm text-center mt-4">
                    <Link<MainRoute> to={MainRoute::ForgotPassword} classes="link">
                        {"Voltar"}
                    </Link<MainRoute>>
                </p>
            </form>
        </PortalShell>
    }
}
