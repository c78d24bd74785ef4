use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::api::LojinhaClient;
use crate::containers::portal::PortalShell;
use crate::routes::MainRoute;
use crate::stores::session::{self, SessionState};

#[derive(Properties, PartialEq)]
pub struct MfaPageProps {
    /// Pending user id from the `/portal/mfa/:user_id` route.
    pub user_id: String,
}

#[function_component(MfaPage)]
pub fn mfa_page(props: &MfaPageProps) -> Html {
    let code = use_state(String::new);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (session, dispatch) = use_store::<SessionState>();

    // The route carries the pending id; the store still remembers it if
    // the URL was mangled.
    let user_id = Uuid::parse_str(&props.user_id)
        .ok()
        .or(session.pending_user_id);

    let onsubmit = {
        let code = code.clone();
        let error = error.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(user_id) = user_id else {
                error.set(Some(
                    "Usuário não identificado. Volte e entre novamente.".to_string(),
                ));
                return;
            };
            let code_value = (*code).clone();
            loading.set(true);
            error.set(None);
            let loading = loading.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let result =
                    session::verify_mfa(&dispatch, navigator.as_ref(), user_id, &code_value).await;
                if let Err(err) = result {
                    error.set(Some(err.message));
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
                match client.resend_mfa(user_id).await {
                    Ok(()) => notice.set(Some(
                        "Código reenviado — verifique seu email administrativo.".to_string(),
                    )),
                    Err(_) => error.set(Some("Falha ao reenviar código.".to_string())),
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

    let navigator_back = navigator.clone();
    let on_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator_back {
            navigator.push(&MainRoute::Login);
        }
    });

    let is_busy = *loading;

    html! {
        <PortalShell
            title="Verificação Administrativa"
            subtitle="Digite o código de 6 dígitos enviado para seu email administrativo."
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
            </form>
            <p class="text-sm text-center mt-4">
                {"Problemas? "}
                <button class="link" onclick={on_back}>{"Voltar ao login administrativo"}</button>
            </p>
        </PortalShell>
    }
}
