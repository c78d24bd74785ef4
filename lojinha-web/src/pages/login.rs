use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::containers::portal::PortalShell;
use crate::routes::MainRoute;
use crate::stores::session::{self, SessionState};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let (_, dispatch) = use_store::<SessionState>();

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let username_value = (*username).clone();
            let password_value = (*password).clone();
            loading.set(true);
            error.set(None);
            let loading = loading.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                match session::login(&dispatch, &username_value, &password_value).await {
                    Ok(user_id) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&MainRoute::Mfa {
                                user_id: user_id.to_string(),
                            });
                        }
                    }
                    Err(err) => error.set(Some(err.message)),
                }
                loading.set(false);
            });
        })
    };

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                username.set(input.value());
            }
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

    let is_busy = *loading;
    let disable_submit = (*username).is_empty() || (*password).is_empty() || is_busy;

    html! {
        <PortalShell
            title="Área Administrativa"
            subtitle="Entre com suas credenciais para acessar"
        >
            <form class="mt-2" onsubmit={onsubmit}>
                if let Some(message) = &*error {
                    <div class="alert alert-error">
                        <span>{message.clone()}</span>
                    </div>
                }
                <div class="form-control">
                    <label class="label" for="username">
                        <span class="label-text">{"Usuário"}</span>
                    </label>
                    <input
                        id="username"
                        class="input input-bordered"
                        type="text"
                        required=true
                        autocomplete="username"
                        value={(*username).clone()}
                        oninput={on_username_change}
                    />
                </div>
                <div class="form-control">
                    <label class="label" for="password">
                        <span class="label-text">{"Senha"}</span>
                    </label>
                    <input
                        id="password"
                        class="input input-bordered"
                        type="password"
                        required=true
                        autocomplete="current-password"
                        value={(*password).clone()}
                        oninput={on_password_change}
                    />
                </div>
                <div class="form-control mt-6">
                    <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                        {if is_busy { "Entrando..." } else { "Entrar" }}
                    </button>
                </div>
                <p class="text-sm text-center mt-4">
                    <Link<MainRoute> to={MainRoute::ForgotPassword} classes="link">
                        {"Esqueci minha senha"}
                    </Link<MainRoute>>
                </p>
            </form>
        </PortalShell>
    }
}
