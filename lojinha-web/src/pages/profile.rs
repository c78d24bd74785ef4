use shared::models::User;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::api::LojinhaClient;
use crate::stores::session::{self, SessionState};

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let profile = use_state(|| None::<User>);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();
    let (_, session_dispatch) = use_store::<SessionState>();

    {
        let profile = profile.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        let session_dispatch = session_dispatch.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = LojinhaClient::shared();
                match client.profile().await {
                    Ok(response) => profile.set(Some(response.user)),
                    Err(err) => {
                        if let Some(message) =
                            session::admin_error(&session_dispatch, navigator.as_ref(), &err)
                        {
                            error.set(Some(message.message));
                        }
                    }
                }
            });
            || ()
        });
    }

    html! {
        <>
            <header class="mb-6">
                <h1 class="text-3xl font-bold">{"Perfil"}</h1>
            </header>

            if let Some(message) = &*error {
                <div class="alert alert-error mb-4"><span>{message.clone()}</span></div>
            }

            {
                match &*profile {
                    Some(user) => html! {
                        <div class="card bg-base-100 shadow-sm max-w-md">
                            <div class="card-body">
                                <h2 class="card-title">{user.name.clone()}</h2>
                                <p><span class="font-semibold">{"Usuário: "}</span>{user.username.clone()}</p>
                                <p><span class="font-semibold">{"Email: "}</span>{user.email.clone()}</p>
                                <p><span class="font-semibold">{"Papel: "}</span>{user.role.to_string()}</p>
                            </div>
                        </div>
                    },
                    None => html! { <p class="text-base-content/60">{"Carregando perfil..."}</p> },
                }
            }
        </>
    }
}
