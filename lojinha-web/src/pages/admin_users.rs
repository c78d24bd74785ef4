use shared::models::{UpdateUserRequest, User};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::api::LojinhaClient;
use crate::stores::session::{self, SessionState};

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[function_component(AdminUsersPage)]
pub fn admin_users_page() -> Html {
    let users = use_state(Vec::<User>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let editing = use_state(|| None::<User>);
    let form_name = use_state(String::new);
    let form_email = use_state(String::new);
    let form_username = use_state(String::new);
    let saving = use_state(|| false);
    let navigator = use_navigator();
    let (_, session_dispatch) = use_store::<SessionState>();

    {
        let users = users.clone();
        let loading = loading.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        let session_dispatch = session_dispatch.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = LojinhaClient::shared();
                match client.list_users().await {
                    Ok(list) => users.set(list),
                    Err(err) => {
                        if let Some(message) =
                            session::admin_error(&session_dispatch, navigator.as_ref(), &err)
                        {
                            error.set(Some(message.message));
                        }
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let start_edit = {
        let editing = editing.clone();
        let form_name = form_name.clone();
        let form_email = form_email.clone();
        let form_username = form_username.clone();
        Callback::from(move |user: User| {
            form_name.set(user.name.clone());
            form_email.set(user.email.clone());
            form_username.set(user.username.clone());
            editing.set(Some(user));
        })
    };

    let close_edit = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(None))
    };

    let on_save = {
        let editing = editing.clone();
        let form_name = form_name.clone();
        let form_email = form_email.clone();
        let form_username = form_username.clone();
        let users = users.clone();
        let error = error.clone();
        let saving = saving.clone();
        let navigator = navigator.clone();
        let session_dispatch = session_dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(user) = (*editing).clone() else {
                return;
            };
            let request = UpdateUserRequest {
                name: (*form_name).clone(),
                email: (*form_email).clone(),
                username: (*form_username).clone(),
            };
            saving.set(true);
            let editing = editing.clone();
            let users = users.clone();
            let error = error.clone();
            let saving = saving.clone();
            let navigator = navigator.clone();
            let session_dispatch = session_dispatch.clone();
            spawn_local(async move {
                let client = LojinhaClient::shared();
                match client.update_user(user.id, &request).await {
                    Ok(updated) => {
                        let list = (*users)
                            .iter()
                            .map(|u| if u.id == updated.id { updated.clone() } else { u.clone() })
                            .collect();
                        users.set(list);
                        editing.set(None);
                    }
                    Err(err) => {
                        if let Some(message) =
                            session::admin_error(&session_dispatch, navigator.as_ref(), &err)
                        {
                            error.set(Some(message.message));
                        }
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let users = users.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        let session_dispatch = session_dispatch.clone();
        Callback::from(move |user: User| {
            if !confirm(&format!("Excluir o usuário \"{}\"?", user.username)) {
                return;
            }
            let users = users.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            let session_dispatch = session_dispatch.clone();
            spawn_local(async move {
                let client = LojinhaClient::shared();
                match client.delete_user(user.id).await {
                    Ok(()) => {
                        let list = (*users).iter().filter(|u| u.id != user.id).cloned().collect();
                        users.set(list);
                    }
                    Err(err) => {
                        if let Some(message) =
                            session::admin_error(&session_dispatch, navigator.as_ref(), &err)
                        {
                            error.set(Some(message.message));
                        }
                    }
                }
            });
        })
    };

    let on_reset_password = {
        let error = error.clone();
        let notice = notice.clone();
        let navigator = navigator.clone();
        let session_dispatch = session_dispatch.clone();
        Callback::from(move |user: User| {
            if !confirm("Tem certeza que deseja resetar a senha deste usuário?") {
                return;
            }
            let error = error.clone();
            let notice = notice.clone();
            let navigator = navigator.clone();
            let session_dispatch = session_dispatch.clone();
            spawn_local(async move {
                let client = LojinhaClient::shared();
                match client.admin_reset_password(user.id).await {
                    Ok(()) => notice.set(Some(
                        "Solicitação de reset de senha enviada com sucesso.".to_string(),
                    )),
                    Err(err) => {
                        if let Some(message) =
                            session::admin_error(&session_dispatch, navigator.as_ref(), &err)
                        {
                            error.set(Some(message.message));
                        }
                    }
                }
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

    html! {
        <>
            <header class="mb-6">
                <h1 class="text-3xl font-bold">{"Usuários"}</h1>
                <p class="text-base-content/60">{"Contas com acesso ao portal"}</p>
            </header>

            if let Some(message) = &*error {
                <div class="alert alert-error mb-4"><span>{message.clone()}</span></div>
            }
            if let Some(message) = &*notice {
                <div class="alert alert-success mb-4"><span>{message.clone()}</span></div>
            }

            if *loading {
                <p class="text-base-content/60">{"Carregando usuários..."}</p>
            } else if users.is_empty() {
                <p class="text-base-content/60">{"Nenhum usuário cadastrado."}</p>
            } else {
                <div class="overflow-x-auto">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Nome"}</th>
                                <th>{"Usuário"}</th>
                                <th>{"Email"}</th>
                                <th>{"Papel"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            { for users.iter().cloned().map(|user| {
                                let edit = {
                                    let start_edit = start_edit.clone();
                                    let user = user.clone();
                                    Callback::from(move |_: MouseEvent| start_edit.emit(user.clone()))
                                };
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let user = user.clone();
                                    Callback::from(move |_: MouseEvent| on_delete.emit(user.clone()))
                                };
                                let reset = {
                                    let on_reset_password = on_reset_password.clone();
                                    let user = user.clone();
                                    Callback::from(move |_: MouseEvent| on_reset_password.emit(user.clone()))
                                };
                                html! {
                                    <tr>
                                        <td>{user.name.clone()}</td>
                                        <td>{user.username.clone()}</td>
                                        <td>{user.email.clone()}</td>
                                        <td>{user.role.to_string()}</td>
                                        <td class="flex gap-2">
                                            <button class="btn btn-outline btn-xs" onclick={edit}>{"Editar"}</button>
                                            <button class="btn btn-outline btn-xs" onclick={reset}>{"Resetar senha"}</button>
                                            <button class="btn btn-error btn-xs" onclick={delete}>{"Excluir"}</button>
                                        </td>
                                    </tr>
                                }
                            }) }
                        </tbody>
                    </table>
                </div>
            }

            if editing.is_some() {
                <div class="modal modal-open">
                    <div class="modal-box">
                        <h3 class="font-bold text-lg mb-2">{"Editar usuário"}</h3>
                        <form onsubmit={on_save}>
                            <div class="form-control">
                                <label class="label" for="edit-name"><span class="label-text">{"Nome"}</span></label>
                                <input id="edit-name" class="input input-bordered" value={(*form_name).clone()} oninput={bind_input(&form_name)} />
                            </div>
                            <div class="form-control">
                                <label class="label" for="edit-email"><span class="label-text">{"Email"}</span></label>
                                <input id="edit-email" class="input input-bordered" type="email" value={(*form_email).clone()} oninput={bind_input(&form_email)} />
                            </div>
                            <div class="form-control">
                                <label class="label" for="edit-username"><span class="label-text">{"Usuário"}</span></label>
                                <input id="edit-username" class="input input-bordered" value={(*form_username).clone()} oninput={bind_input(&form_username)} />
                            </div>
                            <div class="modal-action">
                                <button class="btn" type="button" onclick={close_edit}>{"Cancelar"}</button>
                                <button class="btn btn-primary" type="submit" disabled={*saving}>
                                    {if *saving { "Salvando..." } else { "Salvar" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            }
        </>
    }
}
