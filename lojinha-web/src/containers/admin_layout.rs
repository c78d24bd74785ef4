use i18nrs::yew::use_translation;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::routes::{AdminRoute, MainRoute};
use crate::stores::session::{self, SessionState};

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub children: Children,
}

/// Back-office chrome: portal navigation, logout, and a way back to the
/// public storefront.
#[function_component(AdminLayout)]
pub fn admin_layout(props: &AdminLayoutProps) -> Html {
    let (i18n, ..) = use_translation();
    let (session, dispatch) = use_store::<SessionState>();
    let navigator = use_navigator();

    let nav_routes = AdminRoute::iter().filter(|route| {
        !matches!(
            route,
            AdminRoute::NotFound | AdminRoute::NewProduct | AdminRoute::EditProduct { .. }
        )
    });

    let on_logout = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                session::logout(&dispatch, navigator.as_ref()).await;
            });
        })
    };

    html! {
        <div class="min-h-screen bg-base-100">
            <nav class="navbar justify-between bg-base-300">
                <div class="flex items-center gap-2">
                    <span class="btn btn-ghost text-lg">{i18n.t("admin.title")}</span>
                    <ul class="menu menu-horizontal px-1">
                        { for nav_routes.map(|route| html! {
                            <li>
                                <Link<AdminRoute> to={route.clone()}>
                                    {i18n.t(route.label_key())}
                                </Link<AdminRoute>>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="flex items-center gap-2">
                    if let Some(user) = &session.user {
                        <span class="text-sm text-base-content/80">{&user.name}</span>
                    }
                    <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost btn-sm">
                        {i18n.t("admin.back_to_site")}
                    </Link<MainRoute>>
                    <button class="btn btn-outline btn-sm" onclick={on_logout}>
                        {i18n.t("admin.logout")}
                    </button>
                </div>
            </nav>
            <main class="p-4">
                {props.children.clone()}
            </main>
        </div>
    }
}
