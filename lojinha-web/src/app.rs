use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::routes::{MainRoute, switch_main};
use crate::stores::cart::CartState;
use crate::stores::catalog::CatalogState;
use crate::stores::session::{self, SessionState};

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "app_test.rs"]
mod app_test;

/// Root component: restores the persisted stores, fires the startup
/// session check, and mounts the router.
///
/// The router renders immediately; the public storefront never waits on
/// the session probe, and guarded views see `Checking` until it resolves.
#[function_component(App)]
pub fn app() -> Html {
    let (_, session_dispatch) = use_store::<SessionState>();
    let (_, cart_dispatch) = use_store::<CartState>();
    let (_, catalog_dispatch) = use_store::<CatalogState>();

    use_effect_with((), move |()| {
        cart_dispatch.set(CartState::restore());
        catalog_dispatch.set(CatalogState::restore());
        spawn_local(async move {
            session::check_session(&session_dispatch).await;
        });
        || ()
    });

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch_main} />
        </BrowserRouter>
    }
}
