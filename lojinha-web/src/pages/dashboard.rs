use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::*;

use crate::routes::AdminRoute;
use crate::stores::catalog::CatalogState;
use crate::stores::session::SessionState;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let catalog = use_store_value::<CatalogState>();
    let session = use_store_value::<SessionState>();

    let product_count = catalog.products().len();
    let category_count = catalog.categories.len();

    html! {
        <>
            <header class="mb-6">
                <h1 class="text-3xl font-bold">{"Painel"}</h1>
                if let Some(user) = &session.user {
                    <p class="text-base-content/60">{format!("Bem-vindo(a), {}.", user.name)}</p>
                }
            </header>

            <div class="stats shadow mb-8">
                <div class="stat">
                    <div class="stat-title">{"Produtos"}</div>
                    <div class="stat-value">{product_count}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Categorias"}</div>
                    <div class="stat-value">{category_count}</div>
                </div>
            </div>

            <div class="flex gap-3">
                <Link<AdminRoute> to={AdminRoute::Products} classes="btn btn-primary">
                    {"Gerenciar produtos"}
                </Link<AdminRoute>>
                <Link<AdminRoute> to={AdminRoute::Categories} classes="btn btn-outline">
                    {"Gerenciar categorias"}
                </Link<AdminRoute>>
            </div>
        </>
    }
}
