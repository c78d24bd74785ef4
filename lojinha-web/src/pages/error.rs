use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="text-center py-16">
            <h1 class="text-5xl font-bold">{"404"}</h1>
            <p class="text-base-content/60 mt-2">{"A página que você procura não existe."}</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary mt-6">
                {"Voltar à loja"}
            </Link<MainRoute>>
        </div>
    }
}
