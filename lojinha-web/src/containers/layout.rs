use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;
use yew_icons::{Icon, IconId};
use yewdux::prelude::*;

use crate::routes::MainRoute;
use crate::stores::cart::CartState;
use crate::stores::session::SessionState;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Public storefront chrome: header with the cart badge, content, footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();
    let cart = use_store_value::<CartState>();
    let session = use_store_value::<SessionState>();

    html! {
        <div class="min-h-screen bg-base-100 flex flex-col">
            <nav class="navbar justify-between bg-base-300">
                <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                    {i18n.t("app.title")}
                </Link<MainRoute>>
                <div class="flex items-center gap-2">
                    if session.is_authenticated() {
                        <Link<MainRoute> to={MainRoute::AdminRoot} classes="btn btn-ghost btn-sm">
                            {i18n.t("header.admin")}
                        </Link<MainRoute>>
                    }
                    <Link<MainRoute> to={MainRoute::Cart} classes="btn btn-ghost btn-sm">
                        <div class="indicator">
                            <Icon icon_id={IconId::HeroiconsOutlineShoppingCart} class="h-5 w-5" />
                            if cart.unit_count() > 0 {
                                <span class="badge badge-primary badge-sm indicator-item">
                                    {cart.unit_count()}
                                </span>
                            }
                        </div>
                        <span class="ml-1">{i18n.t("header.cart")}</span>
                    </Link<MainRoute>>
                </div>
            </nav>
            <main class="flex-grow p-4">
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{i18n.t("footer.note")}</p>
                </div>
            </footer>
        </div>
    }
}
