use shared::models::UserRole;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::components::loading::Loading;
use crate::routes::{GuardOutcome, MainRoute, guard};
use crate::stores::session::SessionState;

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    /// Extra role requirement on top of being authenticated.
    #[prop_or_default]
    pub required_role: Option<UserRole>,
    #[prop_or_default]
    pub children: Children,
}

/// Gates protected content on session state. While the startup session
/// check is in flight nothing is decided yet, so a placeholder renders
/// instead of a premature redirect.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let session = use_store_value::<SessionState>();

    match guard(session.status, session.role(), props.required_role) {
        GuardOutcome::Wait => html! { <Loading /> },
        GuardOutcome::Redirect => html! { <Redirect<MainRoute> to={MainRoute::Login} /> },
        GuardOutcome::Render => html! { <>{ for props.children.iter() }</> },
    }
}
