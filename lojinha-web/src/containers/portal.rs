use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PortalShellProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub children: Children,
}

/// Centered card shell shared by every portal (login/MFA/recovery) view.
#[function_component(PortalShell)]
pub fn portal_shell(props: &PortalShellProps) -> Html {
    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <div class="card-body">
                    <h2 class="card-title text-2xl">{props.title.clone()}</h2>
                    <p class="text-sm text-base-content/70">{props.subtitle.clone()}</p>
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}
