use shared::models::UserRole;
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::route_guard::RouteGuard;
use crate::containers::admin_layout::AdminLayout;
use crate::containers::layout::Layout;
use crate::pages::*;
use crate::stores::session::SessionStatus;

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// The public storefront and portal routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/categoria/:slug")]
    Category { slug: String },
    #[at("/carrinho")]
    Cart,
    #[at("/portal/entrar")]
    Login,
    #[at("/portal/mfa/:user_id")]
    Mfa { user_id: String },
    #[at("/portal/esqueci-senha")]
    ForgotPassword,
    #[at("/portal/codigo/:user_id")]
    RecoveryCode { user_id: String },
    #[at("/portal/redefinir-senha/:user_id")]
    ResetPassword { user_id: String },
    #[at("/admin")]
    AdminRoot,
    #[at("/admin/*")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// The guarded back-office routes.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum AdminRoute {
    #[at("/admin")]
    Home,
    #[at("/admin/produtos")]
    Products,
    #[at("/admin/produtos/novo")]
    NewProduct,
    #[at("/admin/produtos/:id/editar")]
    EditProduct { id: String },
    #[at("/admin/categorias")]
    Categories,
    #[at("/admin/usuarios")]
    Users,
    #[at("/admin/perfil")]
    Profile,
    #[at("/admin/cadastro")]
    Signup,
    #[not_found]
    #[at("/admin/404")]
    NotFound,
}

impl AdminRoute {
    /// Translation key of this route's navigation label.
    #[must_use]
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Home | Self::NotFound => "admin.nav.home",
            Self::Products | Self::NewProduct | Self::EditProduct { .. } => "admin.nav.products",
            Self::Categories => "admin.nav.categories",
            Self::Users => "admin.nav.users",
            Self::Profile => "admin.nav.profile",
            Self::Signup => "admin.nav.signup",
        }
    }
}

/// What the route guard decided for a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The startup session check has not resolved; render a neutral
    /// placeholder, never a redirect.
    Wait,
    /// Not authenticated (or wrong role, indistinguishable here); go to
    /// the login view.
    Redirect,
    /// Session is good; render the protected content.
    Render,
}

/// Decide whether a protected view renders, waits, or bounces to login.
///
/// Role gating is advisory UX only; the server owns real authorization.
#[must_use]
pub fn guard(
    status: SessionStatus,
    role: Option<UserRole>,
    required_role: Option<UserRole>,
) -> GuardOutcome {
    match status {
        SessionStatus::Checking => GuardOutcome::Wait,
        SessionStatus::Authenticated => match required_role {
            Some(required) if role != Some(required) => GuardOutcome::Redirect,
            _ => GuardOutcome::Render,
        },
        SessionStatus::Unauthenticated | SessionStatus::PendingMfa => GuardOutcome::Redirect,
    }
}

/// Switch function for the public and portal routes.
pub fn switch_main(route: MainRoute) -> Html {
    match route {
        MainRoute::Home => html! { <Layout><HomePage /></Layout> },
        MainRoute::Category { slug } => html! { <Layout><CategoryPage {slug} /></Layout> },
        MainRoute::Cart => html! { <Layout><CartPage /></Layout> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Mfa { user_id } => html! { <MfaPage {user_id} /> },
        MainRoute::ForgotPassword => html! { <ForgotPasswordPage /> },
        MainRoute::RecoveryCode { user_id } => html! { <RecoveryCodePage {user_id} /> },
        MainRoute::ResetPassword { user_id } => html! { <ResetPasswordPage {user_id} /> },
        MainRoute::AdminRoot | MainRoute::Admin => html! {
            <RouteGuard>
                <Switch<AdminRoute> render={switch_admin} />
            </RouteGuard>
        },
        MainRoute::NotFound => html! { <Layout><ErrorPage /></Layout> },
    }
}

/// Switch function for the back-office routes. Already behind the outer
/// guard; user management and signup additionally require the admin role.
fn switch_admin(route: AdminRoute) -> Html {
    let page = match route {
        AdminRoute::Home => html! { <DashboardPage /> },
        AdminRoute::Products => html! { <AdminProductsPage /> },
        AdminRoute::NewProduct => html! { <ProductFormPage id={None::<String>} /> },
        AdminRoute::EditProduct { id } => html! { <ProductFormPage id={Some(id)} /> },
        AdminRoute::Categories => html! { <AdminCategoriesPage /> },
        AdminRoute::Users => html! {
            <RouteGuard required_role={UserRole::Admin}>
                <AdminUsersPage />
            </RouteGuard>
        },
        AdminRoute::Profile => html! { <ProfilePage /> },
        AdminRoute::Signup => html! {
            <RouteGuard required_role={UserRole::Admin}>
                <SignupPage />
            </RouteGuard>
        },
        AdminRoute::NotFound => {
            return html! { <Redirect<MainRoute> to={MainRoute::NotFound} /> };
        }
    };
    html! { <AdminLayout>{page}</AdminLayout> }
}
