mod admin_categories;
mod admin_products;
mod admin_users;
mod cart;
mod category;
mod dashboard;
mod error;
mod forgot_password;
mod home;
mod login;
mod mfa;
mod product_form;
mod profile;
mod recovery_code;
mod reset_password;
mod signup;

pub use admin_categories::AdminCategoriesPage;
pub use admin_products::AdminProductsPage;
pub use admin_users::AdminUsersPage;
pub use cart::CartPage;
pub use category::CategoryPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use mfa::MfaPage;
pub use product_form::ProductFormPage;
pub use profile::ProfilePage;
pub use recovery_code::RecoveryCodePage;
pub use reset_password::ResetPasswordPage;
pub use signup::SignupPage;
