pub(crate) mod admin_layout;
pub(crate) mod layout;
pub(crate) mod portal;
