//! Frontend configuration module
//!
//! Build-time-overridable URLs plus the local-storage keys owned by the
//! client stores. Each store owns exactly one key; the namespace prefix
//! keeps them from colliding with anything else on the same origin.

/// Local-storage key holding the cart snapshot.
pub const CART_STORAGE_KEY: &str = "lojinha.cart.v1";

/// Local-storage key holding the category/catalog snapshot.
pub const CATEGORIES_STORAGE_KEY: &str = "lojinha.categories.v1";

/// Local-storage key holding the product tag list.
pub const TAGS_STORAGE_KEY: &str = "lojinha.tags.v1";

/// Frontend configuration for URLs and external contact points.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base path of the REST API.
    pub api_base: String,
    /// WhatsApp number orders are handed off to, in international format
    /// without the leading `+`.
    pub whatsapp_number: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("LOJINHA_API_BASE").unwrap_or("/api").to_string(),
            whatsapp_number: option_env!("LOJINHA_WHATSAPP")
                .unwrap_or("5511999990000")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base.is_empty());
        assert!(!config.whatsapp_number.is_empty());
    }

    #[test]
    fn test_storage_keys_are_namespaced_and_distinct() {
        let keys = [CART_STORAGE_KEY, CATEGORIES_STORAGE_KEY, TAGS_STORAGE_KEY];
        for key in keys {
            assert!(key.starts_with("lojinha."));
        }
        assert_ne!(CART_STORAGE_KEY, CATEGORIES_STORAGE_KEY);
        assert_ne!(CART_STORAGE_KEY, TAGS_STORAGE_KEY);
        assert_ne!(CATEGORIES_STORAGE_KEY, TAGS_STORAGE_KEY);
    }
}
