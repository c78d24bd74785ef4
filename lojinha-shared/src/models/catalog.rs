use serde::{Deserialize, Serialize};

/// A product as displayed in the storefront and managed in the portal.
///
/// `category_id`/`category_name` are denormalized from the owning category
/// so a flat product list can render without a category lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Slug identifier, unique across the whole catalog.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price in the store currency.
    pub price: f64,

    /// Image URL.
    pub image: String,

    /// Optional long description.
    #[serde(default)]
    pub description: Option<String>,

    /// Optional display tag ("Novo", "Promoção", ...).
    #[serde(default)]
    pub tag: Option<String>,

    /// Slug of the owning category.
    #[serde(default)]
    pub category_id: String,

    /// Name of the owning category.
    #[serde(default)]
    pub category_name: String,
}

/// A storefront category and the products it owns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Slug identifier, also used in the public category route.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Short description shown under the category title.
    pub description: String,

    /// Products belonging to this category.
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Category {
    /// Products of this category with the denormalized category fields
    /// filled in.
    #[must_use]
    pub fn flattened_products(&self) -> Vec<Product> {
        self.products
            .iter()
            .map(|product| Product {
                category_id: self.id.clone(),
                category_name: self.name.clone(),
                ..product.clone()
            })
            .collect()
    }
}

/// Flatten a category list into a single product list, filling the
/// denormalized category fields of every product.
#[must_use]
pub fn flatten_categories(categories: &[Category]) -> Vec<Product> {
    categories
        .iter()
        .flat_map(Category::flattened_products)
        .collect()
}

/// Build a URL-safe slug from a display name. Empty input yields an
/// empty slug; callers append a uniqueness suffix where one is needed.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_dash = true;
    for c in name.chars() {
        let lowered = c.to_lowercase().next().unwrap_or(c);
        if lowered.is_alphanumeric() {
            slug.push(lowered);
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_with(products: Vec<Product>) -> Category {
        Category {
            id: "canecas".to_string(),
            name: "Canecas".to_string(),
            description: "Canecas personalizadas".to_string(),
            products,
        }
    }

    fn bare_product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: 25.0,
            image: format!("/img/{id}.jpg"),
            description: None,
            tag: None,
            category_id: String::new(),
            category_name: String::new(),
        }
    }

    #[test]
    fn flatten_fills_category_fields() {
        let category = category_with(vec![bare_product("caneca-azul", "Caneca Azul")]);
        let products = flatten_categories(&[category]);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].category_id, "canecas");
        assert_eq!(products[0].category_name, "Canecas");
    }

    #[test]
    fn flatten_preserves_order_across_categories() {
        let first = category_with(vec![bare_product("a", "A"), bare_product("b", "B")]);
        let mut second = category_with(vec![bare_product("c", "C")]);
        second.id = "chaveiros".to_string();
        let products = flatten_categories(&[first, second]);
        let ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn product_deserializes_without_optional_fields() {
        let json = r#"{"id":"caneca","name":"Caneca","price":19.9,"image":"/img/caneca.jpg"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.description, None);
        assert_eq!(product.tag, None);
        assert!(product.category_id.is_empty());
    }

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Caneca Azul"), "caneca-azul");
        assert_eq!(slugify("  Kit   Festa! "), "kit-festa");
        assert_eq!(slugify("Ímã de Geladeira"), "ímã-de-geladeira");
    }

    #[test]
    fn slugify_empty_and_symbols() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
