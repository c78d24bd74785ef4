use super::*;

fn catalog() -> CatalogState {
    CatalogState {
        categories: vec![
            Category {
                id: "canecas".to_string(),
                name: "Canecas".to_string(),
                description: "Canecas personalizadas".to_string(),
                products: vec![Product {
                    id: "caneca-azul".to_string(),
                    name: "Caneca Azul".to_string(),
                    price: 25.0,
                    image: "/img/caneca-azul.jpg".to_string(),
                    description: None,
                    tag: Some("Novo".to_string()),
                    category_id: String::new(),
                    category_name: String::new(),
                }],
            },
            Category {
                id: "chaveiros".to_string(),
                name: "Chaveiros".to_string(),
                description: "Chaveiros em resina".to_string(),
                products: Vec::new(),
            },
        ],
        tags: vec!["Novo".to_string()],
    }
}

fn draft(name: &str, category_id: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price: 12.5,
        image: "/img/item.jpg".to_string(),
        description: Some("Feito à mão".to_string()),
        tag: None,
        category_id: category_id.to_string(),
    }
}

// =============================================================
// Products
// =============================================================

#[test]
fn create_product_lands_in_its_category() {
    let mut state = catalog();
    let created = state.create_product(&draft("Chaveiro Coração", "chaveiros")).unwrap();
    assert_eq!(created.id, "chaveiro-coração");
    assert_eq!(created.category_name, "Chaveiros");
    assert_eq!(state.category("chaveiros").unwrap().products.len(), 1);
}

#[test]
fn create_product_rejects_unknown_category() {
    let mut state = catalog();
    assert!(state.create_product(&draft("Qualquer", "inexistente")).is_none());
}

#[test]
fn create_product_disambiguates_colliding_slugs() {
    let mut state = catalog();
    let first = state.create_product(&draft("Chaveiro", "chaveiros")).unwrap();
    let second = state.create_product(&draft("Chaveiro", "chaveiros")).unwrap();
    assert_eq!(first.id, "chaveiro");
    assert_eq!(second.id, "chaveiro-2");
}

#[test]
fn update_product_in_place_keeps_category() {
    let mut state = catalog();
    let mut changes = draft("Caneca Azul Royal", "canecas");
    changes.price = 29.9;
    state.update_product("caneca-azul", &changes);

    let updated = state.product("caneca-azul").unwrap();
    assert_eq!(updated.name, "Caneca Azul Royal");
    assert!((updated.price - 29.9).abs() < f64::EPSILON);
    assert_eq!(updated.category_id, "canecas");
}

#[test]
fn update_product_moves_between_categories() {
    let mut state = catalog();
    state.update_product("caneca-azul", &draft("Caneca Azul", "chaveiros"));
    assert!(state.category("canecas").unwrap().products.is_empty());
    let moved = state.product("caneca-azul").unwrap();
    assert_eq!(moved.category_id, "chaveiros");
}

#[test]
fn delete_product_removes_the_row() {
    let mut state = catalog();
    state.delete_product("caneca-azul");
    assert!(state.product("caneca-azul").is_none());
    assert!(state.products().is_empty());
}

#[test]
fn products_carry_denormalized_category_fields() {
    let state = catalog();
    let products = state.products();
    assert_eq!(products[0].category_id, "canecas");
    assert_eq!(products[0].category_name, "Canecas");
}

// =============================================================
// Tags
// =============================================================

#[test]
fn create_tag_trims_and_deduplicates() {
    let mut state = catalog();
    assert_eq!(state.create_tag("  Promoção "), Some("Promoção".to_string()));
    assert_eq!(state.create_tag("Promoção"), Some("Promoção".to_string()));
    assert_eq!(state.tags, vec!["Novo".to_string(), "Promoção".to_string()]);
}

#[test]
fn create_tag_rejects_blank_input() {
    let mut state = catalog();
    assert_eq!(state.create_tag("   "), None);
    assert_eq!(state.tags.len(), 1);
}

// =============================================================
// Categories
// =============================================================

#[test]
fn create_category_yields_slug_id() {
    let mut state = catalog();
    let id = state.create_category("Ímãs de Geladeira", "Lembrancinhas");
    assert_eq!(id, "ímãs-de-geladeira");
    assert!(state.category(&id).unwrap().products.is_empty());
}

#[test]
fn update_category_keeps_products() {
    let mut state = catalog();
    state.update_category("canecas", "Canecas e Copos", "Tudo para beber");
    let category = state.category("canecas").unwrap();
    assert_eq!(category.name, "Canecas e Copos");
    assert_eq!(category.products.len(), 1);
}

#[test]
fn delete_category_drops_its_products() {
    let mut state = catalog();
    state.delete_category("canecas");
    assert!(state.category("canecas").is_none());
    assert!(state.product("caneca-azul").is_none());
}

// =============================================================
// Seed helpers
// =============================================================

#[test]
fn seed_tags_are_distinct_and_ordered() {
    let state = catalog();
    let tags = seed_tags(&state.categories);
    assert_eq!(tags, vec!["Novo".to_string()]);
}

#[test]
fn seed_catalog_is_not_empty() {
    let categories = seed_categories();
    assert!(!categories.is_empty());
    assert!(categories.iter().any(|category| !category.products.is_empty()));
}
